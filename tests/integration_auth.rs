mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    TEST_TOKEN, body_bytes, body_json, build_request, content_type, send, setup_test_app,
    state_with_validator,
};
use serde_json::json;
use usermgmt::router::init_router;
use usermgmt::usermgmt_auth::AllowListTokenValidator;

fn with_raw_authorization(uri: &str, value: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", value)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let (app, _) = setup_test_app();

    let response = send(&app, build_request("GET", "/api/users", None, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(content_type(&response).starts_with("application/json"));

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 401, "message": "Authentication token is required" })
    );
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let (app, _) = setup_test_app();

    let response = send(&app, build_request("GET", "/api/users", Some("invalid"), None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 401, "message": "Invalid authentication token" })
    );
}

#[tokio::test]
async fn test_empty_bearer_token_is_rejected() {
    let (app, _) = setup_test_app();

    let response = send(&app, with_raw_authorization("/api/users", "Bearer ")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["message"],
        "Invalid authentication token"
    );
}

#[tokio::test]
async fn test_any_other_token_passes() {
    let (app, _) = setup_test_app();

    let response = send(
        &app,
        build_request("GET", "/api/users", Some("anything-else"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_raw_token_without_scheme_passes() {
    let (app, _) = setup_test_app();

    let response = send(&app, with_raw_authorization("/api/users", TEST_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_scheme_is_case_insensitive() {
    let (app, _) = setup_test_app();

    let response = send(&app, with_raw_authorization("/api/users", "bearer   invalid  ")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, with_raw_authorization("/api/users", "BEARER good")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_is_public() {
    let (app, _) = setup_test_app();

    let response = send(&app, build_request("GET", "/", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Hello World!");
}

#[tokio::test]
async fn test_root_ignores_invalid_token() {
    let (app, _) = setup_test_app();

    let response = send(&app, build_request("GET", "/", Some("invalid"), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let (app, _) = setup_test_app();

    let response = send(&app, build_request("GET", "/swagger/openapi.json", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/api/users"].is_object());
    assert!(body["paths"]["/api/users/{id}"].is_object());
}

#[tokio::test]
async fn test_login_prefix_is_public() {
    let (app, _) = setup_test_app();

    // No login route exists, so the public path falls through to the 404 fallback.
    let response = send(&app, build_request("POST", "/api/auth/login", None, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Resource not found." })
    );
}

#[tokio::test]
async fn test_unknown_path_requires_token() {
    let (app, _) = setup_test_app();

    let response = send(&app, build_request("GET", "/api/unknown", None, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(
        &app,
        build_request("GET", "/api/unknown", Some(TEST_TOKEN), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Resource not found." })
    );
}

#[tokio::test]
async fn test_allow_list_validator_replaces_placeholder() {
    let state = state_with_validator(Arc::new(AllowListTokenValidator::new(["letmein"])));
    let app = init_router(state);

    let response = send(
        &app,
        build_request("GET", "/api/users", Some("anything-else"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, build_request("GET", "/api/users", Some("letmein"), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
