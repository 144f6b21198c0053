use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use usermgmt::router::init_router;
use usermgmt::state::AppState;
use usermgmt::usermgmt_auth::{PlaceholderTokenValidator, TokenValidator};
use usermgmt::usermgmt_config::CorsConfig;
use uuid::Uuid;

#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

#[allow(dead_code)]
pub fn test_state() -> AppState {
    state_with_validator(Arc::new(PlaceholderTokenValidator))
}

#[allow(dead_code)]
pub fn state_with_validator(validator: Arc<dyn TokenValidator>) -> AppState {
    AppState::new(validator, CorsConfig::default())
}

#[allow(dead_code)]
pub fn setup_test_app() -> (Router, AppState) {
    let state = test_state();
    (init_router(state.clone()), state)
}

/// Builds a request. `token` is sent as `Authorization: Bearer <token>` and a
/// `body` is sent as JSON.
#[allow(dead_code)]
pub fn build_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[allow(dead_code)]
pub fn content_type(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
