use crate::docs::openapi_json;
use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::middleware::error_handling::{handle_errors, handle_panic};
use crate::modules::home::controller::{home, method_not_allowed, not_found};
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use usermgmt_config::CorsConfig;

pub fn init_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(home))
        .route("/swagger/openapi.json", get(openapi_json))
        .nest("/api/users", init_users_router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found);

    with_pipeline(routes, state)
}

/// Wraps `routes` in the request pipeline, innermost first: authentication,
/// panic capture, the error boundary, CORS and request logging.
pub fn with_pipeline(routes: Router<AppState>, state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    routes
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(handle_errors))
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
