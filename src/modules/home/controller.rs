use axum::http::{Method, Uri};
use usermgmt_core::errors::AppError;

/// Public greeting served at `/`.
pub async fn home() -> &'static str {
    "Hello World!"
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}

/// Fallback for a known path hit with a verb it does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(format!("{method} {}", uri.path()))
}
