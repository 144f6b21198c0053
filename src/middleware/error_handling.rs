//! Outermost failure boundary.
//!
//! Handlers, extractors and the store only signal typed [`AppError`]s; the
//! response they produce carries the failure as a [`Failure`] extension and
//! no body. [`handle_errors`] is the single place that logs those failures
//! and renders them as JSON. Panics below the boundary are caught by
//! [`handle_panic`] and surface as an internal error.

use std::any::Any;

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;
use usermgmt_core::errors::{AppError, Failure};

/// Left on a rendered failure response so outer layers can tell which
/// failure produced it without logging it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandledFailure(pub &'static str);

pub async fn handle_errors(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    match response.extensions_mut().remove::<Failure>() {
        Some(Failure(err)) => {
            error!(
                method = %method,
                path = %path,
                status = err.status().as_u16(),
                error = ?err,
                "An unhandled error has occurred while executing the request"
            );
            let mut rendered = err.render();
            rendered.extensions_mut().insert(HandledFailure(err.kind()));
            rendered
        }
        None => response,
    }
}

/// Turns a caught panic payload into an internal failure for the boundary.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(anyhow!("request handler panicked: {detail}")).into_response()
}
