use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const INTERNAL_MESSAGE: &str = "Internal server error.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed.";

/// A single validation violation reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "Property")]
    pub property: String,
    #[serde(rename = "Error")]
    pub error: String,
}

impl FieldError {
    pub fn new(property: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            error: error.into(),
        }
    }
}

/// Body of every non-validation failure response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures signalled by handlers and the store.
///
/// Nothing downstream of the error boundary renders these; they travel
/// inside the response as a [`Failure`] and are translated exactly once.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidOperation(String),
    #[error("validation failed: {}", summarize(.0))]
    ValidationFailed(Vec<FieldError>),
    #[error("{0}")]
    Unauthorized(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.property, e.error))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn method_not_allowed(method: impl Into<String>) -> Self {
        Self::MethodNotAllowed(method.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidOperation(_) | Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable name of the variant, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidOperation(_) => "invalid_operation",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::MethodNotAllowed(_) => "method_not_allowed",
            Self::Internal(_) => "internal",
        }
    }

    /// Message safe to show to clients. Internal detail never leaves the process.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidOperation(message) | Self::Unauthorized(message) => message.clone(),
            Self::ValidationFailed(errors) => summarize(errors),
            Self::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            Self::MethodNotAllowed(_) => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Builds the structured JSON response for this failure.
    pub fn render(&self) -> Response {
        match self {
            Self::ValidationFailed(errors) => (self.status(), Json(errors)).into_response(),
            _ => (
                self.status(),
                Json(ErrorResponse {
                    error: self.public_message(),
                }),
            )
                .into_response(),
        }
    }
}

/// Marker carried in response extensions so the error boundary can find the
/// failure that produced a response.
#[derive(Debug, Clone)]
pub struct Failure(pub Arc<AppError>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response.extensions_mut().insert(Failure(Arc::new(self)));
        response
    }
}
