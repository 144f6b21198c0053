//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so malformed input goes through the error boundary
//! like every other failure.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use usermgmt_core::errors::AppError;
use uuid::Uuid;

fn describe_rejection(rejection: &JsonRejection) -> String {
    let error_msg = rejection.body_text();

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    if error_msg.contains("invalid type") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

/// JSON body extractor. Parsing failures become [`AppError::InvalidOperation`].
///
/// Validation is left to the store so that an unknown id is reported before
/// an invalid body.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_operation(describe_rejection(&rejection)))?;

        Ok(AppJson(value))
    }
}

/// The `{id}` path segment, parsed as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Uuid);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid_operation(rejection.body_text()))?;

        Uuid::parse_str(&raw)
            .map(UserId)
            .map_err(|_| AppError::invalid_operation(format!("Invalid user id: {raw}")))
    }
}
