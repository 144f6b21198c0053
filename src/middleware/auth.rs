//! Bearer token authentication middleware.
//!
//! Every request outside the public path prefixes must carry an
//! `Authorization` header. The value may be `Bearer <token>` (scheme matched
//! case-insensitively) or the raw token. The token itself is judged by the
//! [`TokenValidator`] held in [`AppState`].
//!
//! Rejections are answered here with a 401 and never reach the error
//! boundary.

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use usermgmt_auth::TokenValidator;
use utoipa::ToSchema;

use crate::state::AppState;

/// Path prefixes that bypass authentication.
pub const PUBLIC_PATH_PREFIXES: [&str; 3] = ["/", "/swagger", "/api/auth/login"];

const BEARER_SCHEME: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    MissingToken,
    InvalidToken,
}

impl AuthErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingToken => "Authentication token is required",
            Self::InvalidToken => "Invalid authentication token",
        }
    }

    fn log_detail(self) -> &'static str {
        match self {
            Self::MissingToken => "No Authorization header present",
            Self::InvalidToken => "Invalid token",
        }
    }
}

/// Body of a 401 produced by the authentication gate.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnauthorizedResponse {
    pub status: u16,
    pub message: String,
}

impl IntoResponse for AuthErrorKind {
    fn into_response(self) -> Response {
        let body = Json(UnauthorizedResponse {
            status: StatusCode::UNAUTHORIZED.as_u16(),
            message: self.message().to_string(),
        });

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

/// Segment-aware, case-insensitive prefix match: `/swagger` matches
/// `/Swagger/openapi.json` but not `/swaggerish`, and `/` matches only the root.
fn starts_with_segments(path: &str, prefix: &str) -> bool {
    let Some(head) = path.get(..prefix.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(prefix) {
        return false;
    }
    matches!(path.as_bytes().get(prefix.len()), None | Some(b'/'))
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATH_PREFIXES
        .iter()
        .any(|prefix| starts_with_segments(path, prefix))
}

/// Strips an optional `Bearer ` scheme and the whitespace around the token.
pub fn raw_token(value: &str) -> &str {
    match value.get(..BEARER_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            value[BEARER_SCHEME.len()..].trim()
        }
        _ => value,
    }
}

pub fn check_token(
    headers: &HeaderMap,
    validator: &dyn TokenValidator,
) -> Result<(), AuthErrorKind> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthErrorKind::MissingToken)?
        .to_str()
        .map_err(|_| AuthErrorKind::InvalidToken)?;

    if validator.is_valid(raw_token(value)) {
        Ok(())
    } else {
        Err(AuthErrorKind::InvalidToken)
    }
}

pub async fn authenticate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if is_public_path(req.uri().path()) {
        return next.run(req).await;
    }

    match check_token(req.headers(), state.token_validator.as_ref()) {
        Ok(()) => {
            debug!(path = %req.uri().path(), "Request authenticated");
            next.run(req).await
        }
        Err(kind) => {
            warn!(
                path = %req.uri().path(),
                reason = ?kind,
                "Authentication failed: {}",
                kind.log_detail()
            );
            kind.into_response()
        }
    }
}
