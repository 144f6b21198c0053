use crate::extractors::{AppJson, UserId};
use crate::middleware::auth::UnauthorizedResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{info, instrument};
use usermgmt_core::errors::{AppError, ErrorResponse, FieldError};
use usermgmt_models::users::{User, UserPayload};

/// Get all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = UnauthorizedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list()?;
    Ok(Json(users))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = UnauthorizedResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, AppError> {
    let user = state.users.get(id)?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = User,
            headers(("Location" = String, description = "Path of the created user"))),
        (status = 400, description = "Validation failed", body = Vec<FieldError>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = UnauthorizedResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.create(payload)?;
    info!(user_id = %user.id, "User created");

    let location = format!("/api/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Update an existing user's name and email
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "User id")
    ),
    request_body = UserPayload,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Validation failed", body = Vec<FieldError>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = UnauthorizedResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    AppJson(payload): AppJson<UserPayload>,
) -> Result<StatusCode, AppError> {
    state.users.update(id, payload)?;
    info!(user_id = %id, "User updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = UnauthorizedResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, AppError> {
    state.users.delete(id)?;
    info!(user_id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
