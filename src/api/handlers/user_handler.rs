//! User handlers.
//!
//! All four operations share the `/users` path; the target user is picked
//! with the `id` query parameter.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_USER_DELETED, MSG_USER_ID_REQUIRED};
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::types::MessageResponse;

/// `?id=` selector shared by every user route
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// User ID
    pub id: Option<String>,
}

impl UserQuery {
    /// Raw id, with a blank value treated as absent.
    fn raw_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// Id required by mutating routes.
    fn required_id(&self) -> AppResult<&str> {
        self.raw_id()
            .ok_or_else(|| AppError::bad_request(MSG_USER_ID_REQUIRED))
    }
}

/// Ids that are not UUIDs cannot name a stored user.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_users)
            .post(create_user)
            .patch(update_user)
            .delete(delete_user),
    )
}

/// List users, or fetch one when `id` is given
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(UserQuery),
    responses(
        (status = 200, description = "All users, or the user matching `id`", body = Vec<UserResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Response> {
    let Some(raw) = query.raw_id() else {
        let users = state.user_service.list_users().await?;
        return Ok(Json(users).into_response());
    };

    let user = match parse_id(raw) {
        Some(id) => state.user_service.get_user(id).await?,
        None => None,
    };

    user.map(|u| Json(u).into_response())
        .ok_or_else(|| AppError::not_found("User"))
}

/// Self-register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 405, description = "Role not open to self-registration"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update the fields present in the body
#[utoipa::path(
    patch,
    path = "/users",
    tag = "Users",
    params(UserQuery),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Missing id or validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let Some(id) = parse_id(query.required_id()?) else {
        return Err(AppError::not_found("User"));
    };

    state
        .user_service
        .update_user(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("User"))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users",
    tag = "Users",
    params(UserQuery),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Missing id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<MessageResponse>> {
    let removed = match parse_id(query.required_id()?) {
        Some(id) => state.user_service.delete_user(id).await?,
        None => false,
    };

    if !removed {
        return Err(AppError::not_found("User"));
    }

    Ok(Json(MessageResponse::new(MSG_USER_DELETED)))
}
