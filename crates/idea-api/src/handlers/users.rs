//! User handlers
//!
//! Administrative endpoints for user management.

use axum::{
    extract::{Path, State},
    Json,
};
use idea_service::{UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List all users
///
/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by id
///
/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&id, "user_id")?;

    let service = UserService::new(state.service_context());
    let user = service.get_user(user_id).await?;
    Ok(Json(user))
}

/// Update a user
///
/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&id, "user_id")?;

    let service = UserService::new(state.service_context());
    let user = service.update_user(user_id, request).await?;
    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let user_id = parse_id(&id, "user_id")?;

    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(NoContent)
}
