//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use idea_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List comments on an idea
///
/// GET /api/ideas/{idea_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let idea_id = parse_id(&idea_id, "idea_id")?;

    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(idea_id).await?;
    Ok(Json(comments))
}

/// Add a comment to an idea
///
/// POST /api/ideas/{idea_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let idea_id = parse_id(&idea_id, "idea_id")?;

    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(idea_id, auth.user_id, request).await?;
    Ok(Created(Json(comment)))
}

/// Delete a comment
///
/// DELETE /api/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = parse_id(&id, "comment_id")?;

    let service = CommentService::new(state.service_context());
    service.delete_comment(comment_id).await?;
    Ok(NoContent)
}
