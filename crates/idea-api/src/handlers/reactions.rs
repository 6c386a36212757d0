//! Reaction handlers
//!
//! Endpoints for the vote toggle on ideas.

use axum::{
    extract::{Path, State},
    Json,
};
use idea_core::value_objects::ReactionKind;
use idea_service::{ReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::{parse_id, ValidatedJson};
use crate::response::{ApiResult, ApiError};
use crate::state::AppState;

/// Apply a reaction under the toggle policy
///
/// The body carries the reacting username, the idea, and the requested
/// sign as a label ("upvote" / "downvote"). Answers the resulting row,
/// or `null` when the request removed it.
///
/// POST /api/reactions
pub async fn react(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Json<Option<ReactionResponse>>> {
    // Parse the label at the boundary so a bad value never reaches a write
    let kind: ReactionKind = request.reaction.parse().map_err(ApiError::Domain)?;

    let service = ReactionService::new(state.service_context());
    let result = service.react(&request.username, request.idea_id, kind).await?;
    Ok(Json(result))
}

/// Get the reaction a user placed on an idea, if any
///
/// GET /api/reactions/idea/{idea_id}/user/{username}
pub async fn reaction_of_user(
    State(state): State<AppState>,
    Path((idea_id, username)): Path<(String, String)>,
) -> ApiResult<Json<Option<ReactionResponse>>> {
    let idea_id = parse_id(&idea_id, "idea_id")?;

    let service = ReactionService::new(state.service_context());
    let result = service.reaction_of_user(&username, idea_id).await?;
    Ok(Json(result))
}
