//! Idea handlers

use axum::{
    extract::{Path, State},
    Json,
};
use idea_service::{CreateIdeaRequest, IdeaResponse, IdeaService};

use crate::extractors::{parse_id, AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all ideas
///
/// GET /api/ideas
pub async fn list_ideas(State(state): State<AppState>) -> ApiResult<Json<Vec<IdeaResponse>>> {
    let service = IdeaService::new(state.service_context());
    let ideas = service.list_ideas().await?;
    Ok(Json(ideas))
}

/// List ideas in a topic
///
/// GET /api/ideas/topic/{topic_id}
pub async fn list_ideas_by_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> ApiResult<Json<Vec<IdeaResponse>>> {
    let topic_id = parse_id(&topic_id, "topic_id")?;

    let service = IdeaService::new(state.service_context());
    let ideas = service.list_ideas_by_topic(topic_id).await?;
    Ok(Json(ideas))
}

/// Get an idea by id
///
/// Records a view when the caller is authenticated.
///
/// GET /api/ideas/{id}
pub async fn get_idea(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<IdeaResponse>> {
    let idea_id = parse_id(&id, "idea_id")?;

    let service = IdeaService::new(state.service_context());
    let idea = service.get_idea(idea_id, auth.map(|a| a.user_id)).await?;
    Ok(Json(idea))
}

/// Submit a new idea
///
/// POST /api/ideas
pub async fn create_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateIdeaRequest>,
) -> ApiResult<Created<Json<IdeaResponse>>> {
    let service = IdeaService::new(state.service_context());
    let idea = service.create_idea(auth.user_id, request).await?;
    Ok(Created(Json(idea)))
}

/// Delete an idea
///
/// DELETE /api/ideas/{id}
pub async fn delete_idea(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let idea_id = parse_id(&id, "idea_id")?;

    let service = IdeaService::new(state.service_context());
    service.delete_idea(idea_id).await?;
    Ok(NoContent)
}
