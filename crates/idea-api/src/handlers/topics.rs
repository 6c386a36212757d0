//! Topic handlers

use axum::{
    extract::{Path, State},
    Json,
};
use idea_service::{TopicRequest, TopicResponse, TopicService};

use crate::extractors::{parse_id, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all topics
///
/// GET /api/topics
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<Json<Vec<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let topics = service.list_topics().await?;
    Ok(Json(topics))
}

/// List topics owned by a user
///
/// GET /api/topics/user/{user_id}
pub async fn list_topics_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<TopicResponse>>> {
    let user_id = parse_id(&user_id, "user_id")?;

    let service = TopicService::new(state.service_context());
    let topics = service.list_topics_by_user(user_id).await?;
    Ok(Json(topics))
}

/// Get a topic by id
///
/// GET /api/topics/{id}
pub async fn get_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TopicResponse>> {
    let topic_id = parse_id(&id, "topic_id")?;

    let service = TopicService::new(state.service_context());
    let topic = service.get_topic(topic_id).await?;
    Ok(Json(topic))
}

/// Create a topic
///
/// POST /api/topics
pub async fn create_topic(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TopicRequest>,
) -> ApiResult<Created<Json<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let topic = service.create_topic(request).await?;
    Ok(Created(Json(topic)))
}

/// Update a topic
///
/// PUT /api/topics/{id}
pub async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<TopicRequest>,
) -> ApiResult<Json<TopicResponse>> {
    let topic_id = parse_id(&id, "topic_id")?;

    let service = TopicService::new(state.service_context());
    let topic = service.update_topic(topic_id, request).await?;
    Ok(Json(topic))
}

/// Delete a topic
///
/// DELETE /api/topics/{id}
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let topic_id = parse_id(&id, "topic_id")?;

    let service = TopicService::new(state.service_context());
    service.delete_topic(topic_id).await?;
    Ok(NoContent)
}
