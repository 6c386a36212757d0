//! Idea service
//!
//! Idea submission, listing, and removal.

use idea_core::entities::Idea;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateIdeaRequest, IdeaResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Idea service
pub struct IdeaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdeaService<'a> {
    /// Create a new IdeaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all ideas with counts, newest first
    #[instrument(skip(self))]
    pub async fn list_ideas(&self) -> ServiceResult<Vec<IdeaResponse>> {
        let ideas = self.ctx.idea_repo().list_all().await?;
        Ok(ideas.iter().map(IdeaResponse::from).collect())
    }

    /// List ideas in a topic with counts, newest first
    #[instrument(skip(self))]
    pub async fn list_ideas_by_topic(&self, topic_id: Uuid) -> ServiceResult<Vec<IdeaResponse>> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;

        let ideas = self.ctx.idea_repo().list_by_topic(topic.id).await?;
        Ok(ideas.iter().map(IdeaResponse::from).collect())
    }

    /// Get idea by ID, recording a view for the reader when known
    #[instrument(skip(self))]
    pub async fn get_idea(&self, idea_id: Uuid, viewer: Option<Uuid>) -> ServiceResult<IdeaResponse> {
        let summary = self
            .ctx
            .idea_repo()
            .find_summary(idea_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))?;

        if let Some(viewer_id) = viewer {
            self.ctx.idea_repo().record_view(idea_id, viewer_id).await?;
        }

        Ok(IdeaResponse::from(&summary))
    }

    /// Submit a new idea
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_idea(
        &self,
        author_id: Uuid,
        request: CreateIdeaRequest,
    ) -> ServiceResult<IdeaResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(request.topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", request.topic_id.to_string()))?;

        let idea = Idea::new(
            Uuid::new_v4(),
            request.title,
            request.content,
            topic.id,
            author_id,
            request.is_anonymous,
        );
        self.ctx.idea_repo().create(&idea).await?;

        info!(idea_id = %idea.id, topic_id = %topic.id, "Idea created");

        let summary = self
            .ctx
            .idea_repo()
            .find_summary(idea.id)
            .await?
            .ok_or_else(|| ServiceError::internal("Idea vanished after insert"))?;

        Ok(IdeaResponse::from(&summary))
    }

    /// Delete an idea
    #[instrument(skip(self))]
    pub async fn delete_idea(&self, idea_id: Uuid) -> ServiceResult<()> {
        let idea = self
            .ctx
            .idea_repo()
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))?;

        self.ctx.idea_repo().delete(idea.id).await?;
        info!(idea_id = %idea.id, "Idea deleted");

        Ok(())
    }
}
