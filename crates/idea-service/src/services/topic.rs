//! Topic service
//!
//! Topic CRUD with the name-uniqueness and delete guards.

use idea_core::entities::Topic;
use idea_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{TopicRequest, TopicResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Topic service
pub struct TopicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TopicService<'a> {
    /// Create a new TopicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all topics, sorted by name
    #[instrument(skip(self))]
    pub async fn list_topics(&self) -> ServiceResult<Vec<TopicResponse>> {
        let topics = self.ctx.topic_repo().list_all().await?;
        Ok(topics.iter().map(TopicResponse::from).collect())
    }

    /// List topics owned by a user, sorted by name
    #[instrument(skip(self))]
    pub async fn list_topics_by_user(&self, user_id: Uuid) -> ServiceResult<Vec<TopicResponse>> {
        let topics = self.ctx.topic_repo().list_by_user(user_id).await?;
        Ok(topics.iter().map(TopicResponse::from).collect())
    }

    /// Get topic by ID
    #[instrument(skip(self))]
    pub async fn get_topic(&self, topic_id: Uuid) -> ServiceResult<TopicResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;

        Ok(TopicResponse::from(&topic))
    }

    /// Create a new topic
    ///
    /// Rejects with a conflict when another topic already uses the name
    /// (case-insensitive), and with not-found when the owner's username
    /// does not resolve.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_topic(&self, request: TopicRequest) -> ServiceResult<TopicResponse> {
        self.ensure_name_free(&request.name, None).await?;

        let owner = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.username.clone()))?;

        let topic = Topic::new(Uuid::new_v4(), request.name, owner.id);
        self.ctx.topic_repo().create(&topic).await?;

        info!(topic_id = %topic.id, owner = %owner.id, "Topic created");

        Ok(TopicResponse::from(&topic))
    }

    /// Update an existing topic
    ///
    /// The name guard excludes the topic being updated, so saving a topic
    /// under its current name is not a conflict.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn update_topic(
        &self,
        topic_id: Uuid,
        request: TopicRequest,
    ) -> ServiceResult<TopicResponse> {
        let mut topic = self
            .ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;

        self.ensure_name_free(&request.name, Some(topic_id)).await?;

        let owner = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.username.clone()))?;

        topic.apply_update(request.name, owner.id);
        self.ctx.topic_repo().update(&topic).await?;

        info!(topic_id = %topic.id, "Topic updated");

        Ok(TopicResponse::from(&topic))
    }

    /// Delete a topic
    ///
    /// Rejects with a conflict while the topic still owns ideas.
    #[instrument(skip(self))]
    pub async fn delete_topic(&self, topic_id: Uuid) -> ServiceResult<()> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;

        let ideas = self.ctx.topic_repo().idea_count(topic.id).await?;
        if ideas > 0 {
            return Err(DomainError::TopicHasIdeas { count: ideas }.into());
        }

        self.ctx.topic_repo().delete(topic.id).await?;
        info!(topic_id = %topic.id, "Topic deleted");

        Ok(())
    }

    /// Conflict when another topic (excluding `exclude`) already uses the name
    async fn ensure_name_free(&self, name: &str, exclude: Option<Uuid>) -> ServiceResult<()> {
        if let Some(existing) = self.ctx.topic_repo().find_by_name(name).await? {
            if Some(existing.id) != exclude {
                return Err(DomainError::TopicNameTaken(name.to_string()).into());
            }
        }
        Ok(())
    }
}
