//! Comment service

use idea_core::entities::Comment;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments on an idea, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, idea_id: Uuid) -> ServiceResult<Vec<CommentResponse>> {
        let idea = self
            .ctx
            .idea_repo()
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))?;

        let comments = self.ctx.comment_repo().list_by_idea(idea.id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Add a comment to an idea
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        idea_id: Uuid,
        author_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let idea = self
            .ctx
            .idea_repo()
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))?;

        let comment = Comment::new(
            Uuid::new_v4(),
            request.content,
            idea.id,
            author_id,
            request.is_anonymous,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, idea_id = %idea.id, "Comment created");

        Ok(CommentResponse::from(&comment))
    }

    /// Delete a comment
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: Uuid) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        self.ctx.comment_repo().delete(comment.id).await?;
        info!(comment_id = %comment.id, "Comment deleted");

        Ok(())
    }
}
