//! Reaction service
//!
//! Applies the vote toggle policy for (user, idea) pairs.

use idea_core::entities::{toggle_transition, Reaction, ReactionToggle};
use idea_core::value_objects::ReactionKind;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::ReactionResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a reaction request under the toggle policy.
    ///
    /// Returns the resulting row, or `None` when the request removed it.
    /// Postcondition: at most one reaction row exists for (user, idea), and
    /// its kind (if present) equals the last net request.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        username: &str,
        idea_id: Uuid,
        requested: ReactionKind,
    ) -> ServiceResult<Option<ReactionResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        // Reject unknown ideas before any write; the original let the
        // foreign key surface this as an opaque failure.
        let idea = self
            .ctx
            .idea_repo()
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))?;

        let existing = self
            .ctx
            .reaction_repo()
            .find_by_user_and_idea(user.id, idea.id)
            .await?;

        match toggle_transition(existing.map(|r| r.kind), requested) {
            ReactionToggle::Insert => {
                let reaction = Reaction::new(user.id, idea.id, requested);
                self.ctx.reaction_repo().create(&reaction).await?;

                info!(user_id = %user.id, idea_id = %idea.id, kind = %requested, "Reaction added");
                Ok(Some(ReactionResponse::for_user(username, &reaction)))
            }
            ReactionToggle::Remove => {
                self.ctx.reaction_repo().delete(user.id, idea.id).await?;

                info!(user_id = %user.id, idea_id = %idea.id, "Reaction removed");
                Ok(None)
            }
            ReactionToggle::Flip => {
                self.ctx
                    .reaction_repo()
                    .update_kind(user.id, idea.id, requested)
                    .await?;

                info!(user_id = %user.id, idea_id = %idea.id, kind = %requested, "Reaction flipped");
                let reaction = Reaction::new(user.id, idea.id, requested);
                Ok(Some(ReactionResponse::for_user(username, &reaction)))
            }
        }
    }

    /// Get the reaction a user placed on an idea, if any
    #[instrument(skip(self))]
    pub async fn reaction_of_user(
        &self,
        username: &str,
        idea_id: Uuid,
    ) -> ServiceResult<Option<ReactionResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let reaction = self
            .ctx
            .reaction_repo()
            .find_by_user_and_idea(user.id, idea_id)
            .await?;

        Ok(reaction.map(|r| ReactionResponse::for_user(username, &r)))
    }
}
