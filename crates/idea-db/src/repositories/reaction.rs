//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use idea_core::entities::Reaction;
use idea_core::traits::{ReactionRepository, RepoResult};
use idea_core::value_objects::ReactionKind;
use uuid::Uuid;

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_user_and_idea(
        &self,
        user_id: Uuid,
        idea_id: Uuid,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT user_id, idea_id, kind, created_at
            FROM reactions
            WHERE user_id = $1 AND idea_id = $2
            ",
        )
        .bind(user_id)
        .bind(idea_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        // The composite key makes a lost insert race surface as a no-op
        // instead of a duplicate row.
        sqlx::query(
            r"
            INSERT INTO reactions (user_id, idea_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, idea_id) DO NOTHING
            ",
        )
        .bind(reaction.user_id)
        .bind(reaction.idea_id)
        .bind(reaction.kind.value())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_kind(&self, user_id: Uuid, idea_id: Uuid, kind: ReactionKind) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE reactions SET kind = $3 WHERE user_id = $1 AND idea_id = $2
            ",
        )
        .bind(user_id)
        .bind(idea_id)
        .bind(kind.value())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Uuid, idea_id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM reactions WHERE user_id = $1 AND idea_id = $2
            ",
        )
        .bind(user_id)
        .bind(idea_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_for_idea(&self, idea_id: Uuid, kind: ReactionKind) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM reactions WHERE idea_id = $1 AND kind = $2
            ",
        )
        .bind(idea_id)
        .bind(kind.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
