//! PostgreSQL implementation of IdeaRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use idea_core::entities::{Idea, IdeaSummary};
use idea_core::traits::{IdeaRepository, RepoResult};
use uuid::Uuid;

use crate::models::{IdeaModel, IdeaSummaryModel};

use super::error::{idea_not_found, map_db_error};

const SUMMARY_SELECT: &str = r"
    SELECT i.id, i.title, i.content, i.topic_id, i.user_id, i.is_anonymous,
           i.created_at, i.updated_at,
           (SELECT COUNT(*) FROM reactions r WHERE r.idea_id = i.id AND r.kind = 1)  AS upvotes,
           (SELECT COUNT(*) FROM reactions r WHERE r.idea_id = i.id AND r.kind = -1) AS downvotes,
           (SELECT COUNT(*) FROM comments c WHERE c.idea_id = i.id)                  AS comments,
           (SELECT COUNT(*) FROM views v WHERE v.idea_id = i.id)                     AS views
    FROM ideas i
";

/// PostgreSQL implementation of IdeaRepository
#[derive(Clone)]
pub struct PgIdeaRepository {
    pool: PgPool,
}

impl PgIdeaRepository {
    /// Create a new PgIdeaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaRepository for PgIdeaRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Idea>> {
        let result = sqlx::query_as::<_, IdeaModel>(
            r"
            SELECT id, title, content, topic_id, user_id, is_anonymous, created_at, updated_at
            FROM ideas
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Idea::from))
    }

    #[instrument(skip(self))]
    async fn find_summary(&self, id: Uuid) -> RepoResult<Option<IdeaSummary>> {
        let result = sqlx::query_as::<_, IdeaSummaryModel>(&format!(
            "{SUMMARY_SELECT} WHERE i.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(IdeaSummary::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<IdeaSummary>> {
        let results = sqlx::query_as::<_, IdeaSummaryModel>(&format!(
            "{SUMMARY_SELECT} ORDER BY i.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(IdeaSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_topic(&self, topic_id: Uuid) -> RepoResult<Vec<IdeaSummary>> {
        let results = sqlx::query_as::<_, IdeaSummaryModel>(&format!(
            "{SUMMARY_SELECT} WHERE i.topic_id = $1 ORDER BY i.created_at DESC"
        ))
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(IdeaSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, idea: &Idea) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO ideas (id, title, content, topic_id, user_id, is_anonymous,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(idea.id)
        .bind(&idea.title)
        .bind(&idea.content)
        .bind(idea.topic_id)
        .bind(idea.user_id)
        .bind(idea.is_anonymous)
        .bind(idea.created_at)
        .bind(idea.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(idea_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_view(&self, idea_id: Uuid, user_id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO views (user_id, idea_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, idea_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(idea_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgIdeaRepository>();
    }
}
