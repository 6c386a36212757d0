//! PostgreSQL implementation of TopicRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use idea_core::entities::Topic;
use idea_core::error::DomainError;
use idea_core::traits::{RepoResult, TopicRepository};
use uuid::Uuid;

use crate::models::TopicModel;

use super::error::{map_db_error, map_unique_violation, topic_not_found};

/// PostgreSQL implementation of TopicRepository
#[derive(Clone)]
pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    /// Create a new PgTopicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, name, user_id, created_at, updated_at FROM topics WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, name, user_id, created_at, updated_at
            FROM topics
            WHERE LOWER(name) = LOWER(TRIM($1))
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Topic>> {
        let results = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, name, user_id, created_at, updated_at FROM topics ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Topic::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Topic>> {
        let results = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, name, user_id, created_at, updated_at
            FROM topics
            WHERE user_id = $1
            ORDER BY name
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Topic::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, topic: &Topic) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO topics (id, name, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(topic.id)
        .bind(&topic.name)
        .bind(topic.user_id)
        .bind(topic.created_at)
        .bind(topic.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TopicNameTaken(topic.name.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, topic: &Topic) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE topics SET name = $2, user_id = $3, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(topic.id)
        .bind(&topic.name)
        .bind(topic.user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TopicNameTaken(topic.name.clone())))?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(topic.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn idea_count(&self, id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM ideas WHERE topic_id = $1
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
