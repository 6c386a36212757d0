//! PostgreSQL implementation of ChartRepository
//!
//! Grouped-count queries behind the admin chart endpoints.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use idea_core::entities::IdeaSummary;
use idea_core::traits::{
    ChartRepository, ContributorsByDepartment, CountByDepartment, RepoResult, SiteTotals,
};

use crate::models::{
    ContributorsByDepartmentModel, CountByDepartmentModel, IdeaSummaryModel, SiteTotalsModel,
};

use super::error::map_db_error;

/// PostgreSQL implementation of ChartRepository
#[derive(Clone)]
pub struct PgChartRepository {
    pool: PgPool,
}

impl PgChartRepository {
    /// Create a new PgChartRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_by_department(&self, sql: &str) -> RepoResult<Vec<CountByDepartment>> {
        let rows = sqlx::query_as::<_, CountByDepartmentModel>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|r| CountByDepartment {
                department_id: r.department_id,
                department_name: r.department_name,
                count: r.count,
            })
            .collect())
    }
}

#[async_trait]
impl ChartRepository for PgChartRepository {
    #[instrument(skip(self))]
    async fn contributors_by_department(&self) -> RepoResult<Vec<ContributorsByDepartment>> {
        let rows = sqlx::query_as::<_, ContributorsByDepartmentModel>(
            r"
            SELECT d.id AS department_id, d.name AS department_name,
                   COUNT(DISTINCT i.user_id) AS contributors,
                   COUNT(DISTINCT u.id) AS members
            FROM departments d
            LEFT JOIN users u ON u.department_id = d.id
            LEFT JOIN ideas i ON i.user_id = u.id
            GROUP BY d.id, d.name
            ORDER BY d.name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|r| ContributorsByDepartment {
                department_id: r.department_id,
                department_name: r.department_name,
                contributors: r.contributors,
                members: r.members,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn ideas_by_department(&self) -> RepoResult<Vec<CountByDepartment>> {
        self.count_by_department(
            r"
            SELECT d.id AS department_id, d.name AS department_name, COUNT(i.id) AS count
            FROM departments d
            LEFT JOIN users u ON u.department_id = d.id
            LEFT JOIN ideas i ON i.user_id = u.id
            GROUP BY d.id, d.name
            ORDER BY d.name
            ",
        )
        .await
    }

    #[instrument(skip(self))]
    async fn comments_by_department(&self) -> RepoResult<Vec<CountByDepartment>> {
        self.count_by_department(
            r"
            SELECT d.id AS department_id, d.name AS department_name, COUNT(c.id) AS count
            FROM departments d
            LEFT JOIN users u ON u.department_id = d.id
            LEFT JOIN comments c ON c.user_id = u.id
            GROUP BY d.id, d.name
            ORDER BY d.name
            ",
        )
        .await
    }

    #[instrument(skip(self))]
    async fn anonymous_ideas_by_department(&self) -> RepoResult<Vec<CountByDepartment>> {
        self.count_by_department(
            r"
            SELECT d.id AS department_id, d.name AS department_name,
                   COUNT(i.id) FILTER (WHERE i.is_anonymous) AS count
            FROM departments d
            LEFT JOIN users u ON u.department_id = d.id
            LEFT JOIN ideas i ON i.user_id = u.id
            GROUP BY d.id, d.name
            ORDER BY d.name
            ",
        )
        .await
    }

    #[instrument(skip(self))]
    async fn totals(&self) -> RepoResult<SiteTotals> {
        let row = sqlx::query_as::<_, SiteTotalsModel>(
            r"
            SELECT (SELECT COUNT(*) FROM users)    AS staff,
                   (SELECT COUNT(*) FROM ideas)    AS ideas,
                   (SELECT COUNT(*) FROM comments) AS comments,
                   (SELECT COUNT(*) FROM topics)   AS topics
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(SiteTotals {
            staff: row.staff,
            ideas: row.ideas,
            comments: row.comments,
            topics: row.topics,
        })
    }

    #[instrument(skip(self))]
    async fn ideas_for_dashboard(&self, limit: i64) -> RepoResult<Vec<IdeaSummary>> {
        let limit = limit.clamp(1, 100);

        let rows = sqlx::query_as::<_, IdeaSummaryModel>(
            r"
            SELECT i.id, i.title, i.content, i.topic_id, i.user_id, i.is_anonymous,
                   i.created_at, i.updated_at,
                   (SELECT COUNT(*) FROM reactions r WHERE r.idea_id = i.id AND r.kind = 1)  AS upvotes,
                   (SELECT COUNT(*) FROM reactions r WHERE r.idea_id = i.id AND r.kind = -1) AS downvotes,
                   (SELECT COUNT(*) FROM comments c WHERE c.idea_id = i.id)                  AS comments,
                   (SELECT COUNT(*) FROM views v WHERE v.idea_id = i.id)                     AS views
            FROM ideas i
            ORDER BY i.created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(IdeaSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgChartRepository>();
    }
}
