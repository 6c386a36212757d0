//! PostgreSQL implementation of DepartmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use idea_core::entities::Department;
use idea_core::error::DomainError;
use idea_core::traits::{DepartmentRepository, RepoResult};
use uuid::Uuid;

use crate::models::DepartmentModel;

use super::error::{department_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of DepartmentRepository
#[derive(Clone)]
pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    /// Create a new PgDepartmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Department>> {
        let result = sqlx::query_as::<_, DepartmentModel>(
            r"
            SELECT id, name, created_at, updated_at FROM departments WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Department::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Department>> {
        let result = sqlx::query_as::<_, DepartmentModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM departments
            WHERE LOWER(name) = LOWER(TRIM($1))
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Department::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Department>> {
        let results = sqlx::query_as::<_, DepartmentModel>(
            r"
            SELECT id, name, created_at, updated_at FROM departments ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Department::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, department: &Department) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO departments (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(department.id)
        .bind(&department.name)
        .bind(department.created_at)
        .bind(department.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::DepartmentNameTaken(department.name.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, department: &Department) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE departments SET name = $2, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(department.id)
        .bind(&department.name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::DepartmentNameTaken(department.name.clone()))
        })?;

        if result.rows_affected() == 0 {
            return Err(department_not_found(department.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(department_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn member_count(&self, id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE department_id = $1
            ",
        )
        .bind(id)
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
        assert_send_sync::<PgDepartmentRepository>();
    }
}
