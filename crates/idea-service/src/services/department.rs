//! Department service
//!
//! Department CRUD with name-uniqueness and delete guards.

use idea_core::entities::Department;
use idea_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{DepartmentRequest, DepartmentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Department service
pub struct DepartmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DepartmentService<'a> {
    /// Create a new DepartmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all departments, sorted by name
    #[instrument(skip(self))]
    pub async fn list_departments(&self) -> ServiceResult<Vec<DepartmentResponse>> {
        let departments = self.ctx.department_repo().list_all().await?;
        Ok(departments.iter().map(DepartmentResponse::from).collect())
    }

    /// Get department by ID
    #[instrument(skip(self))]
    pub async fn get_department(&self, department_id: Uuid) -> ServiceResult<DepartmentResponse> {
        let department = self
            .ctx
            .department_repo()
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Department", department_id.to_string()))?;

        Ok(DepartmentResponse::from(&department))
    }

    /// Create a new department
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_department(
        &self,
        request: DepartmentRequest,
    ) -> ServiceResult<DepartmentResponse> {
        self.ensure_name_free(&request.name, None).await?;

        let department = Department::new(Uuid::new_v4(), request.name);
        self.ctx.department_repo().create(&department).await?;

        info!(department_id = %department.id, "Department created");

        Ok(DepartmentResponse::from(&department))
    }

    /// Update an existing department
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn update_department(
        &self,
        department_id: Uuid,
        request: DepartmentRequest,
    ) -> ServiceResult<DepartmentResponse> {
        let mut department = self
            .ctx
            .department_repo()
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Department", department_id.to_string()))?;

        self.ensure_name_free(&request.name, Some(department_id)).await?;

        department.set_name(request.name);
        self.ctx.department_repo().update(&department).await?;

        info!(department_id = %department.id, "Department updated");

        Ok(DepartmentResponse::from(&department))
    }

    /// Delete a department
    ///
    /// Rejects with a conflict while the department still has members.
    #[instrument(skip(self))]
    pub async fn delete_department(&self, department_id: Uuid) -> ServiceResult<()> {
        let department = self
            .ctx
            .department_repo()
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Department", department_id.to_string()))?;

        let members = self.ctx.department_repo().member_count(department.id).await?;
        if members > 0 {
            return Err(DomainError::DepartmentHasMembers { count: members }.into());
        }

        self.ctx.department_repo().delete(department.id).await?;
        info!(department_id = %department.id, "Department deleted");

        Ok(())
    }

    async fn ensure_name_free(&self, name: &str, exclude: Option<Uuid>) -> ServiceResult<()> {
        if let Some(existing) = self.ctx.department_repo().find_by_name(name).await? {
            if Some(existing.id) != exclude {
                return Err(DomainError::DepartmentNameTaken(name.to_string()).into());
            }
        }
        Ok(())
    }
}
