//! User service
//!
//! Administrative user listing, update, and removal.

use idea_common::auth::hash_password;
use idea_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Update a user
    ///
    /// Rejects with a conflict when the submitted email or username collides
    /// (case-insensitive, trimmed) with any other user. The password hash is
    /// only replaced when a new password is submitted.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if self
            .ctx
            .user_repo()
            .email_taken(&request.email, Some(user_id))
            .await?
        {
            return Err(DomainError::EmailTaken.into());
        }

        if self
            .ctx
            .user_repo()
            .username_taken(&request.username, Some(user_id))
            .await?
        {
            return Err(DomainError::UsernameTaken.into());
        }

        let department = self
            .ctx
            .department_repo()
            .find_by_id(request.department_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Department", request.department_id.to_string())
            })?;

        user.username = request.username;
        user.email = request.email;
        user.name = request.name;
        user.address = request.address;
        user.phone = request.phone;
        user.department_id = department.id;

        if let Some(role) = request.role {
            user.role = role.parse().map_err(ServiceError::from)?;
        }

        self.ctx.user_repo().update(&user).await?;

        if let Some(password) = request.password {
            let password_hash =
                hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx
                .user_repo()
                .update_password(user.id, &password_hash)
                .await?;
        }

        info!(user_id = %user.id, "User updated");

        Ok(UserResponse::from(&user))
    }

    /// Delete a user (administrative action)
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Uuid) -> ServiceResult<()> {
        let _user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
