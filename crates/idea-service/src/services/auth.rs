//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.
//! Refresh tokens are persisted hashed; rotation revokes the presented
//! token before issuing a replacement.

use chrono::{Duration, Utc};
use idea_common::auth::{hash_password, hash_token, validate_password_strength, verify_password};
use idea_core::entities::User;
use idea_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let role = request.role.parse().map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_taken(&request.email, None).await? {
            return Err(DomainError::EmailTaken.into());
        }

        if self
            .ctx
            .user_repo()
            .username_taken(&request.username, None)
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

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut user = User::new(
            Uuid::new_v4(),
            request.username,
            request.email,
            request.name,
            department.id,
            role,
        );
        user.address = request.address;
        user.phone = request.phone;

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        self.issue_tokens(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(idea_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(idea_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(idea_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_tokens(&user).await
    }

    /// Refresh access token using refresh token
    ///
    /// The presented token is revoked and replaced (rotation).
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // Check the signature and expiry first
        self.ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let token_hash = hash_token(&request.refresh_token);
        let record = self
            .ctx
            .refresh_token_repo()
            .find_by_hash(&token_hash)
            .await?
            .filter(|r| r.is_valid())
            .ok_or(ServiceError::App(idea_common::AppError::InvalidToken))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", record.user_id.to_string()))?;

        self.ctx.refresh_token_repo().revoke(&token_hash).await?;

        info!(user_id = %user.id, "Tokens refreshed");

        self.issue_tokens(&user).await
    }

    /// Logout user by revoking refresh tokens
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, user_id: Uuid, refresh_token: Option<String>) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx
                .refresh_token_repo()
                .revoke(&hash_token(&token))
                .await?;
        } else {
            self.ctx
                .refresh_token_repo()
                .revoke_all_for_user(user_id)
                .await?;
        }

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Generate a token pair and persist the refresh half
    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let expires_at =
            Utc::now() + Duration::seconds(self.ctx.jwt_service().refresh_token_expiry());
        self.ctx
            .refresh_token_repo()
            .store(user.id, &hash_token(&token_pair.refresh_token), expires_at)
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            UserResponse::from(user),
        ))
    }
}
