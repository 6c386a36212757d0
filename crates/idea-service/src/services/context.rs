//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use idea_common::auth::JwtService;
use idea_core::traits::{
    ChartRepository, CommentRepository, DepartmentRepository, IdeaRepository, ReactionRepository,
    RefreshTokenRepository, TopicRepository, UserRepository,
};
use idea_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
    topic_repo: Arc<dyn TopicRepository>,
    idea_repo: Arc<dyn IdeaRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,
    chart_repo: Arc<dyn ChartRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        department_repo: Arc<dyn DepartmentRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        idea_repo: Arc<dyn IdeaRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        chart_repo: Arc<dyn ChartRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            department_repo,
            topic_repo,
            idea_repo,
            comment_repo,
            reaction_repo,
            refresh_token_repo,
            chart_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the department repository
    pub fn department_repo(&self) -> &dyn DepartmentRepository {
        self.department_repo.as_ref()
    }

    /// Get the topic repository
    pub fn topic_repo(&self) -> &dyn TopicRepository {
        self.topic_repo.as_ref()
    }

    /// Get the idea repository
    pub fn idea_repo(&self) -> &dyn IdeaRepository {
        self.idea_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    /// Get the chart repository
    pub fn chart_repo(&self) -> &dyn ChartRepository {
        self.chart_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    department_repo: Option<Arc<dyn DepartmentRepository>>,
    topic_repo: Option<Arc<dyn TopicRepository>>,
    idea_repo: Option<Arc<dyn IdeaRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    chart_repo: Option<Arc<dyn ChartRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn department_repo(mut self, repo: Arc<dyn DepartmentRepository>) -> Self {
        self.department_repo = Some(repo);
        self
    }

    pub fn topic_repo(mut self, repo: Arc<dyn TopicRepository>) -> Self {
        self.topic_repo = Some(repo);
        self
    }

    pub fn idea_repo(mut self, repo: Arc<dyn IdeaRepository>) -> Self {
        self.idea_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn chart_repo(mut self, repo: Arc<dyn ChartRepository>) -> Self {
        self.chart_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.department_repo
                .ok_or_else(|| ServiceError::validation("department_repo is required"))?,
            self.topic_repo.ok_or_else(|| ServiceError::validation("topic_repo is required"))?,
            self.idea_repo.ok_or_else(|| ServiceError::validation("idea_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.chart_repo.ok_or_else(|| ServiceError::validation("chart_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
