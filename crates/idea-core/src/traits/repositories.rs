//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Each trait exposes typed query methods for
//! its use sites rather than an open-ended predicate, so implementations
//! stay portable across storage engines.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Comment, Department, Idea, IdeaSummary, Reaction, Topic, User};
use crate::error::DomainError;
use crate::value_objects::ReactionKind;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by username (case-insensitive)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all users, ordered by name
    async fn list_all(&self) -> RepoResult<Vec<User>>;

    /// Check if an email is used by a user other than `exclude`
    /// (case-insensitive, trimmed)
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> RepoResult<bool>;

    /// Check if a username is used by a user other than `exclude`
    /// (case-insensitive, trimmed)
    async fn username_taken(&self, username: &str, exclude: Option<Uuid>) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user (everything but the password hash)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Update password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()>;

    /// Delete a user
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}

// ============================================================================
// Department Repository
// ============================================================================

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find department by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Department>>;

    /// Find department by name (case-insensitive)
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Department>>;

    /// List all departments, ordered by name
    async fn list_all(&self) -> RepoResult<Vec<Department>>;

    /// Create a new department
    async fn create(&self, department: &Department) -> RepoResult<()>;

    /// Update an existing department
    async fn update(&self, department: &Department) -> RepoResult<()>;

    /// Delete a department
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Count users assigned to a department
    async fn member_count(&self, id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Topic Repository
// ============================================================================

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Find topic by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Topic>>;

    /// Find topic by name (case-insensitive)
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Topic>>;

    /// List all topics, ordered by name
    async fn list_all(&self) -> RepoResult<Vec<Topic>>;

    /// List topics owned by a user, ordered by name
    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Topic>>;

    /// Create a new topic
    async fn create(&self, topic: &Topic) -> RepoResult<()>;

    /// Update an existing topic
    async fn update(&self, topic: &Topic) -> RepoResult<()>;

    /// Delete a topic
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Count ideas owned by a topic (delete guard)
    async fn idea_count(&self, id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Idea Repository
// ============================================================================

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Find idea by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Idea>>;

    /// Find idea by ID with its aggregate counts
    async fn find_summary(&self, id: Uuid) -> RepoResult<Option<IdeaSummary>>;

    /// List all ideas with counts, newest first
    async fn list_all(&self) -> RepoResult<Vec<IdeaSummary>>;

    /// List ideas in a topic with counts, newest first
    async fn list_by_topic(&self, topic_id: Uuid) -> RepoResult<Vec<IdeaSummary>>;

    /// Create a new idea
    async fn create(&self, idea: &Idea) -> RepoResult<()>;

    /// Delete an idea
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Record that a user opened an idea (idempotent per user)
    async fn record_view(&self, idea_id: Uuid, user_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// List comments on an idea, oldest first
    async fn list_by_idea(&self, idea_id: Uuid) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction a user placed on an idea
    async fn find_by_user_and_idea(&self, user_id: Uuid, idea_id: Uuid)
        -> RepoResult<Option<Reaction>>;

    /// Insert a reaction row
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Flip the kind of an existing reaction row
    async fn update_kind(&self, user_id: Uuid, idea_id: Uuid, kind: ReactionKind) -> RepoResult<()>;

    /// Remove a reaction row
    async fn delete(&self, user_id: Uuid, idea_id: Uuid) -> RepoResult<()>;

    /// Count reactions of one kind on an idea
    async fn count_for_idea(&self, idea_id: Uuid, kind: ReactionKind) -> RepoResult<i64>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

/// Stored refresh-token record
#[derive(Debug, Clone)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenRecord {
    /// Check if token is revoked
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check if token is expired
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Check if token is valid (not revoked and not expired)
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }
}

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Store a new refresh token hash for a user
    async fn store(&self, user_id: Uuid, token_hash: &str, expires_at: DateTime<Utc>)
        -> RepoResult<()>;

    /// Look up a token by its hash
    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<RefreshTokenRecord>>;

    /// Revoke a single token by its hash
    async fn revoke(&self, token_hash: &str) -> RepoResult<()>;

    /// Revoke every token issued to a user
    async fn revoke_all_for_user(&self, user_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Chart Repository
// ============================================================================

/// Grouped count keyed by department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountByDepartment {
    pub department_id: Uuid,
    pub department_name: String,
    pub count: i64,
}

/// Contributor statistics for one department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorsByDepartment {
    pub department_id: Uuid,
    pub department_name: String,
    /// Distinct users who submitted at least one idea
    pub contributors: i64,
    /// All users in the department
    pub members: i64,
}

/// Site-wide totals for the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteTotals {
    pub staff: i64,
    pub ideas: i64,
    pub comments: i64,
    pub topics: i64,
}

#[async_trait]
pub trait ChartRepository: Send + Sync {
    /// Distinct idea authors and member counts per department
    async fn contributors_by_department(&self) -> RepoResult<Vec<ContributorsByDepartment>>;

    /// Idea count per department
    async fn ideas_by_department(&self) -> RepoResult<Vec<CountByDepartment>>;

    /// Comment count per department
    async fn comments_by_department(&self) -> RepoResult<Vec<CountByDepartment>>;

    /// Anonymous-idea count per department
    async fn anonymous_ideas_by_department(&self) -> RepoResult<Vec<CountByDepartment>>;

    /// Site-wide totals: staff, ideas, comments, topics
    async fn totals(&self) -> RepoResult<SiteTotals>;

    /// Recent ideas with counts for the dashboard listing
    async fn ideas_for_dashboard(&self, limit: i64) -> RepoResult<Vec<IdeaSummary>>;
}
