//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("User not found: {0}")]
    UnknownUsername(String),

    #[error("Department not found: {0}")]
    DepartmentNotFound(Uuid),

    #[error("Topic not found: {0}")]
    TopicNotFound(Uuid),

    #[error("Idea not found: {0}")]
    IdeaNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unsupported reaction type: {0:?}")]
    InvalidReactionKind(String),

    #[error("Unsupported role: {0:?}")]
    InvalidRole(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Topic name already in use: {0}")]
    TopicNameTaken(String),

    #[error("Department name already in use: {0}")]
    DepartmentNameTaken(String),

    #[error("Email already in use")]
    EmailTaken,

    #[error("Username already in use")]
    UsernameTaken,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Topic still owns {count} idea(s) and cannot be deleted")]
    TopicHasIdeas { count: i64 },

    #[error("Department still has {count} member(s) and cannot be deleted")]
    DepartmentHasMembers { count: i64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UnknownUsername(_) => "UNKNOWN_USER",
            Self::DepartmentNotFound(_) => "UNKNOWN_DEPARTMENT",
            Self::TopicNotFound(_) => "UNKNOWN_TOPIC",
            Self::IdeaNotFound(_) => "UNKNOWN_IDEA",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::InvalidRole(_) => "INVALID_ROLE",

            // Conflict
            Self::TopicNameTaken(_) => "TOPIC_NAME_TAKEN",
            Self::DepartmentNameTaken(_) => "DEPARTMENT_NAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::UsernameTaken => "USERNAME_TAKEN",

            // Business Rules
            Self::TopicHasIdeas { .. } => "TOPIC_HAS_IDEAS",
            Self::DepartmentHasMembers { .. } => "DEPARTMENT_HAS_MEMBERS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UnknownUsername(_)
                | Self::DepartmentNotFound(_)
                | Self::TopicNotFound(_)
                | Self::IdeaNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidReactionKind(_) | Self::InvalidRole(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::TopicNameTaken(_)
                | Self::DepartmentNameTaken(_)
                | Self::EmailTaken
                | Self::UsernameTaken
                | Self::TopicHasIdeas { .. }
                | Self::DepartmentHasMembers { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::TopicNameTaken("Security".to_string());
        assert_eq!(err.code(), "TOPIC_NAME_TAKEN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::TopicNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::UnknownUsername("alice".to_string()).is_not_found());
        assert!(!DomainError::EmailTaken.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::TopicHasIdeas { count: 3 }.is_conflict());
        assert!(DomainError::EmailTaken.is_conflict());
        assert!(!DomainError::InvalidRole("x".to_string()).is_conflict());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidReactionKind("like".to_string()).is_validation());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::TopicHasIdeas { count: 2 };
        assert_eq!(err.to_string(), "Topic still owns 2 idea(s) and cannot be deleted");

        let err = DomainError::InvalidReactionKind("like".to_string());
        assert_eq!(err.to_string(), "Unsupported reaction type: \"like\"");
    }
}
