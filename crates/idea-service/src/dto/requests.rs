//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies that carry user input
//! also implement `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    pub address: Option<String>,

    pub phone: Option<String>,

    /// Department the user belongs to
    pub department_id: Uuid,

    /// Role label, e.g. "staff" or "qa_manager"
    pub role: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update user request (administrative)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// New password; the stored hash is untouched when absent
    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    pub address: Option<String>,

    pub phone: Option<String>,

    pub department_id: Uuid,

    /// New role label; the current role is kept when absent
    pub role: Option<String>,
}

// ============================================================================
// Department Requests
// ============================================================================

/// Create or update department request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DepartmentRequest {
    #[validate(length(min = 1, max = 100, message = "Department name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// Topic Requests
// ============================================================================

/// Create or update topic request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TopicRequest {
    #[validate(length(min = 1, max = 100, message = "Topic name must be 1-100 characters"))]
    pub name: String,

    /// Username of the owning user
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

// ============================================================================
// Idea Requests
// ============================================================================

/// Create idea request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIdeaRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    pub topic_id: Uuid,

    #[serde(default)]
    pub is_anonymous: bool,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,

    #[serde(default)]
    pub is_anonymous: bool,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Reaction toggle request
///
/// The reacting user is addressed by username, and the requested sign by
/// its wire label ("upvote" / "downvote").
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactionRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub idea_id: Uuid,

    #[validate(length(min = 1, message = "Reaction type is required"))]
    pub reaction: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_validation() {
        // Valid request
        let valid = RegisterRequest {
            name: "Alice".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "securepassword123".to_string(),
            address: None,
            phone: None,
            department_id: Uuid::new_v4(),
            role: "staff".to_string(),
        };
        assert!(valid.validate().is_ok());

        // Invalid - username too short
        let short_username = RegisterRequest {
            username: "a".to_string(),
            ..valid.clone()
        };
        assert!(short_username.validate().is_err());

        // Invalid - bad email
        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        // Invalid - password too short
        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_update_user_password_is_optional() {
        let request = UpdateUserRequest {
            name: "Alice".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: None,
            address: None,
            phone: None,
            department_id: Uuid::new_v4(),
            role: None,
        };
        assert!(request.validate().is_ok());

        let short_password = UpdateUserRequest {
            password: Some("short".to_string()),
            ..request
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_topic_request_validation() {
        let valid = TopicRequest {
            name: "Workplace Safety".to_string(),
            username: "alice".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_name = TopicRequest {
            name: String::new(),
            username: "alice".to_string(),
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_create_idea_validation() {
        let valid = CreateIdeaRequest {
            title: "Standing desks".to_string(),
            content: "We should get standing desks.".to_string(),
            topic_id: Uuid::new_v4(),
            is_anonymous: false,
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreateIdeaRequest {
            title: String::new(),
            ..valid
        };
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_reaction_request_validation() {
        let valid = ReactionRequest {
            username: "alice".to_string(),
            idea_id: Uuid::new_v4(),
            reaction: "upvote".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_reaction = ReactionRequest {
            reaction: String::new(),
            ..valid
        };
        assert!(empty_reaction.validate().is_err());
    }
}
