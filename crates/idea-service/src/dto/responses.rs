//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! UUIDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub department_id: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Department Responses
// ============================================================================

/// Department response
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Topic Responses
// ============================================================================

/// Topic response
#[derive(Debug, Clone, Serialize)]
pub struct TopicResponse {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Idea Responses
// ============================================================================

/// Idea response with aggregate counts
///
/// `user_id` is omitted for anonymous submissions.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub is_anonymous: bool,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response
///
/// `user_id` is omitted for anonymous comments.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub idea_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Reaction response
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub username: String,
    pub idea_id: String,
    pub reaction: String,
}

// ============================================================================
// Chart Responses
// ============================================================================

/// Contributors chart entry
#[derive(Debug, Clone, Serialize)]
pub struct ContributorChartResponse {
    pub department_id: String,
    pub department_name: String,
    pub contributors: i64,
    pub members: i64,
}

/// Grouped count chart entry
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentCountResponse {
    pub department_id: String,
    pub department_name: String,
    pub count: i64,
}

/// Percentage chart entry
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentPercentageResponse {
    pub department_id: String,
    pub department_name: String,
    pub count: i64,
    pub percentage: f64,
}

/// Site-wide totals for the dashboard header
#[derive(Debug, Clone, Serialize)]
pub struct TotalsResponse {
    pub staff: i64,
    pub ideas: i64,
    pub comments: i64,
    pub topics: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_token_type() {
        let user = UserResponse {
            id: "id".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            address: None,
            phone: None,
            department_id: "dep".to_string(),
            role: "staff".to_string(),
            created_at: Utc::now(),
        };
        let auth = AuthResponse::new("a".to_string(), "r".to_string(), 900, user);
        assert_eq!(auth.token_type, "Bearer");
        assert_eq!(auth.expires_in, 900);
    }

    #[test]
    fn test_readiness_status() {
        assert_eq!(ReadinessResponse::ready(true).status, "ready");
        assert_eq!(ReadinessResponse::ready(false).status, "degraded");
    }
}
