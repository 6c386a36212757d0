//! Test fixtures and data generators
//!
//! Provides reusable request/response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub department_id: Uuid,
    pub role: String,
}

impl RegisterRequest {
    pub fn unique(department_id: Uuid) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            department_id,
            role: "staff".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// User update request
#[derive(Debug, Serialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub department_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UpdateUserRequest {
    /// Build an update that keeps the registered identity unchanged
    pub fn keeping(reg: &RegisterRequest) -> Self {
        Self {
            name: reg.name.clone(),
            username: reg.username.clone(),
            email: reg.email.clone(),
            password: None,
            department_id: reg.department_id,
            role: None,
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Department request
#[derive(Debug, Serialize)]
pub struct DepartmentRequest {
    pub name: String,
}

impl DepartmentRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Department {}", unique_suffix()),
        }
    }
}

/// Department response
#[derive(Debug, Deserialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
}

/// Topic request
#[derive(Debug, Serialize)]
pub struct TopicRequest {
    pub name: String,
    pub username: String,
}

impl TopicRequest {
    pub fn unique(username: &str) -> Self {
        Self {
            name: format!("Topic {}", unique_suffix()),
            username: username.to_string(),
        }
    }
}

/// Topic response
#[derive(Debug, Deserialize)]
pub struct TopicResponse {
    pub id: String,
    pub name: String,
    pub user_id: String,
}

/// Idea creation request
#[derive(Debug, Serialize)]
pub struct CreateIdeaRequest {
    pub title: String,
    pub content: String,
    pub topic_id: Uuid,
    pub is_anonymous: bool,
}

impl CreateIdeaRequest {
    pub fn unique(topic_id: Uuid) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Idea {suffix}"),
            content: format!("Idea body {suffix}"),
            topic_id,
            is_anonymous: false,
        }
    }
}

/// Idea response
#[derive(Debug, Deserialize)]
pub struct IdeaResponse {
    pub id: String,
    pub title: String,
    pub topic_id: String,
    pub upvotes: i64,
    pub downvotes: i64,
}

/// Reaction toggle request
#[derive(Debug, Clone, Serialize)]
pub struct ReactionRequest {
    pub username: String,
    pub idea_id: Uuid,
    pub reaction: String,
}

/// Reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub username: String,
    pub idea_id: String,
    pub reaction: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub errors: Vec<String>,
}

/// Site totals response
#[derive(Debug, Deserialize)]
pub struct TotalsResponse {
    pub staff: i64,
    pub ideas: i64,
    pub comments: i64,
    pub topics: i64,
}
