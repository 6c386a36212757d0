//! Idea database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for ideas table
#[derive(Debug, Clone, FromRow)]
pub struct IdeaModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub topic_id: Uuid,
    pub user_id: Uuid,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Idea row joined with its aggregate counts
#[derive(Debug, Clone, FromRow)]
pub struct IdeaSummaryModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub topic_id: Uuid,
    pub user_id: Uuid,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: i64,
    pub views: i64,
}
