//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub content: String,
    pub idea_id: Uuid,
    pub user_id: Uuid,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}
