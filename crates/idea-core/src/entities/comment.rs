//! Comment entity - a remark on an idea

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub idea_id: Uuid,
    pub user_id: Uuid,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Uuid, content: String, idea_id: Uuid, user_id: Uuid, is_anonymous: bool) -> Self {
        Self {
            id,
            content,
            idea_id,
            user_id,
            is_anonymous,
            created_at: Utc::now(),
        }
    }
}
