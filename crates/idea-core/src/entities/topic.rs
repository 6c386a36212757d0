//! Topic entity - named category that owns ideas

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Topic entity
///
/// Invariants: name is unique among topics; a topic that still owns ideas
/// cannot be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    /// The user who created the topic
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Create a new Topic
    pub fn new(id: Uuid, name: String, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive name comparison used by the uniqueness guard
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(other.trim())
    }

    /// Rename the topic and reassign its owner
    pub fn apply_update(&mut self, name: String, user_id: Uuid) {
        self.name = name;
        self.user_id = user_id;
        self.updated_at = Utc::now();
    }
}
