//! Idea entity - a staff submission under a topic

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Idea entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub topic_id: Uuid,
    /// The submitting user; hidden from responses when `is_anonymous` is set
    pub user_id: Uuid,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    /// Create a new Idea
    pub fn new(
        id: Uuid,
        title: String,
        content: String,
        topic_id: Uuid,
        user_id: Uuid,
        is_anonymous: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            topic_id,
            user_id,
            is_anonymous,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Idea together with the aggregate counts shown on listings and dashboards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaSummary {
    pub idea: Idea,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: i64,
    pub views: i64,
}

impl IdeaSummary {
    /// Net vote score (upvotes minus downvotes)
    #[must_use]
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_score() {
        let idea = Idea::new(
            Uuid::new_v4(),
            "Standing desks".to_string(),
            "We should get standing desks.".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            false,
        );
        let summary = IdeaSummary {
            idea,
            upvotes: 5,
            downvotes: 2,
            comments: 3,
            views: 40,
        };
        assert_eq!(summary.score(), 3);
    }
}
