//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reactions table
///
/// `kind` holds the persisted sign: +1 upvote, -1 downvote.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: Uuid,
    pub idea_id: Uuid,
    pub kind: i16,
    pub created_at: DateTime<Utc>,
}
