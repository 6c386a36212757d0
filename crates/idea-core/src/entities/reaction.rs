//! Reaction entity - a user's vote on an idea

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ReactionKind;

/// Reaction entity
///
/// At most one reaction row exists per (user, idea) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Uuid,
    pub idea_id: Uuid,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: Uuid, idea_id: Uuid, kind: ReactionKind) -> Self {
        Self {
            user_id,
            idea_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// The single write a reaction request resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle {
    /// No prior row: insert one with the requested kind
    Insert,
    /// Prior row has the requested kind: delete it (un-react)
    Remove,
    /// Prior row has the opposite kind: flip it to the requested kind
    Flip,
}

/// Decide the toggle action for a reaction request.
///
/// Transition table, keyed by (existing row, requested kind):
///
/// | existing          | requested | result |
/// |-------------------|-----------|--------|
/// | none              | any       | Insert |
/// | kind = requested  | any       | Remove |
/// | kind = -requested | any       | Flip   |
#[must_use]
pub fn toggle_transition(existing: Option<ReactionKind>, requested: ReactionKind) -> ReactionToggle {
    match existing {
        None => ReactionToggle::Insert,
        Some(kind) if kind == requested => ReactionToggle::Remove,
        Some(_) => ReactionToggle::Flip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_prior_row_inserts() {
        assert_eq!(
            toggle_transition(None, ReactionKind::Upvote),
            ReactionToggle::Insert
        );
        assert_eq!(
            toggle_transition(None, ReactionKind::Downvote),
            ReactionToggle::Insert
        );
    }

    #[test]
    fn test_repeating_the_same_kind_removes() {
        assert_eq!(
            toggle_transition(Some(ReactionKind::Upvote), ReactionKind::Upvote),
            ReactionToggle::Remove
        );
        assert_eq!(
            toggle_transition(Some(ReactionKind::Downvote), ReactionKind::Downvote),
            ReactionToggle::Remove
        );
    }

    #[test]
    fn test_opposite_kind_flips() {
        assert_eq!(
            toggle_transition(Some(ReactionKind::Upvote), ReactionKind::Downvote),
            ReactionToggle::Flip
        );
        assert_eq!(
            toggle_transition(Some(ReactionKind::Downvote), ReactionKind::Upvote),
            ReactionToggle::Flip
        );
    }

    // Applying the same kind twice nets out to no row, regardless of kind.
    #[test]
    fn test_double_submission_is_idempotent_removal() {
        for kind in [ReactionKind::Upvote, ReactionKind::Downvote] {
            let first = toggle_transition(None, kind);
            assert_eq!(first, ReactionToggle::Insert);
            let second = toggle_transition(Some(kind), kind);
            assert_eq!(second, ReactionToggle::Remove);
        }
    }

    #[test]
    fn test_reaction_construction() {
        let user_id = Uuid::new_v4();
        let idea_id = Uuid::new_v4();
        let reaction = Reaction::new(user_id, idea_id, ReactionKind::Downvote);
        assert_eq!(reaction.user_id, user_id);
        assert_eq!(reaction.idea_id, idea_id);
        assert_eq!(reaction.kind, ReactionKind::Downvote);
    }
}
