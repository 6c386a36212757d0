//! Reaction entity <-> model mapper

use idea_core::entities::Reaction;
use idea_core::error::DomainError;
use idea_core::value_objects::ReactionKind;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity.
///
/// The table's CHECK constraint keeps `kind` in {-1, +1}; any other value
/// means the column was edited outside the application.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = ReactionKind::from_value(model.kind).ok_or_else(|| {
            DomainError::InternalError(format!("Unknown stored reaction sign: {}", model.kind))
        })?;

        Ok(Reaction {
            user_id: model.user_id,
            idea_id: model.idea_id,
            kind,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_model(kind: i16) -> ReactionModel {
        ReactionModel {
            user_id: Uuid::new_v4(),
            idea_id: Uuid::new_v4(),
            kind,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_maps_signs() {
        assert_eq!(
            Reaction::try_from(sample_model(1)).unwrap().kind,
            ReactionKind::Upvote
        );
        assert_eq!(
            Reaction::try_from(sample_model(-1)).unwrap().kind,
            ReactionKind::Downvote
        );
    }

    #[test]
    fn test_rejects_out_of_range_sign() {
        assert!(matches!(
            Reaction::try_from(sample_model(0)),
            Err(DomainError::InternalError(_))
        ));
    }
}
