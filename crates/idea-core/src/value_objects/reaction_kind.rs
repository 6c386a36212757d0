//! Reaction kind - the sign of a vote on an idea

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The two supported reaction signs.
///
/// Stored as `+1` / `-1` and addressed on the wire by the labels
/// `"upvote"` / `"downvote"` (trimmed, case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Upvote,
    Downvote,
}

impl ReactionKind {
    /// Numeric sign persisted in the reactions table
    #[must_use]
    pub fn value(self) -> i16 {
        match self {
            Self::Upvote => 1,
            Self::Downvote => -1,
        }
    }

    /// Convert a stored sign back to a kind
    #[must_use]
    pub fn from_value(value: i16) -> Option<Self> {
        match value {
            1 => Some(Self::Upvote),
            -1 => Some(Self::Downvote),
            _ => None,
        }
    }

    /// The opposite sign
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Upvote => Self::Downvote,
            Self::Downvote => Self::Upvote,
        }
    }

    /// Wire label for this kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upvote => "upvote",
            Self::Downvote => "downvote",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upvote" => Ok(Self::Upvote),
            "downvote" => Ok(Self::Downvote),
            _ => Err(DomainError::InvalidReactionKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("upvote".parse::<ReactionKind>().unwrap(), ReactionKind::Upvote);
        assert_eq!("downvote".parse::<ReactionKind>().unwrap(), ReactionKind::Downvote);
    }

    #[test]
    fn test_parse_is_trimmed_and_case_insensitive() {
        assert_eq!(" Upvote ".parse::<ReactionKind>().unwrap(), ReactionKind::Upvote);
        assert_eq!("DOWNVOTE".parse::<ReactionKind>().unwrap(), ReactionKind::Downvote);
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        assert!(matches!(
            "like".parse::<ReactionKind>(),
            Err(DomainError::InvalidReactionKind(_))
        ));
        assert!("".parse::<ReactionKind>().is_err());
        assert!("+1".parse::<ReactionKind>().is_err());
    }

    #[test]
    fn test_value_round_trip() {
        assert_eq!(ReactionKind::Upvote.value(), 1);
        assert_eq!(ReactionKind::Downvote.value(), -1);
        assert_eq!(ReactionKind::from_value(1), Some(ReactionKind::Upvote));
        assert_eq!(ReactionKind::from_value(-1), Some(ReactionKind::Downvote));
        assert_eq!(ReactionKind::from_value(0), None);
        assert_eq!(ReactionKind::from_value(2), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(ReactionKind::Upvote.opposite(), ReactionKind::Downvote);
        assert_eq!(ReactionKind::Downvote.opposite(), ReactionKind::Upvote);
    }
}
