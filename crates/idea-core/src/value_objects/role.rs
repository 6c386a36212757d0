//! User roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Role assigned to a user account.
///
/// Each user holds exactly one role at a time; reassignment replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    QaManager,
    QaCoordinator,
    Staff,
}

impl UserRole {
    /// Stable label persisted in the users table
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::QaManager => "qa_manager",
            Self::QaCoordinator => "qa_coordinator",
            Self::Staff => "staff",
        }
    }

    /// Check whether this role may administer users and departments
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Staff
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "qa_manager" | "qa manager" => Ok(Self::QaManager),
            "qa_coordinator" | "qa coordinator" => Ok(Self::QaCoordinator),
            "staff" => Ok(Self::Staff),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("staff".parse::<UserRole>().unwrap(), UserRole::Staff);
        assert_eq!("qa_manager".parse::<UserRole>().unwrap(), UserRole::QaManager);
        assert_eq!("QA Coordinator".parse::<UserRole>().unwrap(), UserRole::QaCoordinator);
    }

    #[test]
    fn test_parse_is_trimmed_and_case_insensitive() {
        assert_eq!(" Admin ".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("STAFF".parse::<UserRole>().unwrap(), UserRole::Staff);
    }

    #[test]
    fn test_parse_rejects_unknown_roles() {
        assert!(matches!(
            "superuser".parse::<UserRole>(),
            Err(DomainError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_round_trip_through_label() {
        for role in [
            UserRole::Admin,
            UserRole::QaManager,
            UserRole::QaCoordinator,
            UserRole::Staff,
        ] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_default_is_staff() {
        assert_eq!(UserRole::default(), UserRole::Staff);
    }
}
