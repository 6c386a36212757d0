//! User entity - a staff account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserRole;

/// User entity representing a staff account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub department_id: Uuid,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(
        id: Uuid,
        username: String,
        email: String,
        name: String,
        department_id: Uuid,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            name,
            address: None,
            phone: None,
            department_id,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive, trimmed email comparison used by uniqueness guards
    pub fn email_matches(&self, other: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(other.trim())
    }

    /// Case-insensitive, trimmed username comparison used by uniqueness guards
    pub fn username_matches(&self, other: &str) -> bool {
        self.username.trim().eq_ignore_ascii_case(other.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            "Alice".to_string(),
            Uuid::new_v4(),
            UserRole::Staff,
        )
    }

    #[test]
    fn test_email_matches_ignores_case_and_whitespace() {
        let user = sample_user();
        assert!(user.email_matches("Alice@Example.com"));
        assert!(user.email_matches("  alice@example.com  "));
        assert!(!user.email_matches("bob@example.com"));
    }

    #[test]
    fn test_username_matches_ignores_case_and_whitespace() {
        let user = sample_user();
        assert!(user.username_matches(" ALICE "));
        assert!(!user.username_matches("alicia"));
    }
}
