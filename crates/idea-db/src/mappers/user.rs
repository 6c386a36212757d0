//! User entity <-> model mapper

use idea_core::entities::User;
use idea_core::error::DomainError;
use idea_core::value_objects::UserRole;

use crate::models::UserModel;

/// Convert UserModel to User entity.
///
/// Fails when the stored role label is not one of the known roles, which
/// only happens if the column was edited outside the application.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: UserRole = model
            .role
            .parse()
            .map_err(|_| DomainError::InternalError(format!("Unknown stored role: {}", model.role)))?;

        Ok(User {
            id: model.id,
            username: model.username,
            email: model.email,
            name: model.name,
            address: model.address,
            phone: model.phone,
            department_id: model.department_id,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_model(role: &str) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            address: None,
            phone: None,
            department_id: Uuid::new_v4(),
            role: role.to_string(),
            password_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_maps_known_role() {
        let user = User::try_from(sample_model("qa_manager")).unwrap();
        assert_eq!(user.role, UserRole::QaManager);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_rejects_unknown_role() {
        let result = User::try_from(sample_model("wizard"));
        assert!(matches!(result, Err(DomainError::InternalError(_))));
    }
}
