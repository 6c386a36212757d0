//! Refresh token record <-> model mapper

use idea_core::traits::RefreshTokenRecord;

use crate::models::RefreshTokenModel;

impl From<RefreshTokenModel> for RefreshTokenRecord {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshTokenRecord {
            id: model.id,
            user_id: model.user_id,
            token_hash: model.token_hash,
            expires_at: model.expires_at,
            created_at: model.created_at,
            revoked_at: model.revoked_at,
        }
    }
}
