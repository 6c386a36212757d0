//! Comment entity <-> model mapper

use idea_core::entities::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            idea_id: model.idea_id,
            user_id: model.user_id,
            is_anonymous: model.is_anonymous,
            created_at: model.created_at,
        }
    }
}
