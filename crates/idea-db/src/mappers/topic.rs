//! Topic entity <-> model mapper

use idea_core::entities::Topic;

use crate::models::TopicModel;

impl From<TopicModel> for Topic {
    fn from(model: TopicModel) -> Self {
        Topic {
            id: model.id,
            name: model.name,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
