//! Idea entity <-> model mappers

use idea_core::entities::{Idea, IdeaSummary};

use crate::models::{IdeaModel, IdeaSummaryModel};

impl From<IdeaModel> for Idea {
    fn from(model: IdeaModel) -> Self {
        Idea {
            id: model.id,
            title: model.title,
            content: model.content,
            topic_id: model.topic_id,
            user_id: model.user_id,
            is_anonymous: model.is_anonymous,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<IdeaSummaryModel> for IdeaSummary {
    fn from(model: IdeaSummaryModel) -> Self {
        IdeaSummary {
            idea: Idea {
                id: model.id,
                title: model.title,
                content: model.content,
                topic_id: model.topic_id,
                user_id: model.user_id,
                is_anonymous: model.is_anonymous,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            upvotes: model.upvotes,
            downvotes: model.downvotes,
            comments: model.comments,
            views: model.views,
        }
    }
}
