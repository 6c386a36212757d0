//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use idea_core::entities::{Comment, Department, Idea, IdeaSummary, Reaction, Topic, User};

use super::responses::{
    CommentResponse, DepartmentResponse, IdeaResponse, ReactionResponse, TopicResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            address: user.address.clone(),
            phone: user.phone.clone(),
            department_id: user.department_id.to_string(),
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Department Mappers
// ============================================================================

impl From<&Department> for DepartmentResponse {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id.to_string(),
            name: department.name.clone(),
            created_at: department.created_at,
        }
    }
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self::from(&department)
    }
}

// ============================================================================
// Topic Mappers
// ============================================================================

impl From<&Topic> for TopicResponse {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id.to_string(),
            name: topic.name.clone(),
            user_id: topic.user_id.to_string(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self::from(&topic)
    }
}

// ============================================================================
// Idea Mappers
// ============================================================================

fn author_field(idea: &Idea) -> Option<String> {
    if idea.is_anonymous {
        None
    } else {
        Some(idea.user_id.to_string())
    }
}

impl From<&IdeaSummary> for IdeaResponse {
    fn from(summary: &IdeaSummary) -> Self {
        Self {
            id: summary.idea.id.to_string(),
            title: summary.idea.title.clone(),
            content: summary.idea.content.clone(),
            topic_id: summary.idea.topic_id.to_string(),
            user_id: author_field(&summary.idea),
            is_anonymous: summary.idea.is_anonymous,
            upvotes: summary.upvotes,
            downvotes: summary.downvotes,
            comments: summary.comments,
            views: summary.views,
            created_at: summary.idea.created_at,
        }
    }
}

impl From<IdeaSummary> for IdeaResponse {
    fn from(summary: IdeaSummary) -> Self {
        Self::from(&summary)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content: comment.content.clone(),
            idea_id: comment.idea_id.to_string(),
            user_id: if comment.is_anonymous {
                None
            } else {
                Some(comment.user_id.to_string())
            },
            is_anonymous: comment.is_anonymous,
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl ReactionResponse {
    /// Build a response for a reaction row placed by `username`
    pub fn for_user(username: &str, reaction: &Reaction) -> Self {
        Self {
            username: username.to_string(),
            idea_id: reaction.idea_id.to_string(),
            reaction: reaction.kind.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idea_core::value_objects::ReactionKind;
    use uuid::Uuid;

    #[test]
    fn test_anonymous_idea_hides_author() {
        let idea = Idea::new(
            Uuid::new_v4(),
            "t".to_string(),
            "c".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            true,
        );
        let summary = IdeaSummary {
            idea,
            upvotes: 0,
            downvotes: 0,
            comments: 0,
            views: 0,
        };
        let response = IdeaResponse::from(&summary);
        assert!(response.user_id.is_none());
        assert!(response.is_anonymous);
    }

    #[test]
    fn test_named_idea_exposes_author() {
        let user_id = Uuid::new_v4();
        let idea = Idea::new(
            Uuid::new_v4(),
            "t".to_string(),
            "c".to_string(),
            Uuid::new_v4(),
            user_id,
            false,
        );
        let summary = IdeaSummary {
            idea,
            upvotes: 1,
            downvotes: 0,
            comments: 0,
            views: 2,
        };
        let response = IdeaResponse::from(&summary);
        assert_eq!(response.user_id, Some(user_id.to_string()));
    }

    #[test]
    fn test_reaction_response_labels() {
        let reaction = Reaction::new(Uuid::new_v4(), Uuid::new_v4(), ReactionKind::Downvote);
        let response = ReactionResponse::for_user("alice", &reaction);
        assert_eq!(response.username, "alice");
        assert_eq!(response.reaction, "downvote");
    }
}
