//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    auth, charts, comments, departments, health, ideas, reactions, topics, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(department_routes())
        .merge(topic_routes())
        .merge(idea_routes())
        .merge(reaction_routes())
        .merge(chart_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", put(users::update_user))
        .route("/users/:user_id", delete(users::delete_user))
}

/// Department routes
fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(departments::list_departments))
        .route("/departments", post(departments::create_department))
        .route("/departments/:department_id", get(departments::get_department))
        .route("/departments/:department_id", put(departments::update_department))
        .route("/departments/:department_id", delete(departments::delete_department))
}

/// Topic routes
fn topic_routes() -> Router<AppState> {
    Router::new()
        .route("/topics", get(topics::list_topics))
        .route("/topics", post(topics::create_topic))
        .route("/topics/user/:user_id", get(topics::list_topics_by_user))
        .route("/topics/:topic_id", get(topics::get_topic))
        .route("/topics/:topic_id", put(topics::update_topic))
        .route("/topics/:topic_id", delete(topics::delete_topic))
}

/// Idea and comment routes
fn idea_routes() -> Router<AppState> {
    Router::new()
        .route("/ideas", get(ideas::list_ideas))
        .route("/ideas", post(ideas::create_idea))
        .route("/ideas/topic/:topic_id", get(ideas::list_ideas_by_topic))
        .route("/ideas/:idea_id", get(ideas::get_idea))
        .route("/ideas/:idea_id", delete(ideas::delete_idea))
        .route("/ideas/:idea_id/comments", get(comments::list_comments))
        .route("/ideas/:idea_id/comments", post(comments::create_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions", post(reactions::react))
        .route(
            "/reactions/idea/:idea_id/user/:username",
            get(reactions::reaction_of_user),
        )
}

/// Chart routes
fn chart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/charts/contributors-by-department",
            get(charts::contributors_by_department),
        )
        .route("/charts/ideas-by-department", get(charts::ideas_by_department))
        .route(
            "/charts/percentage-of-ideas-by-department",
            get(charts::percentage_of_ideas_by_department),
        )
        .route("/charts/comments-by-department", get(charts::comments_by_department))
        .route(
            "/charts/anonymous-ideas-by-department",
            get(charts::anonymous_ideas_by_department),
        )
        .route("/charts/totals", get(charts::totals))
        .route("/charts/list-of-ideas", get(charts::list_of_ideas))
}
