//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use anyhow::Result;
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use uuid::Uuid;

/// Register a fresh user into the seeded department and return its
/// registration data plus auth tokens.
async fn bootstrap_user(server: &TestServer) -> Result<(RegisterRequest, AuthResponse)> {
    let response = server.get("/api/departments").await?;
    let departments: Vec<DepartmentResponse> = assert_json(response, StatusCode::OK).await?;
    let department_id: Uuid = departments
        .first()
        .expect("no seeded department")
        .id
        .parse()?;

    let request = RegisterRequest::unique(department_id);
    let response = server.post("/api/auth/register", &request).await?;
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await?;

    Ok((request, auth))
}

/// Create a topic owned by `username` and an idea inside it.
async fn bootstrap_idea(
    server: &TestServer,
    username: &str,
    token: &str,
) -> Result<(TopicResponse, IdeaResponse)> {
    let topic_req = TopicRequest::unique(username);
    let response = server.post("/api/topics", &topic_req).await?;
    let topic: TopicResponse = assert_json(response, StatusCode::CREATED).await?;

    let idea_req = CreateIdeaRequest::unique(topic.id.parse()?);
    let response = server.post_auth("/api/ideas", token, &idea_req).await?;
    let idea: IdeaResponse = assert_json(response, StatusCode::CREATED).await?;

    Ok((topic, idea))
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = bootstrap_user(&server).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert_eq!(auth.user.role, "staff");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.email, register_req.email);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = bootstrap_user(&server).await.unwrap();

    // Same email, different username
    let mut duplicate = register_req.clone();
    duplicate.username = format!("{}x", register_req.username);
    let response = server.post("/api/auth/register", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Reaction Toggle Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_toggle_trajectory() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = bootstrap_user(&server).await.unwrap();
    let (_, idea) = bootstrap_idea(&server, &register_req.username, &auth.access_token)
        .await
        .unwrap();
    let idea_id: Uuid = idea.id.parse().unwrap();

    let upvote = ReactionRequest {
        username: register_req.username.clone(),
        idea_id,
        reaction: "upvote".to_string(),
    };

    // No prior row: upvote creates one
    let response = server.post("/api/reactions", &upvote).await.unwrap();
    let result: Option<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = result.expect("expected a reaction row");
    assert_eq!(row.reaction, "upvote");
    assert_eq!(row.username, register_req.username);

    // Same sign again: row is removed
    let response = server.post("/api/reactions", &upvote).await.unwrap();
    let result: Option<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(result.is_none());

    // From none: downvote creates a downvote row
    let downvote = ReactionRequest {
        reaction: "downvote".to_string(),
        ..upvote.clone()
    };
    let response = server.post("/api/reactions", &downvote).await.unwrap();
    let result: Option<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.expect("expected a reaction row").reaction, "downvote");

    // Opposite sign: row flips, never duplicates
    let response = server.post("/api/reactions", &upvote).await.unwrap();
    let result: Option<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.expect("expected a reaction row").reaction, "upvote");

    // The stored row matches the last net request
    let path = format!(
        "/api/reactions/idea/{}/user/{}",
        idea_id, register_req.username
    );
    let response = server.get(&path).await.unwrap();
    let result: Option<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.expect("expected a reaction row").reaction, "upvote");
}

#[tokio::test]
async fn test_reaction_rejects_unknown_label() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = bootstrap_user(&server).await.unwrap();
    let (_, idea) = bootstrap_idea(&server, &register_req.username, &auth.access_token)
        .await
        .unwrap();

    let request = ReactionRequest {
        username: register_req.username.clone(),
        idea_id: idea.id.parse().unwrap(),
        reaction: "like".to_string(),
    };
    let response = server.post("/api/reactions", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // No write happened
    let path = format!(
        "/api/reactions/idea/{}/user/{}",
        idea.id, register_req.username
    );
    let response = server.get(&path).await.unwrap();
    let result: Option<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_reaction_rejects_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = bootstrap_user(&server).await.unwrap();
    let (_, idea) = bootstrap_idea(&server, &register_req.username, &auth.access_token)
        .await
        .unwrap();

    let request = ReactionRequest {
        username: format!("ghost{}", unique_suffix()),
        idea_id: idea.id.parse().unwrap(),
        reaction: "upvote".to_string(),
    };
    let response = server.post("/api/reactions", &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Topic Tests
// ============================================================================

#[tokio::test]
async fn test_topic_duplicate_name_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = bootstrap_user(&server).await.unwrap();

    let topic_req = TopicRequest::unique(&register_req.username);
    let response = server.post("/api/topics", &topic_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same name with different casing is still a conflict
    let duplicate = TopicRequest {
        name: topic_req.name.to_uppercase(),
        username: register_req.username.clone(),
    };
    let response = server.post("/api/topics", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_topic_create_unknown_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let topic_req = TopicRequest::unique(&format!("ghost{}", unique_suffix()));
    let response = server.post("/api/topics", &topic_req).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_topic_delete_guard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = bootstrap_user(&server).await.unwrap();
    let (topic, idea) = bootstrap_idea(&server, &register_req.username, &auth.access_token)
        .await
        .unwrap();

    // Topic still owns an idea: delete is a conflict
    let response = server.delete(&format!("/api/topics/{}", topic.id)).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Remove the idea, then the delete goes through
    let response = server
        .delete_auth(&format!("/api/ideas/{}", idea.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete(&format!("/api/topics/{}", topic.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_topic_update_keeps_own_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = bootstrap_user(&server).await.unwrap();

    let topic_req = TopicRequest::unique(&register_req.username);
    let response = server.post("/api/topics", &topic_req).await.unwrap();
    let topic: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Re-saving under the current name is not a conflict
    let response = server
        .put(&format!("/api/topics/{}", topic.id), &topic_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_user_update_email_collision() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first_req, _) = bootstrap_user(&server).await.unwrap();
    let (second_req, second_auth) = bootstrap_user(&server).await.unwrap();

    // Case differences still collide
    let mut update = UpdateUserRequest::keeping(&second_req);
    update.email = first_req.email.to_uppercase();

    let response = server
        .put_auth(
            &format!("/api/users/{}", second_auth.user.id),
            &second_auth.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_user_update_without_password_keeps_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = bootstrap_user(&server).await.unwrap();

    let update = UpdateUserRequest {
        name: "Renamed".to_string(),
        ..UpdateUserRequest::keeping(&register_req)
    };
    let response = server
        .put_auth(
            &format!("/api/users/{}", auth.user.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The original password still works
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Chart Tests
// ============================================================================

#[tokio::test]
async fn test_chart_totals() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = bootstrap_user(&server).await.unwrap();
    bootstrap_idea(&server, &register_req.username, &auth.access_token)
        .await
        .unwrap();

    let response = server.get("/api/charts/totals").await.unwrap();
    let totals: TotalsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(totals.staff >= 1);
    assert!(totals.ideas >= 1);
    assert!(totals.topics >= 1);
    assert!(totals.comments >= 0);
}

// ============================================================================
// Error Envelope Tests
// ============================================================================

#[tokio::test]
async fn test_error_envelope_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/api/topics/{}", Uuid::new_v4()))
        .await
        .unwrap();
    let envelope: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(envelope.status_code, 404);
    assert_eq!(envelope.message, "Not Found");
    assert!(!envelope.errors.is_empty());
}
