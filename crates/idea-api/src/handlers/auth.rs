//! Authentication handlers
//!
//! Endpoints for registration, login, token refresh, and logout.

use axum::{extract::State, Json};
use idea_service::{
    AuthResponse, AuthService, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Rotate tokens using a refresh token
///
/// POST /api/auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}

/// Logout, revoking one or all refresh tokens
///
/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    request: Option<Json<LogoutRequest>>,
) -> ApiResult<NoContent> {
    let refresh_token = request.and_then(|Json(r)| r.refresh_token);

    let service = AuthService::new(state.service_context());
    service.logout(auth.user_id, refresh_token).await?;
    Ok(NoContent)
}
