//! Chart handlers
//!
//! Aggregate figures for the admin dashboard.

use axum::{extract::State, Json};
use idea_service::{
    ChartService, ContributorChartResponse, DepartmentCountResponse,
    DepartmentPercentageResponse, IdeaResponse, TotalsResponse,
};

use crate::response::ApiResult;
use crate::state::AppState;

/// Contributors per department
///
/// GET /api/charts/contributors-by-department
pub async fn contributors_by_department(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ContributorChartResponse>>> {
    let service = ChartService::new(state.service_context());
    Ok(Json(service.contributors_by_department().await?))
}

/// Idea count per department
///
/// GET /api/charts/ideas-by-department
pub async fn ideas_by_department(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentCountResponse>>> {
    let service = ChartService::new(state.service_context());
    Ok(Json(service.ideas_by_department().await?))
}

/// Share of ideas per department
///
/// GET /api/charts/percentage-of-ideas-by-department
pub async fn percentage_of_ideas_by_department(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentPercentageResponse>>> {
    let service = ChartService::new(state.service_context());
    Ok(Json(service.percentage_of_ideas_by_department().await?))
}

/// Comment count per department
///
/// GET /api/charts/comments-by-department
pub async fn comments_by_department(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentCountResponse>>> {
    let service = ChartService::new(state.service_context());
    Ok(Json(service.comments_by_department().await?))
}

/// Anonymous-idea count per department
///
/// GET /api/charts/anonymous-ideas-by-department
pub async fn anonymous_ideas_by_department(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentCountResponse>>> {
    let service = ChartService::new(state.service_context());
    Ok(Json(service.anonymous_ideas_by_department().await?))
}

/// Staff, idea, comment, and topic totals
///
/// GET /api/charts/totals
pub async fn totals(State(state): State<AppState>) -> ApiResult<Json<TotalsResponse>> {
    let service = ChartService::new(state.service_context());
    Ok(Json(service.totals().await?))
}

/// Recent ideas for the dashboard listing
///
/// GET /api/charts/list-of-ideas
pub async fn list_of_ideas(State(state): State<AppState>) -> ApiResult<Json<Vec<IdeaResponse>>> {
    let service = ChartService::new(state.service_context());
    Ok(Json(service.ideas_for_dashboard().await?))
}
