//! Department handlers

use axum::{
    extract::{Path, State},
    Json,
};
use idea_service::{DepartmentRequest, DepartmentResponse, DepartmentService};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all departments
///
/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentResponse>>> {
    let service = DepartmentService::new(state.service_context());
    let departments = service.list_departments().await?;
    Ok(Json(departments))
}

/// Get a department by id
///
/// GET /api/departments/{id}
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department_id = parse_id(&id, "department_id")?;

    let service = DepartmentService::new(state.service_context());
    let department = service.get_department(department_id).await?;
    Ok(Json(department))
}

/// Create a department
///
/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<DepartmentRequest>,
) -> ApiResult<Created<Json<DepartmentResponse>>> {
    let service = DepartmentService::new(state.service_context());
    let department = service.create_department(request).await?;
    Ok(Created(Json(department)))
}

/// Update a department
///
/// PUT /api/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<DepartmentRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department_id = parse_id(&id, "department_id")?;

    let service = DepartmentService::new(state.service_context());
    let department = service.update_department(department_id, request).await?;
    Ok(Json(department))
}

/// Delete a department
///
/// DELETE /api/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let department_id = parse_id(&id, "department_id")?;

    let service = DepartmentService::new(state.service_context());
    service.delete_department(department_id).await?;
    Ok(NoContent)
}
