//! Department API Handlers

use axum::{Json, extract::State};
use http::StatusCode;

use crate::auth::CurrentUser;
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, EmptyResult, ErrorCode, Validate};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};

fn not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::DepartmentNotFound).with_detail("id", id)
}

/// GET /api/department - all departments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let departments = state.departments.get_all().await?;
    Ok(Json(departments))
}

/// GET /api/department/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Department>> {
    let department = state
        .departments
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(department))
}

/// POST /api/department
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiJson(mut payload): ApiJson<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    payload.normalize();
    payload.validate()?;

    let name = payload.department_name.clone();
    let department = state.departments.add(payload).await?.ok_or_else(|| {
        AppError::new(ErrorCode::DepartmentNameExists).with_detail("departmentName", name)
    })?;

    tracing::info!(id = department.id, by = %user.email, "Department added via API");
    Ok(Json(department))
}

/// PUT /api/department/:id
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(mut payload): ApiJson<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    if payload.id != id {
        return Err(AppError::id_mismatch(id, payload.id));
    }
    payload.normalize();
    payload.validate()?;

    state
        .departments
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let name = payload.department_name.clone();
    let department = state
        .departments
        .update(payload.into())
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::DepartmentNameExists).with_detail("departmentName", name)
        })?;

    tracing::info!(id, by = %user.email, "Department updated via API");
    Ok(Json(department))
}

/// DELETE /api/department/:id - refused while employees are assigned
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> EmptyResult {
    let department = state
        .departments
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !state.departments.remove(&department).await? {
        return Err(AppError::new(ErrorCode::DepartmentHasEmployees).with_detail("id", id));
    }

    tracing::info!(id, by = %user.email, "Department removed via API");
    Ok(StatusCode::OK)
}
