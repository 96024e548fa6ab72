//! Employee API Handlers

use axum::{Json, extract::State};
use http::StatusCode;

use crate::api::extract::{ApiJson, ApiPath};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, EmptyResult, ErrorCode, Validate};
use shared::models::{Department, Employee, EmployeeCreate, EmployeeDetail, EmployeeUpdate};

fn not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id)
}

fn code_taken(code: String) -> AppError {
    AppError::new(ErrorCode::EmployeeCodeExists).with_detail("empCode", code)
}

/// The referenced department must exist before anything is written
async fn require_department(state: &ServerState, department_id: i64) -> AppResult<Department> {
    state
        .departments
        .get_by_id(department_id)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::EmployeeDepartmentInvalid)
                .with_detail("departmentId", department_id)
        })
}

/// GET /api/employee - listing ordered by code, with age and department name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeDetail>>> {
    let employees = state.employees.get_all().await?;
    Ok(Json(employees))
}

/// GET /api/employee/:id - the full record, birth date included
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(employee))
}

/// POST /api/employee
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(mut payload): ApiJson<EmployeeCreate>,
) -> AppResult<Json<EmployeeDetail>> {
    payload.normalize();
    payload.validate()?;
    let department = require_department(&state, payload.department_id).await?;

    let code = payload.emp_code.clone();
    let employee = state
        .employees
        .add(payload)
        .await?
        .ok_or_else(|| code_taken(code))?;

    let today = chrono::Local::now().date_naive();
    Ok(Json(EmployeeDetail::new(
        employee,
        Some(department.department_name),
        today,
    )))
}

/// PUT /api/employee/:id - full replacement
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(mut payload): ApiJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if payload.id != id {
        return Err(AppError::id_mismatch(id, payload.id));
    }
    payload.normalize();
    payload.validate()?;

    state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    require_department(&state, payload.department_id).await?;

    let code = payload.emp_code.clone();
    let employee = state
        .employees
        .update(payload.into())
        .await?
        .ok_or_else(|| code_taken(code))?;

    Ok(Json(employee))
}

/// DELETE /api/employee/:id
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> EmptyResult {
    let employee = state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.employees.remove(&employee).await?;
    Ok(StatusCode::OK)
}
