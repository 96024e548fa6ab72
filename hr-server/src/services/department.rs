//! Department Service
//!
//! Name uniqueness on add and update, and the removal guard: a department
//! referenced by any employee is never deleted.

use super::EmployeeService;
use crate::db::repository::{RepoError, RepoResult, department};
use shared::models::{Department, DepartmentCreate};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct DepartmentService {
    pool: SqlitePool,
    employees: EmployeeService,
}

impl DepartmentService {
    pub fn new(pool: SqlitePool) -> Self {
        let employees = EmployeeService::new(pool.clone());
        Self { pool, employees }
    }

    pub async fn get_all(&self) -> RepoResult<Vec<Department>> {
        department::find_all(&self.pool).await
    }

    pub async fn get_by_id(&self, id: i64) -> RepoResult<Option<Department>> {
        department::find_by_id(&self.pool, id).await
    }

    /// Insert unless the name is taken. `Ok(None)` means conflict, nothing written.
    pub async fn add(&self, mut data: DepartmentCreate) -> RepoResult<Option<Department>> {
        data.normalize();
        if department::find_by_name(&self.pool, &data.department_name)
            .await?
            .is_some()
        {
            tracing::debug!(name = %data.department_name, "Department name already in use");
            return Ok(None);
        }

        match department::create(&self.pool, data).await {
            Ok(created) => {
                tracing::info!(id = created.id, name = %created.department_name, "Department created");
                Ok(Some(created))
            }
            // lost the race to a concurrent insert of the same name
            Err(RepoError::Duplicate(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Rename unless another department holds the name. `Ok(None)` means conflict.
    pub async fn update(&self, mut data: Department) -> RepoResult<Option<Department>> {
        data.normalize();
        if department::find_by_name_excluding(&self.pool, &data.department_name, data.id)
            .await?
            .is_some()
        {
            tracing::debug!(id = data.id, name = %data.department_name, "Department name held by another department");
            return Ok(None);
        }

        match department::update(&self.pool, data).await {
            Ok(updated) => {
                tracing::info!(id = updated.id, name = %updated.department_name, "Department updated");
                Ok(Some(updated))
            }
            Err(RepoError::Duplicate(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete unless employees still reference it. `Ok(false)` means the guard refused.
    pub async fn remove(&self, target: &Department) -> RepoResult<bool> {
        let assigned = self.employees.get_by_department(target.id).await?;
        if !assigned.is_empty() {
            tracing::debug!(id = target.id, employees = assigned.len(), "Department still has employees");
            return Ok(false);
        }

        match department::delete(&self.pool, target.id).await {
            Ok(_) => {
                tracing::info!(id = target.id, name = %target.department_name, "Department removed");
                Ok(true)
            }
            // an employee was assigned between the check and the delete
            Err(RepoError::Validation(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
