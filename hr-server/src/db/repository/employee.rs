//! Employee Repository
//!
//! Salaries live in a TEXT column as exact decimal strings; rows are read
//! through [`EmployeeRow`] and converted into [`Employee`].

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{Employee, EmployeeCreate};
use sqlx::SqlitePool;
use std::str::FromStr;

const COLUMNS: &str = "e.id, e.emp_code, e.emp_name, e.date_of_birth, e.address, e.mobile, \
                       e.department_id, e.salary, d.department_name";

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    emp_code: String,
    emp_name: String,
    date_of_birth: NaiveDate,
    address: Option<String>,
    mobile: Option<String>,
    department_id: i64,
    salary: String,
    department_name: Option<String>,
}

impl EmployeeRow {
    fn into_parts(self) -> RepoResult<(Employee, Option<String>)> {
        let salary = Decimal::from_str(&self.salary).map_err(|e| {
            RepoError::Database(format!("Employee {} has invalid salary: {e}", self.id))
        })?;
        let employee = Employee {
            id: self.id,
            emp_code: self.emp_code,
            emp_name: self.emp_name,
            date_of_birth: self.date_of_birth,
            address: self.address,
            mobile: self.mobile,
            department_id: self.department_id,
            salary,
        };
        Ok((employee, self.department_name))
    }

    fn into_employee(self) -> RepoResult<Employee> {
        self.into_parts().map(|(employee, _)| employee)
    }
}

fn select(filter: &str) -> String {
    format!(
        "SELECT {COLUMNS} FROM employee e LEFT JOIN department d ON d.id = e.department_id {filter}"
    )
}

/// All employees ordered by code, with their department's name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<(Employee, Option<String>)>> {
    let rows = sqlx::query_as::<_, EmployeeRow>(&select("ORDER BY e.emp_code"))
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(EmployeeRow::into_parts).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let row = sqlx::query_as::<_, EmployeeRow>(&select("WHERE e.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(EmployeeRow::into_employee).transpose()
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Employee>> {
    let row = sqlx::query_as::<_, EmployeeRow>(&select("WHERE e.emp_code = ? LIMIT 1"))
        .bind(code)
        .fetch_optional(pool)
        .await?;
    row.map(EmployeeRow::into_employee).transpose()
}

/// Same code held by an employee other than `exclude_id`
pub async fn find_by_code_excluding(
    pool: &SqlitePool,
    code: &str,
    exclude_id: i64,
) -> RepoResult<Option<Employee>> {
    let row = sqlx::query_as::<_, EmployeeRow>(&select("WHERE e.emp_code = ? AND e.id <> ? LIMIT 1"))
        .bind(code)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await?;
    row.map(EmployeeRow::into_employee).transpose()
}

pub async fn find_by_department(pool: &SqlitePool, department_id: i64) -> RepoResult<Vec<Employee>> {
    let rows = sqlx::query_as::<_, EmployeeRow>(&select(
        "WHERE e.department_id = ? ORDER BY e.emp_code",
    ))
    .bind(department_id)
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(EmployeeRow::into_employee).collect()
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee (emp_code, emp_name, date_of_birth, address, mobile, department_id, salary) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.emp_code)
    .bind(&data.emp_name)
    .bind(data.date_of_birth)
    .bind(&data.address)
    .bind(&data.mobile)
    .bind(data.department_id)
    .bind(data.salary.to_string())
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Full replacement of every column but the id
pub async fn update(pool: &SqlitePool, data: Employee) -> RepoResult<Employee> {
    let rows = sqlx::query(
        "UPDATE employee SET emp_code = ?, emp_name = ?, date_of_birth = ?, address = ?, \
         mobile = ?, department_id = ?, salary = ? WHERE id = ?",
    )
    .bind(&data.emp_code)
    .bind(&data.emp_name)
    .bind(data.date_of_birth)
    .bind(&data.address)
    .bind(&data.mobile)
    .bind(data.department_id)
    .bind(data.salary.to_string())
    .bind(data.id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {} not found", data.id)));
    }
    Ok(data)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
