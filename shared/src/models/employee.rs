//! Employee Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::{age_on, date_format, trim_in_place};

/// Employee entity as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub emp_code: String,
    pub emp_name: String,
    #[serde(with = "date_format")]
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub department_id: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default)]
    pub emp_code: String,
    #[serde(default)]
    pub emp_name: String,
    #[serde(with = "date_format")]
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub department_id: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

/// Update employee payload (full replacement, id must match the path)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub id: i64,
    #[serde(default)]
    pub emp_code: String,
    #[serde(default)]
    pub emp_name: String,
    #[serde(with = "date_format")]
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub department_id: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

impl Employee {
    /// Trim code and name so padded variants compare equal
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.emp_code);
        trim_in_place(&mut self.emp_name);
    }
}

impl EmployeeCreate {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.emp_code);
        trim_in_place(&mut self.emp_name);
    }
}

impl EmployeeUpdate {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.emp_code);
        trim_in_place(&mut self.emp_name);
    }
}

impl From<EmployeeUpdate> for Employee {
    fn from(u: EmployeeUpdate) -> Self {
        Self {
            id: u.id,
            emp_code: u.emp_code,
            emp_name: u.emp_name,
            date_of_birth: u.date_of_birth,
            address: u.address,
            mobile: u.mobile,
            department_id: u.department_id,
            salary: u.salary,
        }
    }
}

/// Listing view of an employee: age instead of birth date, plus the
/// department's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub id: i64,
    pub emp_code: String,
    pub emp_name: String,
    pub age: u32,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub department_id: i64,
    pub department_name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

impl EmployeeDetail {
    /// Build the listing view, computing age as of `today`
    pub fn new(employee: Employee, department_name: Option<String>, today: NaiveDate) -> Self {
        Self {
            age: age_on(employee.date_of_birth, today),
            id: employee.id,
            emp_code: employee.emp_code,
            emp_name: employee.emp_name,
            address: employee.address,
            mobile: employee.mobile,
            department_id: employee.department_id,
            department_name,
            salary: employee.salary,
        }
    }
}
