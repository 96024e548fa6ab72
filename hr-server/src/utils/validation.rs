//! Input validation
//!
//! Every inbound payload implements [`Validate`]; handlers call it before
//! touching a service. All failing fields are collected, not just the
//! first. Lengths count characters, not bytes.

use serde::Serialize;
use shared::client::{LoginRequest, RegisterRequest};
use shared::models::{DepartmentCreate, DepartmentUpdate, EmployeeCreate, EmployeeUpdate};
use validator::ValidateEmail;

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

pub const MIN_DEPARTMENT_NAME_LEN: usize = 2;
pub const MAX_DEPARTMENT_NAME_LEN: usize = 100;

pub const MIN_EMP_CODE_LEN: usize = 4;
pub const MAX_EMP_CODE_LEN: usize = 150;

pub const MIN_EMP_NAME_LEN: usize = 2;
pub const MAX_EMP_NAME_LEN: usize = 150;

/// Phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

pub const MAX_ADDRESS_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 128;

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rejected field of one payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }

    /// Required text, trimmed non-empty, `min..=max` characters
    pub fn required_text(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        if value.trim().is_empty() {
            self.push(field, format!("The field {field} is required"));
            return;
        }
        let len = value.chars().count();
        if len < min || len > max {
            self.push(
                field,
                format!("The field {field} must be between {min} and {max} characters"),
            );
        }
    }

    /// Optional text, at most `max` characters when present
    pub fn optional_text(&mut self, field: &'static str, value: &Option<String>, max: usize) {
        if let Some(v) = value
            && v.chars().count() > max
        {
            self.push(
                field,
                format!("The field {field} must be at most {max} characters"),
            );
        }
    }

    pub fn email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("The field {field} is required"));
        } else if value.chars().count() > MAX_EMAIL_LEN {
            self.push(
                field,
                format!("The field {field} must be at most {MAX_EMAIL_LEN} characters"),
            );
        } else if !value.validate_email() {
            self.push(field, format!("The field {field} is not a valid email address"));
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        let list = serde_json::to_value(&errors.0).unwrap_or_default();
        AppError::new(ErrorCode::ValidationFailed).with_detail("errors", list)
    }
}

/// Field-level validation of an inbound payload
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

impl Validate for DepartmentCreate {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text(
            "departmentName",
            &self.department_name,
            MIN_DEPARTMENT_NAME_LEN,
            MAX_DEPARTMENT_NAME_LEN,
        );
        errors.into_result()
    }
}

impl Validate for DepartmentUpdate {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text(
            "departmentName",
            &self.department_name,
            MIN_DEPARTMENT_NAME_LEN,
            MAX_DEPARTMENT_NAME_LEN,
        );
        errors.into_result()
    }
}

fn employee_fields(
    errors: &mut FieldErrors,
    emp_code: &str,
    emp_name: &str,
    address: &Option<String>,
    mobile: &Option<String>,
) {
    errors.required_text("empCode", emp_code, MIN_EMP_CODE_LEN, MAX_EMP_CODE_LEN);
    errors.required_text("empName", emp_name, MIN_EMP_NAME_LEN, MAX_EMP_NAME_LEN);
    errors.optional_text("address", address, MAX_ADDRESS_LEN);
    errors.optional_text("mobile", mobile, MAX_SHORT_TEXT_LEN);
}

impl Validate for EmployeeCreate {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        employee_fields(
            &mut errors,
            &self.emp_code,
            &self.emp_name,
            &self.address,
            &self.mobile,
        );
        errors.into_result()
    }
}

impl Validate for EmployeeUpdate {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        employee_fields(
            &mut errors,
            &self.emp_code,
            &self.emp_name,
            &self.address,
            &self.mobile,
        );
        errors.into_result()
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.email("email", &self.email);
        errors.required_text("password", &self.password, MIN_PASSWORD_LEN, MAX_PASSWORD_LEN);
        errors.into_result()
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.email.trim().is_empty() {
            errors.push("email", "The field email is required");
        }
        if self.password.is_empty() {
            errors.push("password", "The field password is required");
        }
        errors.into_result()
    }
}
