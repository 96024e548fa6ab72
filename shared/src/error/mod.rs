//! Unified error system for the HR records service
//!
//! - [`ErrorCode`]: numeric codes the client branches on
//! - [`ErrorCategory`]: classification of codes by domain
//! - [`AppError`]: code, message and optional structured details
//! - [`ApiResponse`]: the JSON envelope errors are rendered into
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 3xxx: Department errors
//! - 4xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::DepartmentHasEmployees);
//!
//! let err = AppError::validation("Validation failed")
//!     .with_detail("field", "departmentName");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
