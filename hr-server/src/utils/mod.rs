//! Utilities
//!
//! - [`AppError`]: handler error type (from `shared::error`)
//! - [`validation`]: payload validation
//! - [`logger`]: tracing subscriber setup

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
pub use result::{AppResult, EmptyResult};
pub use validation::{FieldErrors, Validate};
