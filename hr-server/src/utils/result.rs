//! Unified Result Types

use crate::AppError;

/// Application-level Result type used by HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

/// Handler result with an empty JSON-less 200 body
pub type EmptyResult = AppResult<http::StatusCode>;
