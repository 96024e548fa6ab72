//! Shared types for the HR records service
//!
//! Entity models, request payloads and the unified error types used by
//! `hr-server` and any Rust client of its API.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
