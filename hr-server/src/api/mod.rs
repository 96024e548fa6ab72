//! API routes
//!
//! - [`health`]: liveness and database check
//! - [`account`]: login, registration, email availability
//! - [`department`]: department records (bearer token required)
//! - [`employee`]: employee records
//!
//! Handlers take `ApiJson`/`ApiPath`/`ApiQuery` so malformed input is
//! answered in the error envelope.

pub mod account;
pub mod department;
pub mod employee;
mod extract;
pub mod health;
