//! Data models
//!
//! Shared between hr-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod account;
pub mod department;
pub mod employee;

// Re-exports
pub use account::*;
pub use department::*;
pub use employee::*;
