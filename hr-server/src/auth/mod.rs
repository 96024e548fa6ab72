//! Authentication
//!
//! - [`JwtService`]: token issuance and validation
//! - [`password`]: argon2 hashing for stored credentials
//! - [`require_auth`]: bearer-token middleware
//! - [`CurrentUser`]: the authenticated caller, also usable as an extractor

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
