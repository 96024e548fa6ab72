//! HR Server - department, employee and account records over HTTP
//!
//! # Modules
//!
//! - **API** (`api`): JSON routes under `/api/department`, `/api/employee`
//!   and `/api/account`, plus `/health`
//! - **Auth** (`auth`): JWT bearer tokens and argon2 password hashes
//! - **Services** (`services`): uniqueness and deletion rules over the store
//! - **Database** (`db`): SQLite via sqlx, migrations embedded at build time
//!
//! ```text
//! hr-server/src/
//! ├── core/          # config, state, errors, server loop
//! ├── auth/          # JWT, password hashing, middleware
//! ├── services/      # department and employee rules, HTTP assembly
//! ├── api/           # routes and handlers
//! ├── utils/         # logging, validation, error conversion
//! └── db/            # pool and repositories
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use services::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger;

/// Security event logging on the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, read [`Config`] and install the logger it describes
pub fn setup_environment() -> crate::core::Result<Config> {
    // a missing .env file is normal
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logger(&config);

    #[cfg(debug_assertions)]
    if std::env::var_os("JWT_SECRET").is_none() {
        tracing::warn!("JWT_SECRET not set, using a temporary key for development");
    }

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __  ______
   / / / / __ \
  / /_/ / /_/ /
 / __  / _, _/
/_/ /_/_/ |_|   server v{}
    "#,
        env!("CARGO_PKG_VERSION")
    );
}
