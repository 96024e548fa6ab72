use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file in the
/// working directory is loaded first):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:hr.db | SQLite database location |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 5000 | HTTP port |
/// | CORS_ORIGIN | http://localhost:4200 | Allowed browser origin (`*` for any) |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | info | Fallback when `RUST_LOG` is unset |
/// | LOG_DIR | (none) | Daily rolling log files when the directory exists |
/// | LOG_JSON | false | JSON log lines |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Grace period for in-flight requests |
/// | JWT_SECRET | (generated in debug builds) | HMAC secret, 32+ characters |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
/// | JWT_ISSUER / JWT_AUDIENCE | hr-server / hr-clients | Token iss / aud |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/hr.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_host: String,
    pub http_port: u16,
    pub cors_origin: String,
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, defaulting what is unset
    pub fn from_env() -> Result<Self> {
        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:hr.db".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".into()),
            jwt,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        })
    }

    /// Defaults with an explicit database and a throwaway JWT secret.
    ///
    /// Reads nothing from the environment; meant for tests and embedding.
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            database_url: database_url.into(),
            http_host: "127.0.0.1".into(),
            http_port,
            cors_origin: "http://localhost:4200".into(),
            jwt: JwtConfig::ephemeral(),
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            log_json: false,
            shutdown_timeout_ms: 10000,
        }
    }

    /// `host:port` the server binds to
    pub fn bind_addr(&self) -> Result<std::net::SocketAddr> {
        format!("{}:{}", self.http_host, self.http_port)
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid HTTP_HOST/HTTP_PORT: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_are_self_contained() {
        let config = Config::with_overrides("sqlite::memory:", 0);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert!(config.jwt.secret.len() >= crate::auth::jwt::MIN_SECRET_LEN);
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::with_overrides("sqlite::memory:", 5000);
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:5000");

        let mut bad = config.clone();
        bad.http_host = "not a host".into();
        assert!(bad.bind_addr().is_err());
    }
}
