//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence over the configured level. With a log
//! directory that exists, output goes to a daily rolling file instead of
//! stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Install the logger described by `config`, creating `log_dir` if needed
pub fn init_logger(config: &Config) {
    if let Some(dir) = &config.log_dir
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        eprintln!("Cannot create log directory {dir}: {e}");
    }

    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
}

/// Initialize the logger with optional JSON formatting and file output
fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_dir = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .and_then(|p| p.to_str());

    // try_init: tests and embedders may have installed a subscriber already
    let result = match (file_dir, json) {
        (Some(dir), true) => builder
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, "hr-server"))
            .try_init(),
        (Some(dir), false) => builder
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, "hr-server"))
            .try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_creates_configured_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs").join("hr");

        let mut config = Config::with_overrides("sqlite::memory:", 0);
        config.log_level = "debug".into();
        config.log_json = true;
        config.log_dir = Some(dir.to_string_lossy().into_owned());

        init_logger(&config);
        assert!(dir.is_dir());

        // a second install is reported, not fatal
        init_logger(&config);
    }
}
