//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::time::Duration;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::http::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C, then drain in-flight requests for up to
    /// `shutdown_timeout_ms`
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.bind_addr()?;
        let app = build_app(self.state.clone());

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
                return;
            }
            tracing::info!("Shutting down...");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        tracing::info!(%addr, environment = %self.config.environment, "HR server starting");

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(ServerError::Io)?;

        tracing::info!("HR server stopped");
        Ok(())
    }
}
