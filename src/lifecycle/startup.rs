//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from a validated configuration
//! - Build the HTTP server and hand it the shutdown receiver
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, after the server (and target URI) is built

use tokio::net::TcpListener;

use crate::config::{ConfigError, PingalyserConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

/// Error raised while bringing the service up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start serving `config` until `shutdown` fires.
pub async fn serve(config: PingalyserConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)
        .map_err(|e| StartupError::Config(ConfigError::Validation(vec![e])))?;

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    server
        .run(listener, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)
}
