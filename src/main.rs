//! Pingalyser
//!
//! Exposes `GET /pingalyse`, which calls a configured downstream ping endpoint
//! and reports whether it answered `{"response":"pong"}`.
//!
//! ```text
//! client
//!     → GET /pingalyse
//!     → GET target_uri (downstream)
//!     → {"response": ...} classified
//!     → 200 verdict back to client
//! ```

use std::path::PathBuf;

use clap::Parser;

use pingalyser::config::{resolve_config, Overrides};
use pingalyser::lifecycle::{self, Shutdown};
use pingalyser::observability::{init_logging, resolve_filter};

/// Pingalyser: is the downstream service pingy?
#[derive(Parser, Debug)]
#[command(name = "pingalyser", version, about)]
struct Args {
    /// Path to a TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Downstream URI to ping (overrides config file and PINGALYSER_TARGET_URI)
    #[arg(short, long)]
    target_uri: Option<String>,

    /// Log filter (e.g., "pingalyser=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = Overrides::from_env(args.target_uri);
    let config = resolve_config(args.config.as_deref(), &overrides)?;

    let filter = resolve_filter(
        args.log_level.as_deref(),
        std::env::var("RUST_LOG").ok().as_deref(),
        &config.observability.log_level,
    );
    init_logging(&filter);

    tracing::info!("pingalyser v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        target_uri = %config.pingalyser.target_uri,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    lifecycle::spawn_signal_handler(shutdown.clone());

    lifecycle::serve(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
