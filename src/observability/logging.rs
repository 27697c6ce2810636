//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick the filter: CLI flag, then `RUST_LOG`, then the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a bare log level, scoped to this crate and tower-http.
pub fn default_filter(level: &str) -> String {
    format!("pingalyser={level},tower_http={level}")
}

/// Resolve the effective filter directive.
pub fn resolve_filter(cli: Option<&str>, env: Option<&str>, config_level: &str) -> String {
    cli.or(env)
        .map(str::to_string)
        .unwrap_or_else(|| default_filter(config_level))
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
