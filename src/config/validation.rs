//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require a non-empty, absolute http(s) target URI
//! - Check the listener address parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PingalyserConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::PingalyserConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("pingalyser.target_uri must not be empty")]
    EmptyTargetUri,

    #[error("pingalyser.target_uri '{uri}' is invalid: {reason}")]
    InvalidTargetUri { uri: String, reason: String },

    #[error("listener.bind_address '{address}' is invalid: {reason}")]
    InvalidBindAddress { address: String, reason: String },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &PingalyserConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = parse_target_uri(&config.pingalyser.target_uri) {
        errors.push(e);
    }

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::InvalidBindAddress {
            address: config.listener.bind_address.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse the configured target into a URL usable by the downstream client.
pub fn parse_target_uri(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTargetUri);
    }

    let url = Url::parse(trimmed).map_err(|e| ValidationError::InvalidTargetUri {
        uri: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::InvalidTargetUri {
            uri: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
