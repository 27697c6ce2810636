//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::PingalyserConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `pingalyser.target_uri`.
pub const TARGET_URI_ENV: &str = "PINGALYSER_TARGET_URI";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<PingalyserConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Startup-time overrides layered on top of the file (CLI beats environment).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Value of [`TARGET_URI_ENV`], if set.
    pub env_target_uri: Option<String>,
    /// `--target-uri` from the command line.
    pub cli_target_uri: Option<String>,
}

impl Overrides {
    /// Capture the environment override from the current process.
    pub fn from_env(cli_target_uri: Option<String>) -> Self {
        Self {
            env_target_uri: std::env::var(TARGET_URI_ENV).ok(),
            cli_target_uri,
        }
    }

    fn apply(&self, config: &mut PingalyserConfig) {
        if let Some(uri) = self.cli_target_uri.as_ref().or(self.env_target_uri.as_ref()) {
            config.pingalyser.target_uri = uri.clone();
        }
    }
}

/// Resolve the startup configuration: file (or defaults), then overrides, then validation.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<PingalyserConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => PingalyserConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
