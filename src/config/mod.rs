//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → PINGALYSER_TARGET_URI / --target-uri overrides
//!     → validation.rs (semantic checks)
//!     → PingalyserConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup; an invalid config aborts startup
//! - All fields have defaults to allow minimal configs, except the target URI
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, resolve_config, ConfigError, Overrides, TARGET_URI_ENV};
pub use schema::{ListenerConfig, ObservabilityConfig, PingalyserConfig, TargetConfig};
pub use validation::{parse_target_uri, validate_config, ValidationError};
