//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → http::request (per-request span with x-request-id)
//!
//! Consumers:
//!     → stdout (fmt layer)
//! ```

pub mod logging;

pub use logging::{init_logging, resolve_filter};
