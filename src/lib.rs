//! Pingalyser library: downstream ping evaluation behind a single HTTP endpoint.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod ping;

pub use config::PingalyserConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use ping::{PingEvaluator, Verdict};
