//! Ping evaluation subsystem.
//!
//! # Data Flow
//! ```text
//! GET /pingalyse
//!     → evaluator.rs (PingEvaluator::evaluate)
//!     → source.rs (PingSource: one GET against the target URI)
//!     → payload.rs (empty body → None, JSON → PingResponse)
//!     → classify → Verdict
//! ```

pub mod error;
pub mod evaluator;
pub mod payload;
pub mod source;

pub use error::PingError;
pub use evaluator::{classify, PingEvaluator, Verdict, SENTINEL};
pub use payload::{decode_payload, PingResponse};
pub use source::{HttpPingSource, PingSource};
