//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing)
//!     → request.rs (request ID, tracing span)
//!     → ping evaluator (one downstream GET)
//!     → response.rs (verdict → 200, failure → 500)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestSpan, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
