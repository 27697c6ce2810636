//! Response mapping.
//!
//! # Responsibilities
//! - Render verdicts as `200 OK` plain text
//! - Map downstream failures to a generic `500 Internal Server Error`
//!
//! # Design Decisions
//! - Failure details are logged, never sent to the client

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::ping::{PingError, Verdict};

impl IntoResponse for Verdict {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.as_str()).into_response()
    }
}

impl IntoResponse for PingError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Ping evaluation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
