//! Ping evaluation.
//!
//! One downstream GET, classified three ways:
//!
//! | downstream payload             | verdict               |
//! |--------------------------------|-----------------------|
//! | none                           | `No ping payload :'(` |
//! | `{"response":"pong"}`          | `Pingy!`              |
//! | anything else (incl. null)     | `Not so pingy :'(`    |

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::ping::payload::PingResponse;
use crate::ping::source::PingSource;
use crate::ping::PingError;

/// The value a healthy downstream answers with.
pub const SENTINEL: &str = "pong";

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pingy,
    NotSoPingy,
    NoPayload,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pingy => "Pingy!",
            Verdict::NotSoPingy => "Not so pingy :'(",
            Verdict::NoPayload => "No ping payload :'(",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a downstream payload.
pub fn classify(payload: Option<&PingResponse>) -> Verdict {
    match payload {
        None => Verdict::NoPayload,
        Some(ping) if ping.response.as_deref() == Some(SENTINEL) => Verdict::Pingy,
        Some(_) => Verdict::NotSoPingy,
    }
}

/// Calls the configured target through a [`PingSource`] and classifies the result.
#[derive(Clone)]
pub struct PingEvaluator {
    source: Arc<dyn PingSource>,
    target: Url,
}

impl PingEvaluator {
    pub fn new(source: Arc<dyn PingSource>, target: Url) -> Self {
        Self { source, target }
    }

    /// Perform the downstream GET and classify it.
    ///
    /// Transport, status and decode failures are returned untouched.
    pub async fn evaluate(&self) -> Result<Verdict, PingError> {
        let payload = self.source.fetch(&self.target).await?;
        let verdict = classify(payload.as_ref());

        tracing::debug!(
            target_uri = %self.target,
            response = ?payload.as_ref().and_then(|p| p.response.as_deref()),
            verdict = %verdict,
            "Ping evaluated"
        );

        Ok(verdict)
    }
}
