//! Downstream GET capability.
//!
//! The evaluator only sees [`PingSource`]; [`HttpPingSource`] is the
//! reqwest-backed implementation wired in by the server.

use async_trait::async_trait;
use url::Url;

use crate::ping::payload::{decode_payload, PingResponse};
use crate::ping::PingError;

/// Issues one GET against a URI and decodes the ping payload, if any.
#[async_trait]
pub trait PingSource: Send + Sync {
    async fn fetch(&self, uri: &Url) -> Result<Option<PingResponse>, PingError>;
}

/// [`PingSource`] over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpPingSource {
    client: reqwest::Client,
}

impl HttpPingSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PingSource for HttpPingSource {
    async fn fetch(&self, uri: &Url) -> Result<Option<PingResponse>, PingError> {
        let response = self.client.get(uri.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PingError::Status(status));
        }

        let body = response.bytes().await?;
        tracing::trace!(uri = %uri, status = %status, bytes = body.len(), "Downstream responded");

        decode_payload(&body)
    }
}
