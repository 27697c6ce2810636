//! Downstream ping payload.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ping::PingError;

/// Body returned by the downstream service: `{"response": "<string>"}`.
///
/// A missing or `null` field deserializes to `None`; numbers and booleans are
/// taken as their text. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PingResponse {
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub response: Option<String>,
}

fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a scalar for `response`, found {}",
            other
        ))),
    }
}

impl PingResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }
}

/// Decode a downstream body.
///
/// A zero-length body and the JSON literal `null` both mean "no payload".
/// Anything else must be a JSON object.
pub fn decode_payload(body: &[u8]) -> Result<Option<PingResponse>, PingError> {
    if body.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_slice(body)?)
}
