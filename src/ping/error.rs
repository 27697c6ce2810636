use reqwest::StatusCode;

/// Failure of the downstream ping call.
///
/// None of these are recovered locally; the HTTP layer turns them into a 500.
#[derive(Debug, thiserror::Error)]
pub enum PingError {
    #[error("downstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("downstream returned status {0}")]
    Status(StatusCode),

    #[error("downstream payload is not valid ping JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
