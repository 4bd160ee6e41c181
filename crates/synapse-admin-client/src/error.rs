//! Synapse admin client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynapseError {
    /// Network-level failure: DNS, connection refused, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-200 status from the homeserver. Carries the raw response
    /// body verbatim so the server's error code/message stays readable.
    #[error("server rejected request: {0}")]
    Protocol(String),

    /// 200 response whose body is not the JSON we expect.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
