//! Error taxonomy shared across the SDK.
//!
//! Raw server error bodies are never surfaced to callers; decode failures
//! carry the offending payload for diagnostics instead.

/// Errors returned by SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network error communicating with Secret Server")]
    Network(#[source] reqwest::Error),

    #[error("Secret Server authentication failed (check credentials)")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("Secret Server API rate limit exceeded")]
    RateLimited,

    #[error("Secret Server error")]
    ServerError,

    #[error("unexpected Secret Server response: status {0}")]
    UnexpectedStatus(u16),

    /// The response body did not match the expected structure. The raw
    /// payload rides along so the failure can be diagnosed.
    #[error("malformed response from {path}")]
    Decode {
        path: String,
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if retrying may succeed. The SDK itself never
    /// retries; this is a hint for callers that do.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Network(_) | Error::RateLimited | Error::ServerError
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
