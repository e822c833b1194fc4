//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK.  It wraps underlying transport and serialization
//! errors into a unified enum.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// HTTP request failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The proxy answered with a non-success status.
    #[error("proxy returned status {status}: {body}")]
    Status {
        /// HTTP status code the proxy returned.
        status: u16,
        /// Raw error body, usually `{"error": …}`.
        body: String,
    },

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
