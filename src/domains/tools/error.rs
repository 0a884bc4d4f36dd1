//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// Upstream variants never escape a tool call: the tool renders them into an
/// error-flagged result for the caller.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The outbound request failed (connect, TLS, body read, or non-2xx status).
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream body did not match the expected shape.
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller cancelled the request before the upstream answered.
    #[error("Request cancelled by the client")]
    Cancelled,

    /// An upstream URL could not be built.
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    /// The tool could not render its own output.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid URL" error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
