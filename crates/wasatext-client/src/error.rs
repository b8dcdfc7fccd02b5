//! Error types for request client operations.
//!
//! These are returned by the low-level [`send`](crate::ApiClient::send) path
//! and mapped to core port errors by the chat API adapter.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for request client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from sending a request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Raw response body
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out after {} ms", .timeout.as_millis())]
    Timeout {
        /// The URL that was requested
        url: String,
        /// The configured timeout
        timeout: Duration,
    },

    /// The backend returned something the client could not use.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// A header value could not be encoded.
    #[error("Invalid value for header '{name}'")]
    InvalidHeader {
        /// Header name
        name: &'static str,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON encoding or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status code, for status failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
