//! Error types for chat port operations.

use thiserror::Error;

/// Errors from chat port operations.
///
/// HTTP status failures are passed through with their original status code;
/// a `401` from an expired or missing credential is not translated into
/// anything more specific.
#[derive(Debug, Error)]
pub enum ChatPortError {
    /// Input rejected before any request was sent.
    #[error("Validation failed: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// The request did not complete within the client timeout.
    #[error("Request to {url} timed out after {timeout_ms} ms")]
    Timeout {
        /// The URL that was requested
        url: String,
        /// The configured timeout
        timeout_ms: u64,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Error text from the response body, if any
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The response body could not be understood.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl ChatPortError {
    /// HTTP status code, for status failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Result type alias for chat port operations.
pub type ChatPortResult<T> = Result<T, ChatPortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatPortError::Timeout {
            url: "http://localhost:3000/user-profile".to_string(),
            timeout_ms: 5000,
        };
        assert!(err.to_string().contains("5000 ms"));
        assert!(err.is_timeout());

        let err = ChatPortError::Status {
            status: 401,
            url: "http://localhost:3000/users".to_string(),
            message: "unauthorized".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_timeout());
    }
}
