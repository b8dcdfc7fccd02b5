//! CLI-specific error types and mappings.
//!
//! Maps port errors to exit codes and user-facing messages.

use thiserror::Error;
use wasatext_core::ChatPortError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The backend answered with an error status.
    #[error("{0}")]
    Api(String),

    /// The backend could not be reached in time, or at all.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal IO error.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<ChatPortError> for CliError {
    fn from(err: ChatPortError) -> Self {
        match err {
            ChatPortError::Validation { message } => Self::Arguments(message),
            ChatPortError::Status {
                status, message, ..
            } => {
                if message.is_empty() {
                    Self::Api(format!("request failed with status {status}"))
                } else {
                    Self::Api(format!("{message} (status {status})"))
                }
            }
            err @ (ChatPortError::Timeout { .. } | ChatPortError::Network { .. }) => {
                Self::Unavailable(err.to_string())
            }
            ChatPortError::InvalidResponse { message } => {
                Self::Api(format!("unexpected response: {message}"))
            }
            ChatPortError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Io(err.to_string())
    }
}
