//! Errors raised while assembling a route table.
//!
//! Resolution itself never fails: an unknown fragment is simply unmatched.

use thiserror::Error;

/// Reasons a route table is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two entries share the same path.
    #[error("Duplicate route path '{path}'")]
    DuplicatePath {
        /// The repeated path
        path: String,
    },

    /// Paths are absolute fragments such as `/chats`.
    #[error("Route path '{path}' must start with '/'")]
    NotAbsolute {
        /// The offending path
        path: String,
    },

    /// Only literal paths are supported; no params, wildcards, queries.
    #[error("Route path '{path}' contains unsupported character '{found}'")]
    UnsupportedSyntax {
        /// The offending path
        path: String,
        /// First unsupported character
        found: char,
    },
}
