//! The bearer credential of a signed-in session.

use std::fmt;

use thiserror::Error;

/// Errors from session handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// An empty string is the same as no credential and cannot be stored.
    #[error("Session credential must not be empty")]
    EmptyCredential,
}

/// Opaque token identifying an authenticated session.
///
/// `Debug` is redacted so credentials don't end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Wrap a token; empty tokens are rejected.
    pub fn new(token: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        if token.is_empty() {
            return Err(SessionError::EmptyCredential);
        }
        Ok(Self(token))
    }

    /// The raw token.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(***)")
    }
}

impl TryFrom<String> for SessionCredential {
    type Error = SessionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
