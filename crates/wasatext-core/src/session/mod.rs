//! Session state for one front-end instance.
//!
//! The credential lives in a [`SessionStore`] under [`CREDENTIAL_KEY`].
//! Instead of reading that storage from ambient globals, callers hold a
//! [`Session`] handle and pass it to whatever builds requests; each request
//! takes a [`SessionContext`] snapshot.

mod credential;
mod store;

use std::sync::Arc;

use tracing::debug;

pub use credential::{SessionCredential, SessionError};
pub use store::{EphemeralStore, SessionStore};

/// Storage key holding the session credential.
pub const CREDENTIAL_KEY: &str = "identifier";

/// Shared handle to the session of one front end (one "tab").
///
/// Cloning is cheap; clones observe the same storage.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Wrap an existing store.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// A session backed by a fresh [`EphemeralStore`].
    #[must_use]
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(EphemeralStore::new()))
    }

    /// Current credential. Missing and empty values both read as `None`.
    #[must_use]
    pub fn credential(&self) -> Option<SessionCredential> {
        self.store
            .get(CREDENTIAL_KEY)
            .and_then(|token| SessionCredential::new(token).ok())
    }

    /// Whether a credential is currently stored.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.credential().is_some()
    }

    /// Store a credential, replacing any previous one.
    pub fn sign_in(&self, credential: &SessionCredential) {
        debug!("session credential stored");
        self.store
            .set(CREDENTIAL_KEY, credential.expose().to_string());
    }

    /// Forget the credential.
    pub fn sign_out(&self) {
        debug!("session credential cleared");
        self.store.remove(CREDENTIAL_KEY);
    }

    /// Read the credential once for a single request.
    #[must_use]
    pub fn snapshot(&self) -> SessionContext {
        SessionContext {
            credential: self.credential(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::ephemeral()
    }
}

/// Point-in-time view of the session used to decorate one request.
///
/// Later sign-ins or sign-outs don't affect a snapshot already taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    credential: Option<SessionCredential>,
}

impl SessionContext {
    /// A context without a credential.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { credential: None }
    }

    /// A context carrying `credential`.
    #[must_use]
    pub const fn with_credential(credential: SessionCredential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// The captured credential.
    #[must_use]
    pub const fn credential(&self) -> Option<&SessionCredential> {
        self.credential.as_ref()
    }

    /// `Authorization` header value, when a credential was captured.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.credential.as_ref().map(SessionCredential::bearer)
    }
}
