//! Tab-scoped key-value storage.
//!
//! Models the browser's per-tab session storage: values live as long as the
//! store does and are never persisted.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Synchronous string key-value storage scoped to one front-end session.
///
/// Reads must be cheap; the request pipeline performs one per request.
pub trait SessionStore: Send + Sync {
    /// Current value under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`]. Dropping it is the equivalent of closing the tab.
#[derive(Debug, Default)]
pub struct EphemeralStore {
    values: RwLock<HashMap<String, String>>,
}

impl EphemeralStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl SessionStore for EphemeralStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }
}
