//! Exact-match navigation table.

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use super::error::RouteError;
use crate::domain::View;

/// Characters that would turn a literal path into a pattern.
const RESERVED_CHARS: &[char] = &[':', '*', '?', '#', '(', ')'];

/// A path-to-view binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub view: View,
}

/// Immutable, versioned list of route entries.
///
/// Matching is exact string equality against the fragment; entry order has
/// no effect because paths are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    version: u32,
    entries: Vec<RouteEntry>,
    fallback: Option<View>,
}

impl RouteTable {
    /// Start building a table for the given revision.
    #[must_use]
    pub const fn builder(version: u32) -> RouteTableBuilder {
        RouteTableBuilder {
            version,
            entries: Vec::new(),
            fallback: None,
        }
    }

    /// Assemble a table from entries already known to be valid.
    pub(crate) const fn from_parts(
        version: u32,
        entries: Vec<RouteEntry>,
        fallback: Option<View>,
    ) -> Self {
        Self {
            version,
            entries,
            fallback,
        }
    }

    /// Revision number of this table.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// View rendered when nothing matches, if one is configured.
    #[must_use]
    pub const fn fallback(&self) -> Option<View> {
        self.fallback
    }

    /// Select the view bound to exactly `fragment`.
    ///
    /// Returns `None` for unmatched fragments; this is an empty outlet,
    /// not an error.
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> Option<View> {
        let view = self
            .entries
            .iter()
            .find(|entry| entry.path == fragment)
            .map(|entry| entry.view);
        if view.is_none() {
            debug!(fragment, version = self.version, "no route matched");
        }
        view
    }

    /// Like [`resolve`](Self::resolve), falling back to the configured
    /// fallback view on a miss.
    #[must_use]
    pub fn resolve_or_fallback(&self, fragment: &str) -> Option<View> {
        self.resolve(fragment).or(self.fallback)
    }

    /// Resolve against the fragment of a full URL (hash history).
    ///
    /// A URL without a fragment, or with an empty one, is at `/`.
    #[must_use]
    pub fn resolve_url(&self, url: &Url) -> Option<View> {
        self.resolve(fragment_of(url))
    }

    /// Path bound to `view`, if any. Used to build links.
    #[must_use]
    pub fn path_for(&self, view: View) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.view == view)
            .map(|entry| entry.path.as_str())
    }
}

/// The navigation fragment of a hash-history URL.
#[must_use]
pub fn fragment_of(url: &Url) -> &str {
    match url.fragment() {
        Some(fragment) if !fragment.is_empty() => fragment,
        _ => "/",
    }
}

/// Builder that validates entries before producing a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteTableBuilder {
    version: u32,
    entries: Vec<RouteEntry>,
    fallback: Option<View>,
}

impl RouteTableBuilder {
    /// Bind `path` to `view`.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, view: View) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            view,
        });
        self
    }

    /// View to render when no entry matches.
    #[must_use]
    pub const fn fallback(mut self, view: View) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Validate and freeze the table.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            validate_path(&entry.path)?;
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }

        Ok(RouteTable {
            version: self.version,
            entries: self.entries,
            fallback: self.fallback,
        })
    }
}

fn validate_path(path: &str) -> Result<(), RouteError> {
    if !path.starts_with('/') {
        return Err(RouteError::NotAbsolute {
            path: path.to_string(),
        });
    }
    if let Some(found) = path.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(RouteError::UnsupportedSyntax {
            path: path.to_string(),
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> RouteTable {
        RouteTable::builder(1)
            .route("/", View::Login)
            .route("/login", View::Login)
            .route("/chats", View::ChatList)
            .build()
            .unwrap()
    }

    #[test]
    fn test_exact_match_only() {
        let table = small_table();
        assert_eq!(table.resolve("/chats"), Some(View::ChatList));
        assert_eq!(table.resolve("/chats/"), None);
        assert_eq!(table.resolve("/chat"), None);
        assert_eq!(table.resolve("/CHATS"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn test_unmatched_without_fallback_is_empty() {
        let table = small_table();
        assert_eq!(table.resolve_or_fallback("/nonexistent"), None);
    }

    #[test]
    fn test_fallback_only_applies_on_miss() {
        let table = RouteTable::builder(2)
            .route("/chats", View::ChatList)
            .fallback(View::Login)
            .build()
            .unwrap();
        assert_eq!(table.resolve("/nope"), None);
        assert_eq!(table.resolve_or_fallback("/nope"), Some(View::Login));
        assert_eq!(table.resolve_or_fallback("/chats"), Some(View::ChatList));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::builder(1)
            .route("/chats", View::ChatList)
            .route("/chats", View::Chat)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicatePath {
                path: "/chats".to_string()
            }
        );
    }

    #[test]
    fn test_pattern_paths_rejected() {
        for path in ["/chat/:id", "/files/*", "/search?q", "/a#b"] {
            let result = RouteTable::builder(1).route(path, View::Chat).build();
            assert!(
                matches!(result, Err(RouteError::UnsupportedSyntax { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_relative_path_rejected() {
        let result = RouteTable::builder(1).route("chats", View::ChatList).build();
        assert!(matches!(result, Err(RouteError::NotAbsolute { .. })));
    }

    #[test]
    fn test_resolve_url_uses_fragment() {
        let table = small_table();
        let url = Url::parse("http://localhost:5173/#/chats").unwrap();
        assert_eq!(table.resolve_url(&url), Some(View::ChatList));

        let bare = Url::parse("http://localhost:5173/").unwrap();
        assert_eq!(fragment_of(&bare), "/");
        assert_eq!(table.resolve_url(&bare), Some(View::Login));
    }

    #[test]
    fn test_path_for() {
        let table = small_table();
        assert_eq!(table.path_for(View::ChatList), Some("/chats"));
        assert_eq!(table.path_for(View::Profile), None);
    }
}
