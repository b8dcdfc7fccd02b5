//! URL construction helpers.
//!
//! Pure functions for joining request paths onto the base address and for
//! building the backend's endpoint paths with percent-encoded segments.

use url::Url;

use crate::error::ClientResult;

/// Whether `path` names its own host: `scheme://...` or `//...`.
fn is_absolute(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    path.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Join `path` onto `base`.
///
/// Only `scheme://` and `//` addresses bypass the base; a protocol-relative
/// one takes the base's scheme. Otherwise exactly one `/` separates the base
/// path from `path`, and a `?query` suffix on `path` is kept.
pub fn resolve_url(base: &Url, path: &str) -> ClientResult<Url> {
    if is_absolute(path) {
        return Ok(base.join(path)?);
    }
    if path.is_empty() {
        return Ok(base.clone());
    }

    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };

    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    let joined = format!("{base_path}/{}", path.trim_start_matches('/'));
    url.set_path(&joined);
    url.set_query(query);
    url.set_fragment(None);
    Ok(url)
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `/session`
pub const SESSION_PATH: &str = "/session";

/// `/users`
pub const USERS_PATH: &str = "/users";

/// `/user-profile`
pub const USER_PROFILE_PATH: &str = "/user-profile";

/// `/profile-picture`
pub const PROFILE_PICTURE_PATH: &str = "/profile-picture";

/// `/groups`
pub const GROUPS_PATH: &str = "/groups";

/// `/liveness`
pub const LIVENESS_PATH: &str = "/liveness";

/// `/conversations/{partner}`
pub fn conversation_path(partner: &str) -> String {
    format!("/conversations/{}", segment(partner))
}

/// `/conversations/{partner}/messages/{id}`
pub fn message_path(partner: &str, message_id: i64) -> String {
    format!("{}/messages/{message_id}", conversation_path(partner))
}

/// `/conversations/{partner}/messages/{id}/comment`
pub fn comment_path(partner: &str, message_id: i64) -> String {
    format!("{}/comment", message_path(partner, message_id))
}

/// `/groups/{group}`
pub fn group_path(group: &str) -> String {
    format!("{GROUPS_PATH}/{}", segment(group))
}

/// `/groups/{group}/group-photo`
pub fn group_photo_path(group: &str) -> String {
    format!("{}/group-photo", group_path(group))
}
