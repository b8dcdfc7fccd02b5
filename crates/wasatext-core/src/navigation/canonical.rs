//! The application's route table.
//!
//! Earlier UI iterations grew the table ad hoc and disagreed on what `/`
//! shows. This revision fixes it: `/` is the login screen, and so is the
//! fallback for unknown fragments.

use super::table::{RouteEntry, RouteTable};
use crate::domain::View;

/// Revision of the canonical table. Bump when a path is added or removed.
pub const CANONICAL_ROUTES_VERSION: u32 = 5;

/// View shown at `/` and for unknown fragments.
pub const DEFAULT_VIEW: View = View::Login;

const CANONICAL_ROUTES: &[(&str, View)] = &[
    ("/", DEFAULT_VIEW),
    ("/login", View::Login),
    ("/sign-up", View::SignUp),
    ("/chats", View::ChatList),
    ("/chat", View::Chat),
    ("/profile", View::Profile),
    ("/search", View::Search),
    ("/group-settings", View::GroupSettings),
    ("/choose-members", View::ChooseMembers),
    ("/create-group", View::CreateGroup),
];

impl RouteTable {
    /// The route table every front end should use.
    #[must_use]
    pub fn canonical() -> Self {
        let entries = CANONICAL_ROUTES
            .iter()
            .map(|&(path, view)| RouteEntry {
                path: path.to_string(),
                view,
            })
            .collect();
        Self::from_parts(CANONICAL_ROUTES_VERSION, entries, Some(DEFAULT_VIEW))
    }
}
