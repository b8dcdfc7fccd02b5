//! Views the navigation table can select.
//!
//! A view is an opaque identifier for whatever the UI layer renders at a
//! given location. The core never renders anything itself.

use serde::{Deserialize, Serialize};

/// A renderable screen of the chat application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Login,
    SignUp,
    ChatList,
    Chat,
    Profile,
    Search,
    GroupSettings,
    ChooseMembers,
    CreateGroup,
}

impl View {
    /// All views, in the order they appear in the canonical table.
    pub const ALL: [Self; 9] = [
        Self::Login,
        Self::SignUp,
        Self::ChatList,
        Self::Chat,
        Self::Profile,
        Self::Search,
        Self::GroupSettings,
        Self::ChooseMembers,
        Self::CreateGroup,
    ];

    /// Stable identifier used in logs and CLI output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::SignUp => "sign-up",
            Self::ChatList => "chat-list",
            Self::Chat => "chat",
            Self::Profile => "profile",
            Self::Search => "search",
            Self::GroupSettings => "group-settings",
            Self::ChooseMembers => "choose-members",
            Self::CreateGroup => "create-group",
        }
    }

    /// Parse a view from its identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == s)
    }

    /// Whether the view only makes sense with a signed-in session.
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        !matches!(self, Self::Login | Self::SignUp)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
