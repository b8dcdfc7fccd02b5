#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod navigation;
pub mod ports;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{ConversationPreview, Message, NewMessage, StatusMessage, UserSummary, View};
pub use navigation::{
    CANONICAL_ROUTES_VERSION, DEFAULT_VIEW, RouteEntry, RouteError, RouteTable, RouteTableBuilder,
    fragment_of,
};
pub use ports::{ChatClientPort, ChatPortError, ChatPortResult};
pub use session::{
    CREDENTIAL_KEY, EphemeralStore, Session, SessionContext, SessionCredential, SessionError,
    SessionStore,
};
