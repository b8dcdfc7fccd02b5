//! Domain types shared by every adapter.

mod chat;
mod view;

pub use chat::{ConversationPreview, Message, NewMessage, StatusMessage, UserSummary};
pub use view::View;
