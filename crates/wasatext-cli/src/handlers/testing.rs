//! Port mock and context helpers for handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use wasatext_core::{
    ChatClientPort, ChatPortResult, ConversationPreview, Message, NewMessage, RouteTable, Session,
    SessionCredential, StatusMessage, UserSummary,
};

use crate::bootstrap::CliContext;

mock! {
    pub Chat {}

    #[async_trait]
    impl ChatClientPort for Chat {
        async fn login(&self, username: &str) -> ChatPortResult<SessionCredential>;
        fn logout(&self);
        async fn search_users(&self, query: &str) -> ChatPortResult<Vec<UserSummary>>;
        async fn list_conversations(&self) -> ChatPortResult<Vec<ConversationPreview>>;
        async fn change_username(&self, new_username: &str) -> ChatPortResult<String>;
        async fn change_profile_picture(&self, photo_url: &str) -> ChatPortResult<String>;
        async fn show_conversation(&self, partner: &str) -> ChatPortResult<Vec<Message>>;
        async fn send_message(&self, partner: &str, message: &NewMessage) -> ChatPortResult<Message>;
        async fn forward_message(
            &self,
            partner: &str,
            message_id: i64,
            recipient: &str,
        ) -> ChatPortResult<Message>;
        async fn delete_message(&self, partner: &str, message_id: i64) -> ChatPortResult<StatusMessage>;
        async fn comment_message(
            &self,
            partner: &str,
            message_id: i64,
            content: &str,
        ) -> ChatPortResult<StatusMessage>;
        async fn uncomment_message(&self, partner: &str, message_id: i64) -> ChatPortResult<StatusMessage>;
        async fn add_to_group(&self, group: &str, members: &[String]) -> ChatPortResult<StatusMessage>;
        async fn change_group_name(&self, group: &str, new_name: &str) -> ChatPortResult<StatusMessage>;
        async fn leave_group(&self, group: &str) -> ChatPortResult<StatusMessage>;
        async fn change_group_picture(&self, group: &str, photo_url: &str) -> ChatPortResult<StatusMessage>;
        async fn liveness(&self) -> ChatPortResult<()>;
    }
}

/// Context around a mock port with a fresh, anonymous session.
pub fn context(chat: MockChat) -> CliContext {
    CliContext::new(Session::ephemeral(), Arc::new(chat), RouteTable::canonical())
}

/// Context whose session is already signed in as `identifier`.
pub fn signed_in_context(chat: MockChat, identifier: &str) -> CliContext {
    let ctx = context(chat);
    ctx.session
        .sign_in(&SessionCredential::new(identifier).unwrap());
    ctx
}

pub fn status(message: &str) -> StatusMessage {
    StatusMessage {
        message: message.to_string(),
    }
}

pub fn sample_message(id: i64, content: &str) -> Message {
    Message {
        message_id: id,
        content: content.to_string(),
        is_photo: false,
        photo_url: String::new(),
        timestamp: Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap(),
        sender: "alice".to_string(),
        receiver: "bob".to_string(),
        fully_received: false,
        fully_read: false,
        reactions: Vec::new(),
    }
}
