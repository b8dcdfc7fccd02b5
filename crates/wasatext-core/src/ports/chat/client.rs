//! Chat backend port trait.

use super::error::ChatPortResult;
use crate::domain::{ConversationPreview, Message, NewMessage, StatusMessage, UserSummary};
use crate::session::SessionCredential;
use async_trait::async_trait;

/// Port trait for the WASAText backend.
///
/// The implementation lives in `wasatext-client`. Every call except
/// [`login`](Self::login) relies on the session credential the
/// implementation attaches to outgoing requests.
#[async_trait]
pub trait ChatClientPort: Send + Sync {
    /// Log in (or register) `username` and store the returned credential in
    /// the session.
    async fn login(&self, username: &str) -> ChatPortResult<SessionCredential>;

    /// Forget the session credential. No request is made.
    fn logout(&self);

    /// Users whose name contains `query`.
    async fn search_users(&self, query: &str) -> ChatPortResult<Vec<UserSummary>>;

    /// Chat list of the signed-in user.
    async fn list_conversations(&self) -> ChatPortResult<Vec<ConversationPreview>>;

    /// Rename the signed-in user. Returns the new name.
    async fn change_username(&self, new_username: &str) -> ChatPortResult<String>;

    /// Replace the profile picture. Returns the stored URL.
    async fn change_profile_picture(&self, photo_url: &str) -> ChatPortResult<String>;

    /// Messages exchanged with `partner` (a user or a group).
    async fn show_conversation(&self, partner: &str) -> ChatPortResult<Vec<Message>>;

    /// Send a message to `partner`.
    async fn send_message(&self, partner: &str, message: &NewMessage) -> ChatPortResult<Message>;

    /// Forward message `message_id` from the conversation with `partner`
    /// to `recipient`.
    async fn forward_message(
        &self,
        partner: &str,
        message_id: i64,
        recipient: &str,
    ) -> ChatPortResult<Message>;

    /// Delete one of the signed-in user's messages.
    async fn delete_message(&self, partner: &str, message_id: i64)
    -> ChatPortResult<StatusMessage>;

    /// React to a message.
    async fn comment_message(
        &self,
        partner: &str,
        message_id: i64,
        content: &str,
    ) -> ChatPortResult<StatusMessage>;

    /// Remove the signed-in user's reaction.
    async fn uncomment_message(
        &self,
        partner: &str,
        message_id: i64,
    ) -> ChatPortResult<StatusMessage>;

    /// Add `members` to `group`, creating it if needed.
    async fn add_to_group(&self, group: &str, members: &[String])
    -> ChatPortResult<StatusMessage>;

    /// Rename a group.
    async fn change_group_name(&self, group: &str, new_name: &str)
    -> ChatPortResult<StatusMessage>;

    /// Leave a group.
    async fn leave_group(&self, group: &str) -> ChatPortResult<StatusMessage>;

    /// Replace a group's picture.
    async fn change_group_picture(
        &self,
        group: &str,
        photo_url: &str,
    ) -> ChatPortResult<StatusMessage>;

    /// Backend health check.
    async fn liveness(&self) -> ChatPortResult<()>;
}
