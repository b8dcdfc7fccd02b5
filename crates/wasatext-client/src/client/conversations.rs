//! Conversation and message endpoints.

use serde::Serialize;
use wasatext_core::{Message, NewMessage, StatusMessage};

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::request::Request;
use crate::url::{comment_path, conversation_path, message_path};

use super::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForwardRequest<'a> {
    recipient_username: &'a str,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    content: &'a str,
}

impl<B: HttpBackend> ApiClient<B> {
    /// Messages exchanged with `partner`, oldest first as the backend orders them.
    pub async fn show_conversation(&self, partner: &str) -> ClientResult<Vec<Message>> {
        let messages: Option<Vec<Message>> =
            self.call(Request::get(conversation_path(partner))).await?;
        Ok(messages.unwrap_or_default())
    }

    pub async fn send_message(&self, partner: &str, message: &NewMessage) -> ClientResult<Message> {
        let request = Request::post(conversation_path(partner)).json(message)?;
        self.call(request).await
    }

    pub async fn forward_message(
        &self,
        partner: &str,
        message_id: i64,
        recipient: &str,
    ) -> ClientResult<Message> {
        let request = Request::post(message_path(partner, message_id)).json(&ForwardRequest {
            recipient_username: recipient,
        })?;
        self.call(request).await
    }

    pub async fn delete_message(&self, partner: &str, message_id: i64) -> ClientResult<StatusMessage> {
        self.call(Request::delete(message_path(partner, message_id)))
            .await
    }

    /// Set the signed-in user's reaction, replacing any earlier one.
    pub async fn comment_message(
        &self,
        partner: &str,
        message_id: i64,
        content: &str,
    ) -> ClientResult<StatusMessage> {
        let request =
            Request::put(comment_path(partner, message_id)).json(&CommentRequest { content })?;
        self.call(request).await
    }

    pub async fn uncomment_message(
        &self,
        partner: &str,
        message_id: i64,
    ) -> ClientResult<StatusMessage> {
        self.call(Request::delete(comment_path(partner, message_id)))
            .await
    }
}
