//! Port trait implementation for `ApiClient`.
//!
//! Implements the core-owned `ChatClientPort` for the request client: input
//! is validated before anything is sent and client errors are converted to
//! port errors.

use async_trait::async_trait;
use serde::Deserialize;
use wasatext_core::utils::validation::{validate_message, validate_name};
use wasatext_core::{
    ChatClientPort, ChatPortError, ChatPortResult, ConversationPreview, Message, NewMessage,
    SessionCredential, StatusMessage, UserSummary,
};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Text shown for a failed request: the backend's `{"error": ...}` field
/// when present, otherwise the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Convert internal `ClientError` to core `ChatPortError`.
fn map_error(err: ClientError) -> ChatPortError {
    match err {
        ClientError::Status { status, url, body } => ChatPortError::Status {
            status,
            url,
            message: error_message(&body),
        },
        ClientError::Timeout { url, timeout } => ChatPortError::Timeout {
            url,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        },
        ClientError::InvalidResponse { message } => ChatPortError::InvalidResponse { message },
        ClientError::InvalidHeader { name } => ChatPortError::Configuration {
            message: format!("credential cannot be sent in the '{name}' header"),
        },
        ClientError::Network(e) => ChatPortError::Network {
            message: e.to_string(),
        },
        ClientError::InvalidUrl(e) => ChatPortError::Configuration {
            message: e.to_string(),
        },
        ClientError::Json(e) => ChatPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ChatClientPort for ApiClient<B> {
    async fn login(&self, username: &str) -> ChatPortResult<SessionCredential> {
        validate_name(username)?;
        self.login(username).await.map_err(map_error)
    }

    fn logout(&self) {
        self.logout();
    }

    async fn search_users(&self, query: &str) -> ChatPortResult<Vec<UserSummary>> {
        self.search_users(query).await.map_err(map_error)
    }

    async fn list_conversations(&self) -> ChatPortResult<Vec<ConversationPreview>> {
        self.list_conversations().await.map_err(map_error)
    }

    async fn change_username(&self, new_username: &str) -> ChatPortResult<String> {
        validate_name(new_username)?;
        self.change_username(new_username).await.map_err(map_error)
    }

    async fn change_profile_picture(&self, photo_url: &str) -> ChatPortResult<String> {
        self.change_profile_picture(photo_url)
            .await
            .map_err(map_error)
    }

    async fn show_conversation(&self, partner: &str) -> ChatPortResult<Vec<Message>> {
        self.show_conversation(partner).await.map_err(map_error)
    }

    async fn send_message(&self, partner: &str, message: &NewMessage) -> ChatPortResult<Message> {
        validate_message(&message.message, message.is_photo)?;
        self.send_message(partner, message).await.map_err(map_error)
    }

    async fn forward_message(
        &self,
        partner: &str,
        message_id: i64,
        recipient: &str,
    ) -> ChatPortResult<Message> {
        self.forward_message(partner, message_id, recipient)
            .await
            .map_err(map_error)
    }

    async fn delete_message(
        &self,
        partner: &str,
        message_id: i64,
    ) -> ChatPortResult<StatusMessage> {
        self.delete_message(partner, message_id)
            .await
            .map_err(map_error)
    }

    async fn comment_message(
        &self,
        partner: &str,
        message_id: i64,
        content: &str,
    ) -> ChatPortResult<StatusMessage> {
        self.comment_message(partner, message_id, content)
            .await
            .map_err(map_error)
    }

    async fn uncomment_message(
        &self,
        partner: &str,
        message_id: i64,
    ) -> ChatPortResult<StatusMessage> {
        self.uncomment_message(partner, message_id)
            .await
            .map_err(map_error)
    }

    async fn add_to_group(&self, group: &str, members: &[String]) -> ChatPortResult<StatusMessage> {
        validate_name(group)?;
        self.add_to_group(group, members).await.map_err(map_error)
    }

    async fn change_group_name(&self, group: &str, new_name: &str) -> ChatPortResult<StatusMessage> {
        validate_name(new_name)?;
        self.change_group_name(group, new_name)
            .await
            .map_err(map_error)
    }

    async fn leave_group(&self, group: &str) -> ChatPortResult<StatusMessage> {
        self.leave_group(group).await.map_err(map_error)
    }

    async fn change_group_picture(
        &self,
        group: &str,
        photo_url: &str,
    ) -> ChatPortResult<StatusMessage> {
        self.change_group_picture(group, photo_url)
            .await
            .map_err(map_error)
    }

    async fn liveness(&self) -> ChatPortResult<()> {
        self.liveness().await.map_err(map_error)
    }
}
