//! Chat domain types.
//!
//! These mirror the JSON documents exchanged with the WASAText backend.
//! Field names follow the wire format, which is not consistent between
//! endpoints (`photo_url` on responses, `photoUrl` on requests).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Row of the chat list: one per direct conversation or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationPreview {
    /// Username or group name.
    pub name: String,
    #[serde(default)]
    pub photo_url: String,
    /// Text snippet, or a photo marker for photo messages.
    #[serde(default)]
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
}

/// A user returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(default)]
    pub photo_url: String,
}

/// A message inside a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_photo: bool,
    #[serde(default)]
    pub photo_url: String,
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub fully_received: bool,
    #[serde(default)]
    pub fully_read: bool,
    /// Reaction emoji; the backend sends `null` when there are none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reactions: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Message {
    /// Checkmark rendering used by the chat view: one when delivered, two when read.
    #[must_use]
    pub const fn delivery_marks(&self) -> &'static str {
        if self.fully_read {
            "✓✓"
        } else if self.fully_received {
            "✓"
        } else {
            ""
        }
    }
}

/// Body of a send-message request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub message: String,
    #[serde(rename = "isPhoto")]
    pub is_photo: bool,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: String,
}

impl NewMessage {
    /// A plain text message.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// A photo message with an optional caption.
    pub fn photo(photo_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            message: caption.into(),
            is_photo: true,
            photo_url: photo_url.into(),
        }
    }
}

/// Acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_message_wire_names() {
        let value = serde_json::to_value(NewMessage::photo("http://img/1.png", "look")).unwrap();
        assert_eq!(
            value,
            json!({"message": "look", "isPhoto": true, "photoUrl": "http://img/1.png"})
        );
    }

    #[test]
    fn test_message_tolerates_missing_optional_fields() {
        let msg: Message = serde_json::from_value(json!({
            "message_id": 7,
            "timestamp": "2025-01-05T10:00:00Z",
            "sender": "alice"
        }))
        .unwrap();
        assert_eq!(msg.message_id, 7);
        assert!(msg.reactions.is_empty());
        assert_eq!(msg.delivery_marks(), "");
    }

    #[test]
    fn test_null_reactions_read_as_empty() {
        let msg: Message = serde_json::from_value(json!({
            "message_id": 3,
            "timestamp": "2025-01-05T10:00:00Z",
            "sender": "bob",
            "reactions": null
        }))
        .unwrap();
        assert!(msg.reactions.is_empty());
    }

    #[test]
    fn test_delivery_marks() {
        let mut msg: Message = serde_json::from_value(json!({
            "message_id": 1,
            "timestamp": "2025-01-05T10:00:00Z",
            "sender": "alice",
            "fully_received": true
        }))
        .unwrap();
        assert_eq!(msg.delivery_marks(), "✓");
        msg.fully_read = true;
        assert_eq!(msg.delivery_marks(), "✓✓");
    }

    #[test]
    fn test_conversation_preview_parses_backend_shape() {
        let preview: ConversationPreview = serde_json::from_value(json!({
            "name": "team",
            "photo_url": "",
            "last_message": "hi",
            "last_message_time": "2025-01-05T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(preview.name, "team");
        assert_eq!(preview.last_message, "hi");
    }
}
