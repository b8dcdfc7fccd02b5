//! Rendering of chat data and the navigation table.

use std::fmt::Write as _;

use wasatext_core::{ConversationPreview, Message, RouteTable, UserSummary};

use super::tables::{format_timestamp, separator, truncate_string};

/// Navigation table with its version and fallback.
pub fn render_routes(table: &RouteTable) -> String {
    let mut out = format!("Route table v{}\n", table.version());
    let _ = writeln!(out, "{:<18} View", "Path");
    let _ = writeln!(out, "{}", separator(34));
    for entry in table.entries() {
        let _ = writeln!(out, "{:<18} {}", entry.path, entry.view);
    }
    match table.fallback() {
        Some(view) => {
            let _ = writeln!(out, "Fallback: {view}");
        }
        None => out.push_str("Fallback: none\n"),
    }
    out
}

/// Chat list, most recent first as the backend sends it.
pub fn render_conversations(chats: &[ConversationPreview]) -> String {
    if chats.is_empty() {
        return "No conversations yet. Use 'search' to find someone to talk to.\n".to_string();
    }

    let mut out = format!("{:<17} {:<17} Last message\n", "Name", "When");
    let _ = writeln!(out, "{}", separator(70));
    for chat in chats {
        let _ = writeln!(
            out,
            "{:<17} {:<17} {}",
            truncate_string(&chat.name, 16),
            format_timestamp(&chat.last_message_time),
            truncate_string(&chat.last_message, 34)
        );
    }
    out
}

/// Messages of one conversation.
pub fn render_messages(messages: &[Message]) -> String {
    if messages.is_empty() {
        return "No messages.\n".to_string();
    }

    let mut out = String::new();
    for msg in messages {
        let body = if msg.is_photo {
            if msg.content.is_empty() {
                format!("[photo] {}", msg.photo_url)
            } else {
                format!("[photo] {} {}", msg.photo_url, msg.content)
            }
        } else {
            msg.content.clone()
        };
        let _ = write!(
            out,
            "#{:<5} {} {:<16} {}",
            msg.message_id,
            format_timestamp(&msg.timestamp),
            truncate_string(&msg.sender, 16),
            body
        );
        let marks = msg.delivery_marks();
        if !marks.is_empty() {
            let _ = write!(out, " {marks}");
        }
        if !msg.reactions.is_empty() {
            let _ = write!(out, "  [{}]", msg.reactions.join(" "));
        }
        out.push('\n');
    }
    out
}

/// Search results.
pub fn render_users(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }
    let mut out = String::new();
    for user in users {
        let _ = writeln!(out, "{}", user.username);
    }
    out
}
