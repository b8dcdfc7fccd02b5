//! Conversation and message commands.

use wasatext_core::NewMessage;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{render_conversations, render_messages};

/// Chat list of the signed-in user.
pub async fn chats(ctx: &CliContext) -> Result<String, CliError> {
    let chats = ctx.chat().list_conversations().await?;
    Ok(render_conversations(&chats))
}

/// Messages exchanged with `partner`.
pub async fn show(ctx: &CliContext, partner: &str) -> Result<String, CliError> {
    let messages = ctx.chat().show_conversation(partner).await?;
    Ok(render_messages(&messages))
}

/// Build the outgoing message from command arguments.
pub fn compose(text: &[String], photo: Option<&str>) -> NewMessage {
    let text = text.join(" ");
    match photo {
        Some(url) => NewMessage::photo(url, text),
        None => NewMessage::text(text),
    }
}

pub async fn send(
    ctx: &CliContext,
    partner: &str,
    text: &[String],
    photo: Option<&str>,
) -> Result<String, CliError> {
    let message = compose(text, photo);
    let sent = ctx.chat().send_message(partner, &message).await?;
    Ok(format!("Sent message #{} to {partner}", sent.message_id))
}

pub async fn forward(
    ctx: &CliContext,
    partner: &str,
    message_id: i64,
    recipient: &str,
) -> Result<String, CliError> {
    let forwarded = ctx
        .chat()
        .forward_message(partner, message_id, recipient)
        .await?;
    Ok(format!(
        "Forwarded #{message_id} to {recipient} as #{}",
        forwarded.message_id
    ))
}

pub async fn delete(ctx: &CliContext, partner: &str, message_id: i64) -> Result<String, CliError> {
    let status = ctx.chat().delete_message(partner, message_id).await?;
    Ok(status_or(status.message, || format!("Deleted #{message_id}")))
}

pub async fn react(
    ctx: &CliContext,
    partner: &str,
    message_id: i64,
    content: &str,
) -> Result<String, CliError> {
    let status = ctx
        .chat()
        .comment_message(partner, message_id, content)
        .await?;
    Ok(status_or(status.message, || {
        format!("Reacted to #{message_id} with {content}")
    }))
}

pub async fn unreact(ctx: &CliContext, partner: &str, message_id: i64) -> Result<String, CliError> {
    let status = ctx.chat().uncomment_message(partner, message_id).await?;
    Ok(status_or(status.message, || {
        format!("Removed reaction from #{message_id}")
    }))
}

/// The backend's acknowledgement, or `fallback` when it sent none.
pub(crate) fn status_or(message: String, fallback: impl FnOnce() -> String) -> String {
    if message.is_empty() { fallback() } else { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{MockChat, sample_message, signed_in_context, status};
    use wasatext_core::ChatPortError;

    #[test]
    fn test_compose_text_and_photo() {
        let words = vec!["see".to_string(), "you".to_string()];
        assert_eq!(compose(&words, None), NewMessage::text("see you"));
        let photo = compose(&[], Some("http://img/1.png"));
        assert!(photo.is_photo);
        assert_eq!(photo.photo_url, "http://img/1.png");
    }

    #[tokio::test]
    async fn test_send_passes_composed_message() {
        let mut chat = MockChat::new();
        chat.expect_send_message()
            .withf(|partner, message| partner == "bob" && message.message == "hi there")
            .times(1)
            .returning(|_, _| Ok(sample_message(12, "hi there")));
        let ctx = signed_in_context(chat, "7");

        let words = vec!["hi".to_string(), "there".to_string()];
        let out = send(&ctx, "bob", &words, None).await.unwrap();
        assert_eq!(out, "Sent message #12 to bob");
    }

    #[tokio::test]
    async fn test_show_renders_messages() {
        let mut chat = MockChat::new();
        chat.expect_show_conversation()
            .returning(|_| Ok(vec![sample_message(1, "hello")]));
        let ctx = signed_in_context(chat, "7");

        let out = show(&ctx, "bob").await.unwrap();
        assert!(out.contains("hello"));
    }

    #[tokio::test]
    async fn test_chats_unauthorized_surfaces_status() {
        let mut chat = MockChat::new();
        chat.expect_list_conversations().returning(|| {
            Err(ChatPortError::Status {
                status: 401,
                url: "http://localhost:3000/user-profile".to_string(),
                message: "unauthorized".to_string(),
            })
        });
        let ctx = signed_in_context(chat, "7");

        let err = chats(&ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "unauthorized (status 401)");
    }

    #[tokio::test]
    async fn test_react_falls_back_to_local_text() {
        let mut chat = MockChat::new();
        chat.expect_comment_message()
            .withf(|partner, id, content| partner == "bob" && *id == 5 && content == "👍")
            .returning(|_, _, _| Ok(status("")));
        let ctx = signed_in_context(chat, "7");

        let out = react(&ctx, "bob", 5, "👍").await.unwrap();
        assert_eq!(out, "Reacted to #5 with 👍");
    }

    #[tokio::test]
    async fn test_delete_uses_backend_message() {
        let mut chat = MockChat::new();
        chat.expect_delete_message()
            .returning(|_, _| Ok(status("message deleted")));
        let ctx = signed_in_context(chat, "7");

        assert_eq!(delete(&ctx, "bob", 5).await.unwrap(), "message deleted");
    }
}
