//! Profile, search and health commands.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_users;

pub async fn search(ctx: &CliContext, query: &str) -> Result<String, CliError> {
    let users = ctx.chat().search_users(query).await?;
    Ok(render_users(&users))
}

pub async fn rename(ctx: &CliContext, new_username: &str) -> Result<String, CliError> {
    let name = ctx.chat().change_username(new_username).await?;
    Ok(format!("Username changed to {name}"))
}

pub async fn photo(ctx: &CliContext, url: &str) -> Result<String, CliError> {
    let stored = ctx.chat().change_profile_picture(url).await?;
    Ok(format!("Profile picture set to {stored}"))
}

/// Check that the backend answers `/liveness`.
pub async fn ping(ctx: &CliContext) -> Result<String, CliError> {
    ctx.chat().liveness().await?;
    Ok("Backend is alive".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{MockChat, context, signed_in_context};
    use wasatext_core::{ChatPortError, UserSummary};

    #[tokio::test]
    async fn test_search_lists_users() {
        let mut chat = MockChat::new();
        chat.expect_search_users()
            .withf(|query| query == "ali")
            .returning(|_| {
                Ok(vec![UserSummary {
                    username: "alice".to_string(),
                    photo_url: String::new(),
                }])
            });
        let ctx = signed_in_context(chat, "7");

        assert_eq!(search(&ctx, "ali").await.unwrap(), "alice\n");
    }

    #[tokio::test]
    async fn test_rename_reports_stored_name() {
        let mut chat = MockChat::new();
        chat.expect_change_username()
            .returning(|name| Ok(name.to_string()));
        let ctx = signed_in_context(chat, "7");

        assert_eq!(
            rename(&ctx, "bobby").await.unwrap(),
            "Username changed to bobby"
        );
    }

    #[tokio::test]
    async fn test_ping_timeout_is_unavailable() {
        let mut chat = MockChat::new();
        chat.expect_liveness().returning(|| {
            Err(ChatPortError::Timeout {
                url: "http://localhost:3000/liveness".to_string(),
                timeout_ms: 5000,
            })
        });
        let ctx = context(chat);

        let err = ping(&ctx).await.unwrap_err();
        assert!(matches!(err, CliError::Unavailable(_)));
    }
}
