//! Dispatch of backend calls shared by the command line and the shell.

use tracing::debug;

use crate::bootstrap::CliContext;
use crate::commands::ApiCommand;
use crate::error::CliError;

use super::{conversations, groups, profile, session};

/// Run one backend call and return the text to print.
pub async fn run(ctx: &CliContext, command: &ApiCommand) -> Result<String, CliError> {
    debug!(?command, signed_in = ctx.session().is_signed_in(), "dispatching");
    match command {
        ApiCommand::Login { username } => session::login(ctx, username).await,
        ApiCommand::Chats => conversations::chats(ctx).await,
        ApiCommand::Search { query } => profile::search(ctx, query).await,
        ApiCommand::Show { partner } => conversations::show(ctx, partner).await,
        ApiCommand::Send {
            partner,
            text,
            photo,
        } => conversations::send(ctx, partner, text, photo.as_deref()).await,
        ApiCommand::Forward {
            partner,
            message_id,
            recipient,
        } => conversations::forward(ctx, partner, *message_id, recipient).await,
        ApiCommand::Delete {
            partner,
            message_id,
        } => conversations::delete(ctx, partner, *message_id).await,
        ApiCommand::React {
            partner,
            message_id,
            content,
        } => conversations::react(ctx, partner, *message_id, content).await,
        ApiCommand::Unreact {
            partner,
            message_id,
        } => conversations::unreact(ctx, partner, *message_id).await,
        ApiCommand::Rename { new_username } => profile::rename(ctx, new_username).await,
        ApiCommand::Photo { url } => profile::photo(ctx, url).await,
        ApiCommand::GroupAdd { group, members } => groups::add(ctx, group, members).await,
        ApiCommand::GroupRename { group, new_name } => groups::rename(ctx, group, new_name).await,
        ApiCommand::GroupPhoto { group, url } => groups::photo(ctx, group, url).await,
        ApiCommand::Leave { group } => groups::leave(ctx, group).await,
        ApiCommand::Ping => profile::ping(ctx).await,
    }
}

/// Hint shown when a call that needs a session failed without one.
pub fn sign_in_hint(ctx: &CliContext, command: &ApiCommand) -> Option<&'static str> {
    (command.requires_session() && !ctx.session().is_signed_in())
        .then_some("hint: not signed in; run 'login <username>' or pass --identifier")
}

/// Run one backend call and print its output.
pub async fn execute(ctx: &CliContext, command: &ApiCommand) -> Result<(), CliError> {
    match run(ctx, command).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            Ok(())
        }
        Err(err) => {
            if let Some(hint) = sign_in_hint(ctx, command) {
                eprintln!("{hint}");
            }
            Err(err)
        }
    }
}
