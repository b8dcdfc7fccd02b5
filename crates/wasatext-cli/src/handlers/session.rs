//! Login, logout and session status.

use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Log in and report the identifier now held by the session.
pub async fn login(ctx: &CliContext, username: &str) -> Result<String, CliError> {
    let credential = ctx.chat().login(username).await?;
    info!(username, "login succeeded");
    Ok(format!(
        "Signed in as {username} (identifier {})",
        credential.expose()
    ))
}

/// Drop the credential. Nothing is sent to the backend.
pub fn logout(ctx: &CliContext) -> String {
    let was_signed_in = ctx.session().is_signed_in();
    ctx.chat().logout();
    if was_signed_in {
        "Signed out".to_string()
    } else {
        "Not signed in".to_string()
    }
}

/// Whether the session holds a credential.
pub fn whoami(ctx: &CliContext) -> String {
    match ctx.session().credential() {
        Some(credential) => format!("Signed in (identifier {})", credential.expose()),
        None => "Not signed in".to_string(),
    }
}
