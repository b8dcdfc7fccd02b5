//! Group commands.

use crate::bootstrap::CliContext;
use crate::error::CliError;

use super::conversations::status_or;

pub async fn add(ctx: &CliContext, group: &str, members: &[String]) -> Result<String, CliError> {
    let status = ctx.chat().add_to_group(group, members).await?;
    Ok(status_or(status.message, || {
        format!("Added {} to {group}", members.join(", "))
    }))
}

pub async fn rename(ctx: &CliContext, group: &str, new_name: &str) -> Result<String, CliError> {
    let status = ctx.chat().change_group_name(group, new_name).await?;
    Ok(status_or(status.message, || {
        format!("Renamed {group} to {new_name}")
    }))
}

pub async fn photo(ctx: &CliContext, group: &str, url: &str) -> Result<String, CliError> {
    let status = ctx.chat().change_group_picture(group, url).await?;
    Ok(status_or(status.message, || {
        format!("Picture of {group} updated")
    }))
}

pub async fn leave(ctx: &CliContext, group: &str) -> Result<String, CliError> {
    let status = ctx.chat().leave_group(group).await?;
    Ok(status_or(status.message, || format!("Left {group}")))
}
