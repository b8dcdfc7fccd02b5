//! Command definitions.
//!
//! `ApiCommand` holds the backend calls; it is shared between the one-shot
//! command line and the interactive shell.

use clap::{Parser, Subcommand};

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the navigation table
    Routes,

    /// Resolve a URL fragment to a view, or a view name to its path
    Resolve {
        /// Fragment, full URL or view name, e.g. "/chats" or "chat-list"
        fragment: String,
    },

    #[command(flatten)]
    Api(ApiCommand),

    /// Interactive shell holding one session until exit
    Shell,
}

/// Calls to the chat backend.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    /// Log in (or register) and print the session identifier
    Login {
        /// Username, 3 to 16 characters
        username: String,
    },

    /// List conversations of the signed-in user
    Chats,

    /// Search users by name
    Search {
        /// Part of a username
        query: String,
    },

    /// Show the messages exchanged with a user or group
    Show {
        /// Username or group name
        partner: String,
    },

    /// Send a message
    Send {
        /// Username or group name
        partner: String,
        /// Message text
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
        /// Send a photo by URL instead of (or with) text
        #[arg(long)]
        photo: Option<String>,
    },

    /// Forward a message to another user or group
    Forward {
        /// Conversation the message belongs to
        partner: String,
        /// Message ID
        message_id: i64,
        /// Where to forward it
        recipient: String,
    },

    /// Delete one of your messages
    Delete {
        partner: String,
        message_id: i64,
    },

    /// React to a message
    React {
        partner: String,
        message_id: i64,
        /// Reaction, usually an emoji
        content: String,
    },

    /// Remove your reaction from a message
    Unreact {
        partner: String,
        message_id: i64,
    },

    /// Change your username
    Rename {
        /// New username, 3 to 16 characters
        new_username: String,
    },

    /// Change your profile picture
    Photo {
        /// Image URL
        url: String,
    },

    /// Add members to a group, creating it if needed
    GroupAdd {
        group: String,
        /// Usernames to add
        #[arg(required = true)]
        members: Vec<String>,
    },

    /// Rename a group
    GroupRename {
        group: String,
        new_name: String,
    },

    /// Change a group's picture
    GroupPhoto {
        group: String,
        /// Image URL
        url: String,
    },

    /// Leave a group
    Leave {
        group: String,
    },

    /// Check that the backend is up
    Ping,
}

impl ApiCommand {
    /// Whether the call only makes sense with a signed-in session.
    pub const fn requires_session(&self) -> bool {
        !matches!(self, Self::Login { .. } | Self::Ping)
    }
}

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(name = "wasatext", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands accepted by the interactive shell.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Navigate to a URL fragment
    Open {
        fragment: String,
    },

    /// Print the navigation table
    Routes,

    /// Forget the session credential
    Logout,

    /// Show whether the session is signed in
    Whoami,

    #[command(flatten)]
    Api(ApiCommand),

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(line: &str) -> ShellCommand {
        let tokens = shlex::split(line).unwrap();
        ShellLine::try_parse_from(tokens).unwrap().command
    }

    #[test]
    fn test_shell_line_parses_quoted_text() {
        assert_eq!(
            shell(r#"send bob "see you soon""#),
            ShellCommand::Api(ApiCommand::Send {
                partner: "bob".to_string(),
                text: vec!["see you soon".to_string()],
                photo: None,
            })
        );
    }

    #[test]
    fn test_shell_specific_commands() {
        assert_eq!(
            shell("open /chats"),
            ShellCommand::Open {
                fragment: "/chats".to_string()
            }
        );
        assert_eq!(shell("logout"), ShellCommand::Logout);
        assert_eq!(shell("exit"), ShellCommand::Quit);
    }

    #[test]
    fn test_group_add_requires_members() {
        let tokens = shlex::split("group-add team").unwrap();
        assert!(ShellLine::try_parse_from(tokens).is_err());
    }

    #[test]
    fn test_requires_session() {
        assert!(!ApiCommand::Ping.requires_session());
        assert!(
            !ApiCommand::Login {
                username: "alice".to_string()
            }
            .requires_session()
        );
        assert!(ApiCommand::Chats.requires_session());
    }
}
