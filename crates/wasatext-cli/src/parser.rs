//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line front end for the WASAText chat backend.
///
/// Each invocation plays the role of one browser tab: it owns a fresh
/// session, optionally seeded with `--identifier`, that is gone on exit.
#[derive(Parser)]
#[command(name = "wasatext")]
#[command(about = "Talk to a WASAText chat backend")]
#[command(version)]
pub struct Cli {
    /// Base address of the backend (defaults to the build-time address)
    #[arg(long = "api-url", env = "WASATEXT_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Session identifier to sign in with for this invocation
    #[arg(long = "identifier", env = "WASATEXT_IDENTIFIER", global = true)]
    pub identifier: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ApiCommand;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "wasatext",
            "--verbose",
            "--api-url",
            "http://chat.local:3000",
            "--identifier",
            "42",
            "chats",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_url.as_deref(), Some("http://chat.local:3000"));
        assert_eq!(cli.identifier.as_deref(), Some("42"));
        assert!(matches!(
            cli.command,
            Some(Commands::Api(ApiCommand::Chats))
        ));
    }

    #[test]
    fn test_send_joins_words() {
        let cli = Cli::parse_from(["wasatext", "send", "bob", "see", "you", "soon"]);
        match cli.command {
            Some(Commands::Api(ApiCommand::Send {
                partner,
                text,
                photo,
            })) => {
                assert_eq!(partner, "bob");
                assert_eq!(text.join(" "), "see you soon");
                assert!(photo.is_none());
            }
            _ => panic!("Expected send"),
        }
    }
}
