//! Interactive shell.
//!
//! One shell is one tab: it owns the session for its whole lifetime and
//! tracks which view the current fragment resolves to. Lines are split with
//! shell quoting rules and parsed with the same clap definitions as the
//! command line.

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;
use wasatext_core::View;

use crate::bootstrap::CliContext;
use crate::commands::{ApiCommand, ShellCommand, ShellLine};
use crate::error::CliError;

use super::{api, routes, session};

/// Navigation state of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    /// Current fragment.
    pub fragment: String,
    /// View the fragment resolved to; `None` renders nothing.
    pub view: Option<View>,
}

impl ShellState {
    /// Start at `/`.
    pub fn new(ctx: &CliContext) -> Self {
        let mut state = Self {
            fragment: String::new(),
            view: None,
        };
        state.navigate(ctx, "/");
        state
    }

    /// Move to `input` (a fragment or full URL).
    pub fn navigate(&mut self, ctx: &CliContext, input: &str) {
        self.fragment = routes::fragment_from_input(input);
        self.view = ctx.routes.resolve(&self.fragment);
        debug!(fragment = %self.fragment, view = ?self.view, "navigated");
    }

    /// Prompt showing the current view.
    pub fn prompt(&self) -> String {
        match self.view {
            Some(view) => format!("wasatext:{view}> "),
            None => "wasatext:(none)> ".to_string(),
        }
    }

    fn describe(&self, ctx: &CliContext) -> String {
        match self.view {
            Some(view) if view.requires_session() && !ctx.session().is_signed_in() => {
                format!("{} -> {view} (sign in to use this view)", self.fragment)
            }
            Some(view) => format!("{} -> {view}", self.fragment),
            None => format!("{} -> no route", self.fragment),
        }
    }
}

/// What to do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Print the text and read the next line.
    Continue(String),
    /// Leave the shell.
    Quit,
}

/// Handle one input line.
pub async fn handle_line(
    ctx: &CliContext,
    state: &mut ShellState,
    line: &str,
) -> Result<Step, CliError> {
    let Some(tokens) = shlex::split(line) else {
        return Err(CliError::Arguments("invalid quoting".to_string()));
    };
    if tokens.is_empty() {
        return Ok(Step::Continue(String::new()));
    }

    let command = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed.command,
        Err(err) => return Ok(Step::Continue(err.to_string())),
    };

    let output = match command {
        ShellCommand::Quit => return Ok(Step::Quit),
        ShellCommand::Open { fragment } => {
            state.navigate(ctx, &fragment);
            state.describe(ctx)
        }
        ShellCommand::Routes => crate::presentation::render_routes(&ctx.routes),
        ShellCommand::Logout => {
            let out = session::logout(ctx);
            navigate_to(ctx, state, View::Login);
            out
        }
        ShellCommand::Whoami => session::whoami(ctx),
        ShellCommand::Api(command) => {
            let result = api::run(ctx, &command).await;
            if let Err(ref err) = result {
                if let Some(hint) = api::sign_in_hint(ctx, &command) {
                    return Ok(Step::Continue(format!("Error: {err}\n{hint}")));
                }
            }
            let out = result?;
            if matches!(command, ApiCommand::Login { .. }) {
                navigate_to(ctx, state, View::ChatList);
            }
            out
        }
    };
    Ok(Step::Continue(output))
}

fn navigate_to(ctx: &CliContext, state: &mut ShellState, view: View) {
    if let Some(path) = ctx.routes.path_for(view) {
        let path = path.to_string();
        state.navigate(ctx, &path);
    }
}

/// Run the shell until `quit` or end of input.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    let mut state = ShellState::new(ctx);
    println!("WASAText shell. Type 'help' for commands, 'quit' to leave.");

    loop {
        match editor.readline(&state.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);

                match handle_line(ctx, &mut state, trimmed).await {
                    Ok(Step::Quit) => break,
                    Ok(Step::Continue(output)) => {
                        let output = output.trim_end();
                        if !output.is_empty() {
                            println!("{output}");
                        }
                    }
                    Err(err) => eprintln!("Error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
