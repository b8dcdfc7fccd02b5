//! CLI bootstrap - the composition root.
//!
//! This is the only place where the session, the request client and the
//! navigation table are wired together. Handlers receive a `CliContext` and
//! talk to the backend through the `ChatClientPort` it carries.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;
use wasatext_client::{ClientConfig, DefaultApiClient, DefaultHeader};
use wasatext_core::{ChatClientPort, RouteTable, Session, SessionCredential};

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Backend address; the build-time default when unset.
    pub api_url: Option<String>,
    /// Identifier to seed the session with.
    pub identifier: Option<String>,
}

impl CliConfig {
    /// Take the global options from the parsed command line.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            identifier: cli.identifier.clone(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The tab-scoped session shared with the client.
    pub session: Session,
    /// The chat backend.
    pub chat: Arc<dyn ChatClientPort>,
    /// Canonical navigation table.
    pub routes: RouteTable,
}

impl CliContext {
    /// Assemble a context from already-built parts.
    pub fn new(session: Session, chat: Arc<dyn ChatClientPort>, routes: RouteTable) -> Self {
        Self {
            session,
            chat,
            routes,
        }
    }

    /// Access the chat backend.
    pub fn chat(&self) -> &dyn ChatClientPort {
        self.chat.as_ref()
    }

    /// Access the session.
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

/// Bootstrap the CLI application.
///
/// Creates an empty session (seeded from `identifier` when given), the
/// reqwest-backed client bound to it, and the canonical route table.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let session = Session::ephemeral();
    if let Some(identifier) = config.identifier.filter(|s| !s.is_empty()) {
        let credential =
            SessionCredential::new(identifier).context("Invalid session identifier")?;
        session.sign_in(&credential);
    }

    let mut client_config = ClientConfig::new();
    if let Some(url) = config.api_url {
        client_config = client_config.with_base_url(url);
    }
    debug!(base_url = client_config.base_url(), "configuring client");

    let client = build_client(&client_config, session.clone())
        .with_context(|| format!("Invalid API address '{}'", client_config.base_url()))?;

    Ok(CliContext::new(
        session,
        Arc::new(client),
        RouteTable::canonical(),
    ))
}

/// The reqwest-backed client with the CLI's request decorators installed.
fn build_client(
    config: &ClientConfig,
    session: Session,
) -> wasatext_client::ClientResult<DefaultApiClient> {
    Ok(DefaultApiClient::new(config, session)?.with_decorator(DefaultHeader::accept_json()))
}
