//! CLI entry point - the composition root.
//!
//! Wires the session, client and route table via bootstrap, then dispatches
//! to handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use wasatext_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(ctx: &wasatext_cli::CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Routes => handlers::routes::execute(ctx),
        Commands::Resolve { fragment } => handlers::routes::execute_resolve(ctx, &fragment),
        Commands::Api(command) => handlers::api::execute(ctx, &command).await?,
        Commands::Shell => handlers::shell::execute(ctx).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = bootstrap(CliConfig::from_cli(&cli))?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = dispatch(&ctx, command).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
