//! Mindset command-line entry point.
//!
//! Binary name: `mindset`
//!
//! Parses CLI arguments, initializes tracing and the service client, then
//! dispatches to the chat loop, the wizard loop or a one-shot command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use mindset_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mindset", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.url.as_deref()).await?;

    let result = match cli.command {
        Commands::Chat { session } => cli::chat::loop_runner::run_chat_loop(&state, session).await,
        Commands::Wizard {
            session,
            client_history,
        } => cli::chat::loop_runner::run_wizard_loop(&state, session, client_history).await,
        Commands::Health => cli::remote::health(&state, cli.json).await,
        Commands::History { session } => cli::remote::history(&state, &session, cli.json).await,
        Commands::Reset { session, force } => {
            cli::remote::reset(&state, &session, force, cli.json).await
        }
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
