//! CLI command definitions for the `mindset` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod remote;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use mindset_types::session::SessionId;

/// Talk through a learning challenge with a growth-mindset professor.
#[derive(Parser)]
#[command(name = "mindset", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Service base URL (overrides config.toml and MINDSET_API_URL).
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a freeform chat with the professor.
    Chat {
        /// Reuse a session id instead of generating one.
        #[arg(long)]
        session: Option<String>,
    },

    /// Walk through the three-step reflection wizard.
    Wizard {
        /// Reuse a session id instead of the configured strategy.
        #[arg(long)]
        session: Option<String>,

        /// Send the conversation so far with every step request.
        #[arg(long)]
        client_history: bool,
    },

    /// Check that the service is up.
    Health,

    /// Show the service's record of a session.
    History {
        /// Session id to look up.
        #[arg(long, default_value = SessionId::FIXED)]
        session: String,
    },

    /// Discard the service's record of a session.
    Reset {
        /// Session id to reset.
        #[arg(long, default_value = SessionId::FIXED)]
        session: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
