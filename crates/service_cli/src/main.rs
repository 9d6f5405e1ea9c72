//! Gearlock CLI - Command Line Operations for the Puzzle Engine
//!
//! This is the operational entry point for the Gearlock puzzle engine.
//!
//! # Commands
//!
//! - `gearlock generate --seed <s>` - Generate the puzzle for a seed
//! - `gearlock verify --seed <s> --items <id,id,...>` - Verify a selection
//! - `gearlock check` - Run the engine self-check
//!
//! # Architecture
//!
//! As the service layer of the three-layer workspace, this crate
//! orchestrates the engine and data-model layers behind a unified
//! command-line interface. Persisted state is the seed string only; every
//! command reconstructs the puzzle deterministically from it.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Gearlock Puzzle Engine CLI
#[derive(Parser)]
#[command(name = "gearlock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the puzzle for a seed
    Generate {
        /// Seed string (the user identifier)
        #[arg(short, long)]
        seed: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Verify a selection of catalog items against the seed's target
    Verify {
        /// Seed string the puzzle was generated from
        #[arg(short, long)]
        seed: String,

        /// Comma-separated item ids to sum
        #[arg(short, long)]
        items: String,
    },

    /// Run the engine self-check
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            seed,
            format,
            output,
        } => commands::generate::run(&seed, &format, output.as_deref()),
        Commands::Verify { seed, items } => commands::verify::run(&seed, &items),
        Commands::Check => commands::check::run(),
    }
}
