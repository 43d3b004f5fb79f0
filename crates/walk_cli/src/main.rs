//! Frogwalk CLI - Command Line Operations for the Random-Walk Simulator
//!
//! This is the operational entry point for the frogwalk workspace.
//!
//! # Commands
//!
//! - `frogwalk simulate --dimension 2 --input samples.csv` - Run a walk
//! - `frogwalk generate --count 1000000 --seed 42` - Write a sample file
//! - `frogwalk probabilities` - Print the 4-jump return-probability table
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate wires the input
//! adapters into the simulation engine and renders the resulting summary
//! as a table, JSON, or CSV for downstream tooling.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::SimulatorConfig;

/// Frogwalk random-walk simulator CLI
#[derive(Parser)]
#[command(name = "frogwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "frogwalk.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a walk over a sample file
    Simulate {
        /// Path to the sample CSV file (defaults to the configured input)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Walk dimensionality (1, 2, or 3)
        #[arg(short, long, default_value = "1")]
        dimension: u8,

        /// Target coordinates, comma separated (2D/3D walks only)
        #[arg(short, long)]
        target: Option<String>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate a pseudo-random sample CSV file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "samples.csv")]
        output: PathBuf,

        /// Number of samples to write
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,

        /// Seed for reproducible files
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the below / at-or-above 0.5 tally after writing
        #[arg(long)]
        tally: bool,
    },

    /// Print the 4-jump return-probability table
    Probabilities {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
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

    let config = SimulatorConfig::load_or_default(Path::new(&cli.config))?;

    match cli.command {
        Commands::Simulate {
            input,
            dimension,
            target,
            format,
        } => commands::simulate::run(
            input.as_deref(),
            dimension,
            target.as_deref(),
            &format,
            &config,
        ),
        Commands::Generate {
            output,
            count,
            seed,
            tally,
        } => commands::generate::run(&output, count, seed, tally),
        Commands::Probabilities { format } => commands::probabilities::run(&format),
    }
}
