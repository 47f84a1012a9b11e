//! Development tasks for the arena simulation
//!
//! This binary drives the simulation core headlessly using the cargo-xtask
//! pattern. Run with: `cargo xtask <command>`

mod commands;
mod dirs;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Fight, Names, Season, Tournament};

/// Development tasks for the arena simulation
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Headless tools for the arena simulation", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory holding arena.toml and names.ron
    /// (defaults to $ARENA_DATA_DIR, then the bundled data)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Simulate a fight between two fighters
    Fight(Fight),

    /// Run a single-elimination tournament
    Tournament(Tournament),

    /// Play out a number of days
    Season(Season),

    /// Issue fighter names from the name lists
    Names(Names),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ARENA_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = dirs::content_dir(cli.data_dir)?;

    match cli.command {
        Command::Fight(cmd) => cmd.execute(&data_dir),
        Command::Tournament(cmd) => cmd.execute(&data_dir),
        Command::Season(cmd) => cmd.execute(&data_dir),
        Command::Names(cmd) => cmd.execute(&data_dir),
    }
}
