//! sapper CLI - Minesweeper knowledge-base inference agent
//!
//! This CLI provides a unified interface for:
//! - Playing single games with a verbose move-by-move trace
//! - Running batch simulations with aggregate statistics

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sapper")]
#[command(version, about = "Minesweeper knowledge-base inference agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game verbosely
    Play(sapper::cli::commands::play::PlayArgs),

    /// Run a batch of games and report statistics
    Simulate(sapper::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => sapper::cli::commands::play::execute(args),
        Commands::Simulate(args) => sapper::cli::commands::simulate::execute(args),
    }
}
