//! Simulate command - Run a batch of games and report statistics

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::output,
    pipeline::{JsonlObserver, ProgressObserver, SessionObserver, Simulation, SimulationConfig,
               SimulationResult},
    types::Grid,
};

#[derive(Debug, Serialize)]
struct SummaryFile {
    games: usize,
    height: usize,
    width: usize,
    mines: usize,
    seed: u64,
    results: SimulationResult,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("simulation_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Run a batch of games and report statistics")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 500)]
    pub games: usize,

    /// Board height
    #[arg(long, default_value_t = 8)]
    pub height: usize,

    /// Board width
    #[arg(long, default_value_t = 8)]
    pub width: usize,

    /// Number of mines
    #[arg(long, short = 'm', default_value_t = 8)]
    pub mines: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional file for JSONL per-game observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let grid = Grid::new(args.height, args.width)?;
    let config = SimulationConfig {
        games: args.games,
        grid,
        mines: args.mines,
        seed,
    };

    let mut observers: Vec<Box<dyn SessionObserver>> = Vec::new();
    if args.progress {
        observers.push(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        observers.push(Box::new(JsonlObserver::create(path)?));
    }

    let results = Simulation::new(config).run(&mut observers)?;

    output::print_section("Simulation results");
    output::print_stats_table(&[
        ("Games", results.games.to_string()),
        ("Wins", results.wins.to_string()),
        ("Losses", results.losses.to_string()),
        ("Win rate", format!("{:.1}%", results.win_rate * 100.0)),
        ("Average moves", format!("{:.1}", results.average_moves)),
        ("Seed", seed.to_string()),
    ]);

    if let Some(raw_path) = &args.summary {
        let path = sanitize_summary_path(raw_path);
        let summary = SummaryFile {
            games: args.games,
            height: args.height,
            width: args.width,
            mines: args.mines,
            seed,
            results,
        };
        let file = File::create(&path)?;
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
