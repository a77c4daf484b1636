//! Observer pattern for simulation runs
//!
//! Observers allow composable data collection during batch simulation
//! without coupling the runner to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::pipeline::session::{GameOutcome, GameRecord, MoveRecord};
use crate::pipeline::simulation::SimulationResult;

/// Observer for batch simulation events.
///
/// All methods default to no-ops, so implementors only override the
/// events they care about. The runner calls them in order:
/// `on_session_start` once, `on_game_complete` per game,
/// `on_session_end` once.
pub trait SessionObserver: Send {
    fn on_session_start(&mut self, _total_games: usize) -> crate::Result<()> {
        Ok(())
    }

    fn on_game_complete(&mut self, _game_num: usize, _record: &GameRecord) -> crate::Result<()> {
        Ok(())
    }

    fn on_session_end(&mut self, _result: &SimulationResult) -> crate::Result<()> {
        Ok(())
    }
}

/// Progress bar observer showing the running win/loss tally.
#[derive(Default)]
pub struct ProgressObserver {
    bar: Option<ProgressBar>,
    wins: usize,
    losses: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionObserver for ProgressObserver {
    fn on_session_start(&mut self, total_games: usize) -> crate::Result<()> {
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .map_err(|e| crate::Error::ProgressStyle {
                message: e.to_string(),
            })?
            .progress_chars("=>-");
        let bar = ProgressBar::new(total_games as u64);
        bar.set_style(style);
        self.bar = Some(bar);
        Ok(())
    }

    fn on_game_complete(&mut self, _game_num: usize, record: &GameRecord) -> crate::Result<()> {
        if record.is_won() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} won / {} lost", self.wins, self.losses));
            bar.inc(1);
        }
        Ok(())
    }

    fn on_session_end(&mut self, result: &SimulationResult) -> crate::Result<()> {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!(
                "{} won / {} lost ({:.1}% win rate)",
                result.wins,
                result.losses,
                result.win_rate * 100.0
            ));
        }
        Ok(())
    }
}

/// One JSONL line per finished game.
#[derive(Debug, Serialize)]
struct GameLine<'a> {
    game: usize,
    outcome: GameOutcome,
    total_moves: usize,
    moves: &'a [MoveRecord],
}

/// Writes a JSONL record for every finished game.
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create the observation log at `path`, truncating any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be created.
    pub fn create(path: &Path) -> crate::Result<Self> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create observation log {}", path.display()),
            source,
        })?;
        Ok(JsonlObserver {
            writer: BufWriter::new(file),
        })
    }
}

impl SessionObserver for JsonlObserver {
    fn on_game_complete(&mut self, game_num: usize, record: &GameRecord) -> crate::Result<()> {
        let line = GameLine {
            game: game_num,
            outcome: record.outcome,
            total_moves: record.moves.len(),
            moves: &record.moves,
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n").map_err(|source| crate::Error::Io {
            operation: "write observation log".to_string(),
            source,
        })?;
        Ok(())
    }

    fn on_session_end(&mut self, _result: &SimulationResult) -> crate::Result<()> {
        self.writer.flush().map_err(|source| crate::Error::Io {
            operation: "flush observation log".to_string(),
            source,
        })?;
        Ok(())
    }
}
