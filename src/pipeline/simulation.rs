//! Batch simulation over many seeded games.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::minesweeper::Board;
use crate::pipeline::observers::SessionObserver;
use crate::pipeline::session::GameSession;
use crate::types::Grid;

/// Configuration for a batch of games.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub games: usize,
    pub grid: Grid,
    pub mines: usize,
    /// Base seed; each game derives its own seed from it.
    pub seed: u64,
}

/// Aggregate statistics for a completed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_moves: usize,
    pub win_rate: f64,
    pub average_moves: f64,
}

/// Runs independent games and aggregates their outcomes.
///
/// Every game gets a fresh board and a fresh agent; a game's seed is
/// derived from the base seed and the game index, so the whole batch is
/// reproducible from the configuration alone.
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Simulation { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the batch, notifying observers as games complete.
    ///
    /// # Errors
    ///
    /// Propagates board construction errors (e.g. more mines than cells)
    /// and observer I/O errors.
    pub fn run(&self, observers: &mut [Box<dyn SessionObserver>]) -> crate::Result<SimulationResult> {
        for observer in observers.iter_mut() {
            observer.on_session_start(self.config.games)?;
        }

        let mut wins = 0;
        let mut losses = 0;
        let mut total_moves = 0;

        for game_num in 0..self.config.games {
            let game_seed = self.config.seed.wrapping_add(game_num as u64);
            let mut rng = StdRng::seed_from_u64(game_seed);
            let board = Board::generate(self.config.grid, self.config.mines, &mut rng)?;

            let mut session = GameSession::new(board, game_seed);
            let record = session.run()?;

            if record.is_won() {
                wins += 1;
            } else {
                losses += 1;
            }
            total_moves += record.moves.len();

            for observer in observers.iter_mut() {
                observer.on_game_complete(game_num, &record)?;
            }
        }

        let games = self.config.games;
        let result = SimulationResult {
            games,
            wins,
            losses,
            total_moves,
            win_rate: if games > 0 {
                wins as f64 / games as f64
            } else {
                0.0
            },
            average_moves: if games > 0 {
                total_moves as f64 / games as f64
            } else {
                0.0
            },
        };

        for observer in observers.iter_mut() {
            observer.on_session_end(&result)?;
        }
        Ok(result)
    }
}
