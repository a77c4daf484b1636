//! Single-game driver loop.

use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::minesweeper::{Board, SapperAgent};
use crate::types::Cell;

/// Which selection policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePolicy {
    /// The cell was confirmed safe before it was chosen.
    Safe,
    /// No safe move was known; the cell was chosen uniformly at random.
    Random,
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost { mine: Cell },
}

/// One move of a game.
///
/// `adjacent_mines` is `None` exactly when the move revealed a mine; a
/// mined cell reports no adjacency count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub cell: Cell,
    pub policy: MovePolicy,
    pub adjacent_mines: Option<usize>,
}

/// Trace of a completed game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    pub fn is_won(&self) -> bool {
        matches!(self.outcome, GameOutcome::Won)
    }
}

/// Drives one game: the agent proposes moves, the board reveals them, and
/// every successful reveal feeds back into the knowledge base.
///
/// The session owns its RNG so that a given `(board, seed)` pair replays
/// the exact same game.
pub struct GameSession {
    board: Board,
    agent: SapperAgent,
    revealed: HashMap<Cell, usize>,
    rng: StdRng,
}

impl GameSession {
    pub fn new(board: Board, seed: u64) -> Self {
        let agent = SapperAgent::new(board.grid());
        GameSession {
            board,
            agent,
            revealed: HashMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn agent(&self) -> &SapperAgent {
        &self.agent
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells revealed so far, with the adjacency count each reported.
    pub fn revealed(&self) -> &HashMap<Cell, usize> {
        &self.revealed
    }

    /// Whether the game is over in the agent's favor: every non-mine cell
    /// revealed, or every mine flagged.
    pub fn is_complete(&self) -> bool {
        let safe_cells = self.board.grid().len() - self.board.mine_count();
        self.revealed.len() == safe_cells || self.board.is_won()
    }

    /// Play one move: prefer a known-safe cell, fall back to a random one.
    ///
    /// Returns `Ok(None)` when no move is available, which only happens
    /// once every cell is either revealed or a confirmed mine. A `Some`
    /// record with `adjacent_mines: None` means the move hit a mine and
    /// the game is lost.
    ///
    /// # Errors
    ///
    /// Propagates board and knowledge-base errors; none occur for a
    /// consistent board.
    pub fn step(&mut self) -> crate::Result<Option<MoveRecord>> {
        let (cell, policy) = match self.agent.safe_move() {
            Some(cell) => (cell, MovePolicy::Safe),
            None => match self.agent.random_move(&mut self.rng) {
                Some(cell) => (cell, MovePolicy::Random),
                None => return Ok(None),
            },
        };

        if self.board.is_mine(cell)? {
            return Ok(Some(MoveRecord {
                cell,
                policy,
                adjacent_mines: None,
            }));
        }

        let count = self.board.adjacent_mines(cell)?;
        self.revealed.insert(cell, count);
        self.agent.add_observation(cell, count)?;
        for &mine in self.agent.confirmed_mines() {
            self.board.flag(mine)?;
        }

        Ok(Some(MoveRecord {
            cell,
            policy,
            adjacent_mines: Some(count),
        }))
    }

    /// Play the game to completion.
    ///
    /// # Errors
    ///
    /// Propagates board and knowledge-base errors; none occur for a
    /// consistent board.
    pub fn run(&mut self) -> crate::Result<GameRecord> {
        let mut moves = Vec::new();
        let outcome = loop {
            let Some(record) = self.step()? else {
                // Every cell is revealed or a confirmed mine, so the
                // board is fully deduced.
                break GameOutcome::Won;
            };
            moves.push(record);
            if record.adjacent_mines.is_none() {
                break GameOutcome::Lost { mine: record.cell };
            }
            if self.is_complete() {
                break GameOutcome::Won;
            }
        };
        Ok(GameRecord { outcome, moves })
    }
}
