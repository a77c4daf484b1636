//! Knowledge-base inference agent.
//!
//! The agent accumulates [`Sentence`]s from board observations and closes
//! the knowledge base under two deduction rules after every observation:
//!
//! - resolution: a sentence whose count equals its cell-set size proves
//!   mines, a sentence with count zero proves safes;
//! - subset inference: a sentence that is a proper subset of another
//!   splits the larger one into its difference.
//!
//! Both rules strictly shrink the knowledge base, so alternating them
//! reaches a fixed point.

use std::collections::HashSet;

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::minesweeper::Sentence;
use crate::types::{Cell, Grid};

/// Minesweeper knowledge base and move selector.
///
/// The agent exclusively owns its sentences. All mutation happens through
/// [`SapperAgent::add_observation`] and the public fact-seeding methods
/// [`SapperAgent::mark_mine`] and [`SapperAgent::mark_safe`]; the move
/// policies never touch state.
#[derive(Debug, Clone)]
pub struct SapperAgent {
    grid: Grid,
    moves: HashSet<Cell>,
    mines: HashSet<Cell>,
    safes: HashSet<Cell>,
    knowledge: Vec<Sentence>,
}

impl SapperAgent {
    /// Create an agent with no knowledge about the given grid.
    pub fn new(grid: Grid) -> Self {
        SapperAgent {
            grid,
            moves: HashSet::new(),
            mines: HashSet::new(),
            safes: HashSet::new(),
            knowledge: Vec::new(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Cells the agent has observed (moves made).
    pub fn moves(&self) -> &HashSet<Cell> {
        &self.moves
    }

    /// Cells confirmed to be mines.
    pub fn confirmed_mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    /// Cells confirmed to be safe.
    pub fn confirmed_safes(&self) -> &HashSet<Cell> {
        &self.safes
    }

    /// The active sentences, in insertion order.
    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    /// Record that a revealed cell reported `count` adjacent mines, then
    /// run inference to saturation.
    ///
    /// Observing the same cell twice re-derives knowledge the base already
    /// holds, which is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] for cells outside the
    /// grid, [`crate::Error::CountOutOfRange`] when `count` exceeds the
    /// cell's neighborhood size, and [`crate::Error::ContradictoryFact`]
    /// when the cell is already confirmed a mine; an observation asserts
    /// the observed cell is safe.
    pub fn add_observation(&mut self, cell: Cell, count: usize) -> crate::Result<()> {
        self.grid.ensure_contains(cell)?;
        if self.mines.contains(&cell) {
            return Err(crate::Error::ContradictoryFact {
                cell,
                existing: "mine",
                requested: "safe",
            });
        }
        let raw_neighbors = self.grid.neighbors(cell);
        if count > raw_neighbors.len() {
            return Err(crate::Error::CountOutOfRange {
                cell,
                count,
                neighbors: raw_neighbors.len(),
            });
        }

        self.moves.insert(cell);
        self.assert_safe(cell);

        // Confirmed mines among the neighbors already account for part of
        // the count; confirmed safes contribute nothing. Only cells of
        // unknown status belong in the new sentence.
        let mut adjusted = count;
        let mut unknown = HashSet::new();
        for neighbor in raw_neighbors {
            if self.mines.contains(&neighbor) {
                adjusted = adjusted.saturating_sub(1);
            } else if !self.safes.contains(&neighbor) {
                unknown.insert(neighbor);
            }
        }
        if !unknown.is_empty() {
            self.knowledge.push(Sentence::new(unknown, adjusted));
        }

        self.saturate();
        Ok(())
    }

    /// Confirm a cell as a mine and propagate into every stored sentence.
    ///
    /// Exposed for pre-seeded facts; resolution uses the same propagation
    /// internally.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] for cells outside the
    /// grid, and [`crate::Error::ContradictoryFact`] if the cell is
    /// already confirmed safe.
    pub fn mark_mine(&mut self, cell: Cell) -> crate::Result<()> {
        self.grid.ensure_contains(cell)?;
        if self.safes.contains(&cell) {
            return Err(crate::Error::ContradictoryFact {
                cell,
                existing: "safe",
                requested: "mine",
            });
        }
        self.assert_mine(cell);
        Ok(())
    }

    /// Confirm a cell as safe and propagate into every stored sentence.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] for cells outside the
    /// grid, and [`crate::Error::ContradictoryFact`] if the cell is
    /// already confirmed a mine.
    pub fn mark_safe(&mut self, cell: Cell) -> crate::Result<()> {
        self.grid.ensure_contains(cell)?;
        if self.mines.contains(&cell) {
            return Err(crate::Error::ContradictoryFact {
                cell,
                existing: "mine",
                requested: "safe",
            });
        }
        self.assert_safe(cell);
        Ok(())
    }

    /// A confirmed-safe cell that has not been observed yet, if any.
    ///
    /// Picks the row-major minimum so that seeded runs reproduce. Returns
    /// `None` when no known-safe move exists; callers fall back to
    /// [`SapperAgent::random_move`].
    pub fn safe_move(&self) -> Option<Cell> {
        self.safes.difference(&self.moves).min().copied()
    }

    /// A uniformly random cell that is neither observed nor a confirmed
    /// mine, or `None` when the board is exhausted.
    ///
    /// Candidates are collected in row-major order before sampling, so a
    /// seeded RNG reproduces the choice.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let candidates: Vec<Cell> = self
            .grid
            .cells()
            .filter(|cell| !self.moves.contains(cell) && !self.mines.contains(cell))
            .collect();
        candidates.choose(rng).copied()
    }

    fn assert_mine(&mut self, cell: Cell) {
        if self.mines.insert(cell) {
            for sentence in &mut self.knowledge {
                sentence.mark_mine(cell);
            }
        }
    }

    fn assert_safe(&mut self, cell: Cell) {
        if self.safes.insert(cell) {
            for sentence in &mut self.knowledge {
                sentence.mark_safe(cell);
            }
        }
    }

    /// Alternate resolution and subset passes until a full iteration
    /// leaves the knowledge base unchanged.
    ///
    /// Terminates because every effective pass removes a sentence or
    /// shrinks a cell set over a finite universe of cells.
    fn saturate(&mut self) {
        loop {
            let resolved = self.resolution_pass();
            let reduced = self.subset_pass();
            if !resolved && !reduced {
                break;
            }
        }
    }

    /// Drain resolvable sentences and apply the facts they prove.
    ///
    /// Fact propagation cascades into the surviving sentences, which may
    /// make more of them resolvable; the saturation loop picks those up.
    fn resolution_pass(&mut self) -> bool {
        let mut proven_mines = HashSet::new();
        let mut proven_safes = HashSet::new();
        let mut remaining = Vec::with_capacity(self.knowledge.len());
        let mut changed = false;

        for sentence in std::mem::take(&mut self.knowledge) {
            if sentence.is_empty() {
                changed = true;
                continue;
            }
            let mines = sentence.known_mines();
            if !mines.is_empty() {
                proven_mines.extend(mines);
                changed = true;
                continue;
            }
            let safes = sentence.known_safes();
            if !safes.is_empty() {
                proven_safes.extend(safes);
                changed = true;
                continue;
            }
            remaining.push(sentence);
        }
        self.knowledge = remaining;

        for cell in proven_mines {
            self.assert_mine(cell);
        }
        for cell in proven_safes {
            self.assert_safe(cell);
        }
        changed
    }

    /// Reduce every sentence by each proper-subset sentence in the base.
    ///
    /// The pass reads a snapshot and writes a fresh collection, so the
    /// outcome does not depend on iteration order. Subset checks run
    /// against the sentence's current (already reduced) cell set, which
    /// keeps overlapping subsets from being subtracted twice. Sentences
    /// that end up equal carry no extra information and are dropped.
    fn subset_pass(&mut self) -> bool {
        let snapshot = self.knowledge.clone();
        let mut next: Vec<Sentence> = Vec::with_capacity(snapshot.len());
        let mut changed = false;

        for (i, sentence) in snapshot.iter().enumerate() {
            let mut reduced = sentence.clone();
            for (j, other) in snapshot.iter().enumerate() {
                if i != j && other.is_proper_subset_of(&reduced) {
                    reduced.subtract(other);
                    changed = true;
                }
            }
            if reduced.is_empty() || next.contains(&reduced) {
                changed = true;
                continue;
            }
            next.push(reduced);
        }
        self.knowledge = next;
        changed
    }
}
