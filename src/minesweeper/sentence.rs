//! Logical sentences over board cells.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Cell;

/// A logical statement about the board: exactly `count` of `cells` are mines.
///
/// A sentence only ever talks about cells whose status is still unknown.
/// As mine and safe facts arrive, cells are removed in place and the count
/// adjusted, so the invariant `count <= |cells|` holds whenever the inputs
/// were consistent. A sentence whose cell set has emptied carries no
/// information and is discarded by its owner.
///
/// Two sentences are equal iff their cell sets and counts are equal, which
/// is what knowledge-base deduplication keys on.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use sapper::minesweeper::Sentence;
/// use sapper::types::Cell;
///
/// let sentence = Sentence::new(HashSet::from([Cell::new(0, 0), Cell::new(0, 1)]), 2);
/// assert_eq!(sentence.known_mines().len(), 2);
/// assert!(sentence.known_safes().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    cells: HashSet<Cell>,
    count: usize,
}

impl Sentence {
    pub fn new(cells: HashSet<Cell>, count: usize) -> Self {
        debug_assert!(
            count <= cells.len(),
            "sentence claims {count} mines among {} cells",
            cells.len()
        );
        Sentence { cells, count }
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells this sentence proves to be mines.
    ///
    /// The full cell set when the count equals the set size (every
    /// remaining cell must be a mine), otherwise empty. An empty result
    /// means "nothing new", never "proven safe".
    pub fn known_mines(&self) -> HashSet<Cell> {
        if !self.cells.is_empty() && self.count == self.cells.len() {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// Cells this sentence proves to be safe.
    ///
    /// The full cell set when the count is zero, otherwise empty.
    pub fn known_safes(&self) -> HashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// Incorporate the fact that `cell` is a mine.
    ///
    /// If the cell is a member it is removed and the count drops by one,
    /// since the mine it represents is now accounted for. Non-members are
    /// a no-op.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count = self.count.saturating_sub(1);
        }
    }

    /// Incorporate the fact that `cell` is safe.
    ///
    /// If the cell is a member it is removed; the count is unchanged
    /// because the removed cell contributed no mine.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Whether this sentence's cell set is a proper subset of `other`'s.
    pub fn is_proper_subset_of(&self, other: &Sentence) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    /// Subtract a subset sentence from this one.
    ///
    /// If `other` asserts "exactly `a` of these cells are mines" and its
    /// cells all belong to this sentence, then the cells outside `other`
    /// account for exactly `count - a` mines. Callers must check
    /// [`Sentence::is_proper_subset_of`] first.
    pub fn subtract(&mut self, other: &Sentence) {
        debug_assert!(other.is_proper_subset_of(self));
        for cell in &other.cells {
            self.cells.remove(cell);
        }
        self.count = self.count.saturating_sub(other.count);
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort();
        write!(f, "{{")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}
