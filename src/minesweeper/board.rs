//! Ground-truth board state and the reveal boundary.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Cell, Grid};

/// A minesweeper board: grid geometry plus the hidden mine set.
///
/// The board is the oracle the game driver reveals cells against. The
/// inference agent never sees it directly; it only receives `(cell, count)`
/// observations produced by [`Board::adjacent_mines`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    mines: HashSet<Cell>,
    flagged: HashSet<Cell>,
}

impl Board {
    /// Create a board with randomly placed mines.
    ///
    /// Placement samples uniformly with rejection until `mines` distinct
    /// cells are mined, so every cell is equally likely to hold a mine.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TooManyMines`] if `mines` exceeds the number
    /// of cells in the grid.
    pub fn generate<R: Rng>(grid: Grid, mines: usize, rng: &mut R) -> crate::Result<Self> {
        if mines > grid.len() {
            return Err(crate::Error::TooManyMines {
                mines,
                cells: grid.len(),
            });
        }

        let mut placed = HashSet::with_capacity(mines);
        while placed.len() != mines {
            let row = rng.random_range(0..grid.height());
            let column = rng.random_range(0..grid.width());
            placed.insert(Cell::new(row, column));
        }

        Ok(Board {
            grid,
            mines: placed,
            flagged: HashSet::new(),
        })
    }

    /// Create a board with an explicit mine set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] if any mine lies outside
    /// the grid.
    pub fn with_mines(grid: Grid, mines: HashSet<Cell>) -> crate::Result<Self> {
        for &mine in &mines {
            grid.ensure_contains(mine)?;
        }
        Ok(Board {
            grid,
            mines,
            flagged: HashSet::new(),
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of mines on the board.
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Whether the given cell holds a mine.
    ///
    /// This is the test-harness and driver-side query; the inference agent
    /// never calls it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] for cells outside the grid.
    pub fn is_mine(&self, cell: Cell) -> crate::Result<bool> {
        self.grid.ensure_contains(cell)?;
        Ok(self.mines.contains(&cell))
    }

    /// Reveal a safe cell: the number of mines among its neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] for cells outside the grid
    /// and [`crate::Error::MineRevealed`] when the cell itself is mined; a
    /// mined cell has no adjacency count to give.
    pub fn adjacent_mines(&self, cell: Cell) -> crate::Result<usize> {
        self.grid.ensure_contains(cell)?;
        if self.mines.contains(&cell) {
            return Err(crate::Error::MineRevealed { cell });
        }
        Ok(self
            .grid
            .neighbors(cell)
            .into_iter()
            .filter(|neighbor| self.mines.contains(neighbor))
            .count())
    }

    /// Flag a cell as a suspected mine.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] for cells outside the grid.
    pub fn flag(&mut self, cell: Cell) -> crate::Result<()> {
        self.grid.ensure_contains(cell)?;
        self.flagged.insert(cell);
        Ok(())
    }

    pub fn flagged(&self) -> &HashSet<Cell> {
        &self.flagged
    }

    /// Whether every mine (and nothing else) has been flagged.
    pub fn is_won(&self) -> bool {
        self.flagged == self.mines
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn board_3x3_corner_mine() -> Board {
        let grid = Grid::new(3, 3).unwrap();
        Board::with_mines(grid, HashSet::from([Cell::new(2, 2)])).unwrap()
    }

    #[test]
    fn generate_places_exactly_the_requested_mines() {
        let grid = Grid::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::generate(grid, 5, &mut rng).unwrap();
        assert_eq!(board.mine_count(), 5);

        let mined = grid
            .cells()
            .filter(|&cell| board.is_mine(cell).unwrap())
            .count();
        assert_eq!(mined, 5);
    }

    #[test]
    fn generate_rejects_impossible_mine_counts() {
        let grid = Grid::new(2, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(Board::generate(grid, 5, &mut rng).is_err());
        assert!(Board::generate(grid, 4, &mut rng).is_ok());
    }

    #[test]
    fn adjacent_mines_counts_neighborhood() {
        let board = board_3x3_corner_mine();
        assert_eq!(board.adjacent_mines(Cell::new(0, 0)).unwrap(), 0);
        assert_eq!(board.adjacent_mines(Cell::new(1, 1)).unwrap(), 1);
        assert_eq!(board.adjacent_mines(Cell::new(2, 1)).unwrap(), 1);
    }

    #[test]
    fn adjacent_mines_refuses_mined_cells() {
        let board = board_3x3_corner_mine();
        assert!(matches!(
            board.adjacent_mines(Cell::new(2, 2)),
            Err(crate::Error::MineRevealed { .. })
        ));
    }

    #[test]
    fn out_of_bounds_cells_are_rejected() {
        let board = board_3x3_corner_mine();
        assert!(board.is_mine(Cell::new(3, 0)).is_err());
        assert!(board.adjacent_mines(Cell::new(0, 3)).is_err());
    }

    #[test]
    fn won_when_flags_match_mines_exactly() {
        let mut board = board_3x3_corner_mine();
        assert!(!board.is_won());

        board.flag(Cell::new(0, 0)).unwrap();
        board.flag(Cell::new(2, 2)).unwrap();
        assert!(!board.is_won(), "a spurious flag must not count as a win");

        let mut board = board_3x3_corner_mine();
        board.flag(Cell::new(2, 2)).unwrap();
        assert!(board.is_won());
    }
}
