//! Validated domain primitives: board cells and grid geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by (row, column).
///
/// Cells compare by value and hash by value, so they can live in set
/// containers. The `Ord` impl gives row-major ordering, which the move
/// policies use for deterministic selection.
///
/// # Examples
///
/// ```
/// use sapper::types::Cell;
///
/// let cell = Cell::new(2, 3);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.column(), 3);
/// assert_eq!(cell.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    column: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    ///
    /// Coordinates are not bounds-checked here; every grid-aware operation
    /// validates membership against its own [`Grid`] and reports
    /// [`crate::Error::CellOutOfBounds`] for foreign cells.
    pub const fn new(row: usize, column: usize) -> Self {
        Cell { row, column }
    }

    /// Get the row index.
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Get the column index.
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Cell::new(row, column)
    }
}

/// Finite board geometry: a `height x width` grid of cells.
///
/// `Grid` carries no game state. It answers bounds and neighborhood
/// queries for the board and the inference agent.
///
/// # Examples
///
/// ```
/// use sapper::types::{Cell, Grid};
///
/// let grid = Grid::new(3, 3)?;
/// assert_eq!(grid.len(), 9);
/// assert!(grid.contains(Cell::new(2, 2)));
/// assert!(!grid.contains(Cell::new(3, 0)));
/// assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 3);
/// # Ok::<(), sapper::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a grid, validating that both dimensions are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGrid`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> crate::Result<Self> {
        if height == 0 || width == 0 {
            return Err(crate::Error::InvalidGrid { height, width });
        }
        Ok(Grid { height, width })
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub const fn len(&self) -> usize {
        self.height * self.width
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a cell lies within the grid.
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.height && cell.column() < self.width
    }

    /// Validate that a cell lies within the grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOutOfBounds`] for cells outside the grid.
    pub fn ensure_contains(&self, cell: Cell) -> crate::Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(crate::Error::CellOutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// The 8-connected neighbors of a cell that lie within the grid.
    ///
    /// The cell itself is never included. Cells on edges and corners get
    /// the clipped neighborhood (5 and 3 cells respectively).
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(8);
        let row_start = cell.row().saturating_sub(1);
        let column_start = cell.column().saturating_sub(1);
        for row in row_start..=(cell.row() + 1).min(self.height - 1) {
            for column in column_start..=(cell.column() + 1).min(self.width - 1) {
                let candidate = Cell::new(row, column);
                if candidate != cell {
                    neighbors.push(candidate);
                }
            }
        }
        neighbors
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |column| Cell::new(row, column)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}
