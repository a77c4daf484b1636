//! Error types for the sapper crate

use thiserror::Error;

use crate::types::Cell;

/// Main error type for the sapper crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid grid dimensions {height}x{width} (both must be non-zero)")]
    InvalidGrid { height: usize, width: usize },

    #[error("cell {cell} is out of bounds for a {height}x{width} grid")]
    CellOutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("cannot place {mines} mines on a grid with {cells} cells")]
    TooManyMines { mines: usize, cells: usize },

    #[error("adjacency count {count} exceeds the {neighbors} neighbors of cell {cell}")]
    CountOutOfRange {
        cell: Cell,
        count: usize,
        neighbors: usize,
    },

    #[error("cell {cell} is a mine and has no adjacency count")]
    MineRevealed { cell: Cell },

    #[error("cell {cell} is already confirmed {existing}, cannot mark it {requested}")]
    ContradictoryFact {
        cell: Cell,
        existing: &'static str,
        requested: &'static str,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressStyle { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
