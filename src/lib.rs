//! Minesweeper knowledge-base inference agent
//!
//! This crate provides:
//! - A ground-truth board with random mine placement and the reveal boundary
//! - A logical sentence model ("exactly N of these cells are mines")
//! - A knowledge-base agent that saturates its deductions after every
//!   observation and selects safe moves with a random fallback
//! - A sequential game driver with composable observers
//! - A CLI for single games and batch simulations

pub mod cli;
pub mod error;
pub mod minesweeper;
pub mod pipeline;
pub mod types;

pub use error::{Error, Result};
pub use minesweeper::{Board, SapperAgent, Sentence};
pub use pipeline::{
    GameOutcome, GameRecord, GameSession, JsonlObserver, MovePolicy, MoveRecord, ProgressObserver,
    SessionObserver, Simulation, SimulationConfig, SimulationResult,
};
pub use types::{Cell, Grid};
