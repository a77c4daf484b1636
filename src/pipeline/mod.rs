//! Game driver pipeline
//!
//! This module provides the sequential driver that sits between the board
//! and the inference agent:
//! - running a single game to completion
//! - running seeded batches of games
//! - recording observations through composable observers

pub mod observers;
pub mod session;
pub mod simulation;

pub use observers::{JsonlObserver, ProgressObserver, SessionObserver};
pub use session::{GameOutcome, GameRecord, GameSession, MovePolicy, MoveRecord};
pub use simulation::{Simulation, SimulationConfig, SimulationResult};
