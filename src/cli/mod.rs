//! CLI infrastructure for the sapper toolkit
//!
//! This module provides the command-line interface for playing single
//! games and running batch simulations of the inference agent.

pub mod commands;
pub mod output;
