//! Depth-limited alpha-beta search for square-grid Tic-Tac-Toe
//!
//! This crate provides:
//! - `N`x`N` board model with parsing, validation and game history
//! - Line-streak heuristic used for leaf scoring and move ordering
//! - Alpha-beta searcher and a root move-selection engine
//! - Ports for move generation and agents, with the standard rules adapter
//! - Arena for matches between the engine and baseline agents

pub mod adapters;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
