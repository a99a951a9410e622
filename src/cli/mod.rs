//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line interface for choosing moves,
//! inspecting the heuristic, and running arena matches.

pub mod commands;
pub mod config;
pub mod output;
