//! Subcommand implementations

pub mod best_move;
pub mod evaluate;
pub mod play;
pub mod show_config;
