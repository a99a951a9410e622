//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};

use crate::{
    search::{RootWindow, SearchConfig},
    tictactoe::Player,
};

/// Supported board sizes
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum BoardSize {
    #[default]
    #[value(name = "3")]
    Three,
    #[value(name = "4")]
    Four,
}

/// Agent types available to the `play` command
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum AgentKind {
    Engine,
    Random,
}

/// Search options shared by commands that run the engine
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Depth bound in plies below the root's children
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Seed each root successor's alpha with the best value found so far
    #[arg(long)]
    pub seeded_root: bool,

    /// JSON search configuration file (flags take precedence)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl SearchArgs {
    /// Load the configuration file if given, then apply flag overrides.
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_json_file(path)?,
            None => SearchConfig::default(),
        };
        if let Some(depth) = self.depth {
            config = config.with_max_depth(depth);
        }
        if self.seeded_root {
            config = config.with_root_window(RootWindow::Seeded);
        }
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Player::X),
        "o" | "second" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
