//! Head-to-head matches between two agents

use std::{fs::File, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{BoardState, Game, GameOutcome, Player},
};

/// Match settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Player to move on the empty starting board
    pub first_player: Player,
    /// Base seed handed to the agents before the first game
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            seed: None,
        }
    }
}

/// Aggregate result of a match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub x_agent: String,
    pub o_agent: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    /// Create an empty summary for the two named agents
    pub fn new(x_agent: String, o_agent: String) -> Self {
        Self {
            x_agent,
            o_agent,
            ..Self::default()
        }
    }

    /// Record a finished game
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.games += 1;
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games > 0 {
            count as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Save summary to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create summary file {path:?}"),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from a JSON file
    pub fn read_json(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open summary file {path:?}"),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Plays games between two agents on an `N`x`N` board
#[derive(Debug, Clone, Default)]
pub struct Arena<const N: usize> {
    config: ArenaConfig,
}

impl<const N: usize> Arena<N> {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play one game from the empty board until it is decided.
    ///
    /// # Errors
    ///
    /// Propagates agent errors, and returns [`Error::IllegalSuccessor`] if an
    /// agent answers with a position that is neither one ply ahead nor a
    /// pass. Agents that keep passing end in [`Error::UnfinishedGame`].
    pub fn play_game(
        &self,
        x_agent: &mut dyn Agent<N>,
        o_agent: &mut dyn Agent<N>,
    ) -> Result<Game<N>> {
        let mut game = Game::new(BoardState::<N>::new_with_player(self.config.first_player));
        // Every real move fills a cell, so only passes could stretch a game
        // past this many plies.
        let ply_limit = 2 * BoardState::<N>::CELLS;

        while game.outcome.is_none() {
            if game.plies() >= ply_limit {
                return Err(Error::UnfinishedGame {
                    x_agent: x_agent.name().to_string(),
                    o_agent: o_agent.name().to_string(),
                    ply_limit,
                });
            }

            let current = game.current();
            let next = match current.to_move {
                Player::X => x_agent.select(&current)?,
                Player::O => o_agent.select(&current)?,
            };
            game.advance(next)?;
        }

        Ok(game)
    }

    /// Play `games` games and tally the outcomes.
    pub fn run(
        &self,
        x_agent: &mut dyn Agent<N>,
        o_agent: &mut dyn Agent<N>,
        games: usize,
    ) -> Result<MatchSummary> {
        self.run_with(x_agent, o_agent, games, |_, _| {})
    }

    /// Like [`Arena::run`], calling `on_game` with each game's index and
    /// record as it finishes.
    pub fn run_with<F>(
        &self,
        x_agent: &mut dyn Agent<N>,
        o_agent: &mut dyn Agent<N>,
        games: usize,
        mut on_game: F,
    ) -> Result<MatchSummary>
    where
        F: FnMut(usize, &Game<N>),
    {
        if let Some(seed) = self.config.seed {
            x_agent.set_rng_seed(seed)?;
            o_agent.set_rng_seed(seed.wrapping_add(1))?;
        }

        let mut summary =
            MatchSummary::new(x_agent.name().to_string(), o_agent.name().to_string());
        for index in 0..games {
            let game = self.play_game(x_agent, o_agent)?;
            if let Some(outcome) = game.outcome {
                info!(
                    "game {} of {}: {outcome:?} in {} plies, final {}",
                    index + 1,
                    games,
                    game.plies(),
                    game.current().encode()
                );
                summary.record(outcome);
            }
            on_game(index, &game);
        }

        Ok(summary)
    }
}
