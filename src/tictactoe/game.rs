//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, GameStatus, Player};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished position, `None` while play continues
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won(player) => Some(GameOutcome::Win(player)),
            GameStatus::Draw => Some(GameOutcome::Draw),
            GameStatus::InProgress => None,
        }
    }
}

/// A game as the sequence of positions it passed through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game<const N: usize> {
    pub initial: BoardState<N>,
    pub positions: Vec<BoardState<N>>,
    pub outcome: Option<GameOutcome>,
}

impl<const N: usize> Game<N> {
    /// Start a game from the given position
    pub fn new(initial: BoardState<N>) -> Self {
        Game {
            initial,
            positions: Vec::new(),
            outcome: GameOutcome::from_status(initial.status()),
        }
    }

    /// The position currently on the board
    pub fn current(&self) -> BoardState<N> {
        self.positions.last().copied().unwrap_or(self.initial)
    }

    /// Number of plies played, passes included
    pub fn plies(&self) -> usize {
        self.positions.len()
    }

    /// Record the next position.
    ///
    /// The position must be a one-ply successor of the current one or its
    /// pass successor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is decided and
    /// [`crate::Error::IllegalSuccessor`] for any other position.
    pub fn advance(&mut self, next: BoardState<N>) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current();
        if !current.is_one_ply_successor(&next) && next != current.pass() {
            return Err(crate::Error::IllegalSuccessor {
                position: current.encode(),
                successor: next.encode(),
            });
        }

        self.positions.push(next);
        self.outcome = GameOutcome::from_status(next.status());
        Ok(())
    }
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Self::new(BoardState::new())
    }
}
