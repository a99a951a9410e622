//! Agent port - anything that can choose the next position
//!
//! The arena drives games through this trait, so the search engine and the
//! baselines it is measured against are interchangeable.

use crate::{Result, tictactoe::BoardState};

/// Agent trait - unified interface for move selection
///
/// # Examples
///
/// ```no_run
/// use noughts::{ports::Agent, tictactoe::Board3};
///
/// fn opening<A: Agent<3>>(agent: &mut A) -> noughts::Result<Board3> {
///     agent.select(&Board3::new())
/// }
/// ```
pub trait Agent<const N: usize>: Send {
    /// Choose the position to move to from `position`.
    ///
    /// Agents play the side recorded in `position.to_move`. When no mark can
    /// be placed the returned position is the pass successor.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is rejected by the agent's checks.
    fn select(&mut self, position: &BoardState<N>) -> Result<BoardState<N>>;

    /// Get the agent's name.
    ///
    /// Used for identification in match summaries and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Deterministic agents can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
