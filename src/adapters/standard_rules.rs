//! Standard Tic-Tac-Toe move generation.

use crate::{ports::MoveGenerator, tictactoe::BoardState};

/// Move generator for the ordinary rules: the player to move may mark any
/// empty cell, and nothing may be marked once a line is complete.
///
/// Successors come out in row-major order of the marked cell.
///
/// # Examples
///
/// ```
/// use noughts::{adapters::StandardRules, ports::MoveGenerator, tictactoe::Board3};
///
/// let successors = StandardRules.successors(&Board3::new());
/// assert_eq!(successors.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl<const N: usize> MoveGenerator<N> for StandardRules {
    fn successors(&self, position: &BoardState<N>) -> Vec<BoardState<N>> {
        position.legal_successors()
    }
}
