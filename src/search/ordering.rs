//! Heuristic move ordering

use super::evaluate::evaluate;
use crate::tictactoe::{BoardState, Player};

/// A successor paired with its heuristic score, used only for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<const N: usize> {
    pub position: BoardState<N>,
    pub score: i32,
}

/// Order in which scored candidates are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lowest score first (minimizer to move)
    Ascending,
    /// Highest score first (maximizer to move)
    Descending,
}

/// Score every successor for `maximizer` and sort by score.
///
/// Sorting is stable: successors with equal scores keep the order the move
/// generator produced them in.
pub fn order_successors<const N: usize>(
    successors: Vec<BoardState<N>>,
    maximizer: Player,
    direction: SortDirection,
) -> Vec<ScoredCandidate<N>> {
    let mut scored: Vec<ScoredCandidate<N>> = successors
        .into_iter()
        .map(|position| ScoredCandidate {
            score: evaluate(&position, maximizer),
            position,
        })
        .collect();

    match direction {
        SortDirection::Ascending => scored.sort_by_key(|candidate| candidate.score),
        SortDirection::Descending => scored.sort_by(|a, b| b.score.cmp(&a.score)),
    }
    scored
}
