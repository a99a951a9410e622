//! Move generation port - the successor contract consumed by the search

use crate::tictactoe::BoardState;

/// Source of successor positions for the search.
///
/// # Contract
///
/// * [`successors`](MoveGenerator::successors) returns every legal successor
///   of a position that is still in play, each exactly one ply ahead (one
///   empty cell now holds the mark of the player to move, turn handed over).
/// * It returns an empty list for a decided position, or when the side to
///   move has no legal mark, in which case the mover must play
///   [`pass`](MoveGenerator::pass).
///
/// The engine checks the root's successors against this contract before
/// searching. Deeper nodes are trusted.
pub trait MoveGenerator<const N: usize> {
    /// Every legal one-ply successor, in a deterministic order.
    fn successors(&self, position: &BoardState<N>) -> Vec<BoardState<N>>;

    /// The no-op successor played when no mark can be placed.
    fn pass(&self, position: &BoardState<N>) -> BoardState<N> {
        position.pass()
    }
}

impl<const N: usize, G: MoveGenerator<N> + ?Sized> MoveGenerator<N> for &G {
    fn successors(&self, position: &BoardState<N>) -> Vec<BoardState<N>> {
        (**self).successors(position)
    }

    fn pass(&self, position: &BoardState<N>) -> BoardState<N> {
        (**self).pass(position)
    }
}
