//! Common test utilities for the noughts test suite.
//!
//! Board construction shorthands, a reference minimax without pruning, and
//! seeded random play-outs for property tests.

#![allow(dead_code)]

use noughts::{
    search::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, evaluate},
    tictactoe::{BoardState, GameStatus, Player},
};
use rand::{Rng, rngs::StdRng};

/// Parse a 3x3 board, panicking on malformed input.
pub fn board3(cells: &str) -> BoardState<3> {
    BoardState::<3>::from_string(cells).unwrap()
}

/// Parse a 4x4 board, panicking on malformed input.
pub fn board4(cells: &str) -> BoardState<4> {
    BoardState::<4>::from_string(cells).unwrap()
}

/// Plain depth-limited minimax with the same leaf rules as the engine's
/// searcher: heuristic past `max_depth`, sentinels at terminal positions.
pub fn reference_minimax<const N: usize>(
    position: &BoardState<N>,
    maximizer: Player,
    maximizing: bool,
    depth: usize,
    max_depth: usize,
) -> i32 {
    if depth > max_depth {
        return evaluate(position, maximizer);
    }

    let successors = position.legal_successors();
    if successors.is_empty() {
        return match position.status() {
            GameStatus::Won(player) if player == maximizer => WIN_SCORE,
            GameStatus::Won(_) => LOSS_SCORE,
            _ => DRAW_SCORE,
        };
    }

    let values = successors
        .iter()
        .map(|next| reference_minimax(next, maximizer, !maximizing, depth + 1, max_depth));
    if maximizing {
        values.max().unwrap_or(LOSS_SCORE)
    } else {
        values.min().unwrap_or(WIN_SCORE)
    }
}

/// Play up to `plies` random legal moves from the empty board.
pub fn random_position<const N: usize>(rng: &mut StdRng, plies: usize) -> BoardState<N> {
    let mut position = BoardState::<N>::new();
    for _ in 0..plies {
        let successors = position.legal_successors();
        if successors.is_empty() {
            break;
        }
        position = successors[rng.random_range(0..successors.len())];
    }
    position
}
