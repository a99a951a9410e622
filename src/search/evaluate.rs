//! Static evaluation of a position from the maximizing player's side
//!
//! Every line (rows, columns, both diagonals) earns `10^(s - 1)` points for a
//! streak of `s` maximizer marks, and nothing if the minimizer holds any cell
//! of it. The exponential weighting makes one line closer to completion
//! outrank any number of lines with fewer marks, which is what lets the same
//! score drive both depth-limit leaves and move ordering.
//!
//! The score only ever rewards the maximizer. The minimizer's progress is
//! never penalized; the search serves the minimizer by sorting the same
//! score in the opposite direction.

use crate::tictactoe::{BoardState, Cell, Line, LineKind, Player, line_kind, lines};

/// Streak of one line: 0 if the minimizer holds any of its cells, otherwise
/// the number of maximizer marks on it.
pub fn line_streak<const N: usize>(
    position: &BoardState<N>,
    line: &Line<N>,
    maximizer: Player,
) -> u32 {
    let own = maximizer.to_cell();
    let mut streak = 0;
    for &(row, col) in line {
        match position.cell(row, col) {
            Cell::Empty => {}
            cell if cell == own => streak += 1,
            _ => return 0,
        }
    }
    streak
}

/// Points earned by a streak: `10^(s - 1)`, or 0 for an empty streak
pub fn streak_weight(streak: u32) -> i32 {
    match streak {
        0 => 0,
        s => 10_i32.saturating_pow(s - 1),
    }
}

/// Heuristic value of `position` for `maximizer`.
///
/// # Examples
///
/// ```
/// use noughts::{search::evaluate, tictactoe::{Board3, Player}};
///
/// assert_eq!(evaluate(&Board3::new(), Player::X), 0);
///
/// // Centre mark: its row, column and both diagonals score 1 each.
/// let centre = Board3::from_string("....X....").unwrap();
/// assert_eq!(evaluate(&centre, Player::X), 4);
/// ```
pub fn evaluate<const N: usize>(position: &BoardState<N>, maximizer: Player) -> i32 {
    lines::<N>()
        .map(|line| streak_weight(line_streak(position, &line, maximizer)))
        .fold(0, i32::saturating_add)
}

/// One line's share of [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScore {
    pub kind: LineKind,
    pub streak: u32,
    pub weight: i32,
}

/// Per-line breakdown of [`evaluate`], in line enumeration order
pub fn line_scores<const N: usize>(position: &BoardState<N>, maximizer: Player) -> Vec<LineScore> {
    lines::<N>()
        .enumerate()
        .map(|(index, line)| {
            let streak = line_streak(position, &line, maximizer);
            LineScore {
                kind: line_kind::<N>(index),
                streak,
                weight: streak_weight(streak),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board3, Board4};

    #[test]
    fn test_streak_weights() {
        assert_eq!(streak_weight(0), 0);
        assert_eq!(streak_weight(1), 1);
        assert_eq!(streak_weight(2), 10);
        assert_eq!(streak_weight(3), 100);
        assert_eq!(streak_weight(4), 1000);
        assert_eq!(streak_weight(40), i32::MAX);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate(&Board3::new(), Player::X), 0);
        assert_eq!(evaluate(&Board4::new(), Player::O), 0);
    }

    #[test]
    fn test_corner_mark() {
        // Row 0, column 0 and the diagonal
        let board = Board3::from_string("X........").unwrap();
        assert_eq!(evaluate(&board, Player::X), 3);
        assert_eq!(evaluate(&board, Player::O), 0);
    }

    #[test]
    fn test_contested_line_scores_nothing() {
        // X X O
        // . . .
        // . . .
        let board = Board3::from_string("XXO......").unwrap();
        let scores = line_scores(&board, Player::X);

        assert_eq!(scores[0].kind, LineKind::Row(0));
        assert_eq!(scores[0].streak, 0);
        assert_eq!(scores[0].weight, 0);
        // Columns 0 and 1 and the diagonal still count.
        assert_eq!(evaluate(&board, Player::X), 3);
    }

    #[test]
    fn test_minimizer_progress_is_not_penalized() {
        let quiet = Board3::from_string(".X......._O").unwrap();
        // O threatens the left column without touching X's lines.
        let threatened = Board3::from_string(".X.O..O.._X").unwrap();
        assert_eq!(evaluate(&quiet, Player::X), 2);
        assert_eq!(evaluate(&threatened, Player::X), 2);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let board = Board4::from_string("XX.. .O.. ..X. ....").unwrap();
        let total: i32 = line_scores(&board, Player::X).iter().map(|s| s.weight).sum();
        assert_eq!(total, evaluate(&board, Player::X));
        assert_eq!(line_scores(&board, Player::X).len(), 10);
    }
}
