//! Line enumeration and win detection for square boards
//!
//! An `N x N` board has `2N + 2` full-length lines: `N` rows, `N` columns and
//! the two diagonals. Lines are enumerated in that order and never allocated;
//! callers iterate [`lines`] or address a single line with [`line`].

use std::{array, fmt};

use super::{Cell, Player};

/// A full-length line as `(row, col)` coordinates
pub type Line<const N: usize> = [(usize, usize); N];

/// Which family a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(row) => write!(f, "row {row}"),
            LineKind::Column(col) => write!(f, "column {col}"),
            LineKind::Diagonal => write!(f, "diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Number of lines on an `N x N` board
pub const fn line_count<const N: usize>() -> usize {
    2 * N + 2
}

/// Classify the line at `index` (rows, then columns, then diagonals)
pub fn line_kind<const N: usize>(index: usize) -> LineKind {
    match index {
        i if i < N => LineKind::Row(i),
        i if i < 2 * N => LineKind::Column(i - N),
        i if i == 2 * N => LineKind::Diagonal,
        _ => LineKind::AntiDiagonal,
    }
}

/// Coordinates of the line at `index`
pub fn line<const N: usize>(index: usize) -> Line<N> {
    match line_kind::<N>(index) {
        LineKind::Row(row) => array::from_fn(|col| (row, col)),
        LineKind::Column(col) => array::from_fn(|row| (row, col)),
        LineKind::Diagonal => array::from_fn(|k| (k, k)),
        LineKind::AntiDiagonal => array::from_fn(|k| (k, N - 1 - k)),
    }
}

/// Iterate every line of an `N x N` board
pub fn lines<const N: usize>() -> impl Iterator<Item = Line<N>> {
    (0..line_count::<N>()).map(line::<N>)
}

/// Utility for analyzing lines of a board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player owns every cell of some line
    pub fn has_won<const N: usize>(cells: &[[Cell; N]; N], player: Player) -> bool {
        let target = player.to_cell();
        lines::<N>().any(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
    }

    /// All lines fully owned by the player
    pub fn winning_lines<const N: usize>(cells: &[[Cell; N]; N], player: Player) -> Vec<Line<N>> {
        let target = player.to_cell();
        lines::<N>()
            .filter(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_enumeration_3x3() {
        let all: Vec<Line<3>> = lines::<3>().collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], [(0, 0), (0, 1), (0, 2)]);
        assert_eq!(all[3], [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(all[6], [(0, 0), (1, 1), (2, 2)]);
        assert_eq!(all[7], [(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_line_kinds_4x4() {
        assert_eq!(line_count::<4>(), 10);
        assert_eq!(line_kind::<4>(3), LineKind::Row(3));
        assert_eq!(line_kind::<4>(4), LineKind::Column(0));
        assert_eq!(line_kind::<4>(8), LineKind::Diagonal);
        assert_eq!(line_kind::<4>(9), LineKind::AntiDiagonal);
        assert_eq!(line::<4>(9), [(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0] = [Cell::X; 3];

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_anti_diagonal_4x4() {
        let mut cells = [[Cell::Empty; 4]; 4];
        for k in 0..4 {
            cells[k][3 - k] = Cell::O;
        }

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::winning_lines(&cells, Player::O).len(), 1);
    }
}
