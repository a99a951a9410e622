//! Board state validation logic
//!
//! These checks guard the search boundary: a position handed to the engine
//! must be reachable under the rules, and every successor produced by a move
//! generator must be exactly one ply ahead of its parent.

use super::{
    board::{BoardState, Cell, Player},
    lines::LineAnalyzer,
};

impl<const N: usize> BoardState<N> {
    /// Check if the board state is reachable under the rules
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the board state, explaining the first violated rule.
    ///
    /// Either player may have opened, so the piece counts may differ by one
    /// in either direction, but the player to move must be the one with
    /// fewer (or equal) marks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] describing the violation.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let invalid = |reason: String| crate::Error::InvalidPosition {
            position: self.encode(),
            reason,
        };

        let count = self.count_pieces();
        let diff = count.x as isize - count.o as isize;

        if diff.abs() > 1 {
            return Err(invalid(format!(
                "piece counts must differ by at most 1 (X={}, O={})",
                count.x, count.o
            )));
        }

        match (self.to_move, diff) {
            (Player::X, 1) => {
                return Err(invalid(
                    "X has an extra mark, so it must be O's turn".to_string(),
                ));
            }
            (Player::O, -1) => {
                return Err(invalid(
                    "O has an extra mark, so it must be X's turn".to_string(),
                ));
            }
            _ => {}
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(invalid("both players cannot have winning lines".to_string()));
        }

        for (player, won) in [(Player::X, x_wins), (Player::O, o_wins)] {
            if !won {
                continue;
            }
            // The winner moved last, so the turn belongs to the opponent.
            if self.to_move == player {
                return Err(invalid(format!(
                    "{player} has a winning line but is recorded as the player to move"
                )));
            }
            if !self.winning_lines_share_cell(player) {
                return Err(invalid(format!(
                    "{player} has winning lines that no single mark could complete together"
                )));
            }
        }

        Ok(())
    }

    /// Check if all winning lines for a player share at least one cell.
    ///
    /// Several lines can only be completed by the same final mark, so lines
    /// without a common cell indicate play continued after a win.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let winning_lines = LineAnalyzer::winning_lines(&self.cells, player);

        if winning_lines.len() < 2 {
            return true;
        }

        winning_lines[0]
            .iter()
            .any(|pos| winning_lines[1..].iter().all(|line| line.contains(pos)))
    }

    /// Check that `next` is exactly one ply ahead of `self`.
    ///
    /// One previously empty cell must hold the mark of the player to move,
    /// every other cell must be unchanged, and the turn must pass over.
    pub fn is_one_ply_successor(&self, next: &BoardState<N>) -> bool {
        if next.to_move != self.to_move.opponent() {
            return false;
        }

        match next.changed_cells(self).as_slice() {
            &[(row, col)] => {
                self.cells[row][col] == Cell::Empty
                    && next.cells[row][col] == self.to_move.to_cell()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tictactoe::{Board3, Board4};

    use super::*;

    #[test]
    fn test_empty_boards_are_valid() {
        assert!(Board3::new().is_valid());
        assert!(Board3::new_with_player(Player::O).is_valid());
        assert!(Board4::new().is_valid());
    }

    #[test]
    fn test_rejects_large_piece_difference() {
        let state = Board3::from_string("XXX......_O").unwrap();
        let err = state.validate().unwrap_err();
        assert!(err.to_string().contains("differ by at most 1"));
    }

    #[test]
    fn test_rejects_turn_mismatch() {
        let state = Board3::from_string("X........_X").unwrap();
        assert!(!state.is_valid());

        let state = Board3::from_string("O........_O").unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn test_rejects_winner_to_move() {
        // X completed the top row, so O must be on move.
        let state = Board3::from_string("XXXOO.O.._X").unwrap();
        assert!(!state.is_valid());
        assert!(Board3::from_string("XXXOO.O.._O").unwrap().is_valid());
    }

    #[test]
    fn test_double_line_requires_shared_cell() {
        // X X X
        // X O O
        // X O O
        let shared = Board3::from_string("XXXXOOXOO_O").unwrap();
        assert!(shared.is_valid());

        // X X X
        // O O .
        // X X X
        let disjoint = Board3::from_string("XXXOO.XXX_O").unwrap();
        assert!(!disjoint.winning_lines_share_cell(Player::X));
        assert!(!disjoint.is_valid());
    }

    #[test]
    fn test_one_ply_successor() {
        let state = Board3::from_string("X...O....").unwrap();
        let next = state.make_move(2, 2).unwrap();
        assert!(state.is_one_ply_successor(&next));

        // Two marks placed at once
        let jump = next.make_move(0, 1).unwrap();
        assert!(!state.is_one_ply_successor(&jump));

        // Pass is not a placement
        assert!(!state.is_one_ply_successor(&state.pass()));

        // Wrong mark placed
        let mut wrong_mark = state;
        wrong_mark.cells[2][2] = Cell::O;
        wrong_mark.to_move = Player::O;
        assert!(!state.is_one_ply_successor(&wrong_mark));

        // Turn not handed over
        let mut stale_turn = next;
        stale_turn.to_move = Player::X;
        assert!(!state.is_one_ply_successor(&stale_turn));
    }
}
