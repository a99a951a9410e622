//! Square-grid Tic-Tac-Toe: boards, lines, validation and game history

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board3, Board4, BoardState, Cell, GameStatus, Player};
pub use game::{Game, GameOutcome};
pub use lines::{Line, LineAnalyzer, LineKind, line, line_count, line_kind, lines};
