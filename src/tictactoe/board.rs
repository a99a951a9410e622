//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lines::LineAnalyzer;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Terminal classification derived purely from the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Won(Player),
    Draw,
    InProgress,
}

/// Complete board state: an `N x N` grid and whose turn it is
///
/// Boards are plain values. Every operation that "changes" a board returns a
/// new one, so a position can be shared and compared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState<const N: usize> {
    pub cells: [[Cell; N]; N],
    pub to_move: Player,
}

/// Classic 3x3 board
pub type Board3 = BoardState<3>;

/// 4x4 board
pub type Board4 = BoardState<4>;

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

impl<const N: usize> BoardState<N> {
    /// Number of cells on the board
    pub const CELLS: usize = N * N;

    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board3, Player};
    ///
    /// let o_first = Board3::new_with_player(Player::O);
    /// assert_eq!(o_first.to_move, Player::O);
    ///
    /// let after_move = o_first.make_move(1, 1).unwrap();
    /// assert_eq!(after_move.to_move, Player::X);
    /// ```
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [[Cell::Empty; N]; N],
            to_move: first_player,
        }
    }

    /// Helper: Parse `N * N` cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns error if there are too few characters or any character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[[Cell; N]; N], crate::Error> {
        if chars.len() < Self::CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: Self::CELLS,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; N]; N];
        for (i, &c) in chars.iter().take(Self::CELLS).enumerate() {
            cells[i / N][i % N] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: context.to_string(),
                })?;
        }

        Ok(cells)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
        match player_str {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                label: context.to_string(),
            }),
        }
    }

    fn determine_turn_from_counts(count: PieceCount) -> Result<Player, crate::Error> {
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string holds `N * N` cells in row-major order (whitespace is
    /// ignored, so rows may be split across lines) and may end with `_X` or
    /// `_O` to set the player to move. Without the suffix the turn is inferred
    /// from the piece counts with X moving first.
    ///
    /// The result is not checked against the game rules; see
    /// [`BoardState::validate`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part has fewer than `N * N` non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The suffix is not `X` or `O`
    /// - No suffix is given and the piece counts do not determine a turn
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let mut board = BoardState {
            cells,
            to_move: Player::X,
        };

        board.to_move = match specified_turn {
            Some(turn) => turn,
            None => Self::determine_turn_from_counts(board.count_pieces())?,
        };

        Ok(board)
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Player>), crate::Error> {
        match cleaned.split_once('_') {
            Some((_, "")) => Err(crate::Error::InvalidPlayerString {
                player: String::new(),
                label: cleaned.to_string(),
            }),
            Some((board, suffix)) => Ok((board, Some(Self::parse_player(suffix, cleaned)?))),
            None => Ok((cleaned, None)),
        }
    }

    /// Create a board from the label format produced by [`BoardState::encode`].
    ///
    /// Labels are strict: exactly `N * N` cell characters, an underscore and
    /// the player to move. The board must also pass [`BoardState::validate`].
    ///
    /// # Errors
    ///
    /// Returns error if the label is malformed or describes an impossible position.
    pub fn from_label(label: &str) -> Result<Self, crate::Error> {
        let mut parts = label.split('_');
        let board = parts.next().ok_or_else(|| crate::Error::MissingLabelPart {
            part: "board".to_string(),
            label: label.to_string(),
        })?;
        let to_move_str = parts.next().ok_or_else(|| crate::Error::MissingLabelPart {
            part: "player".to_string(),
            label: label.to_string(),
        })?;

        let chars: Vec<char> = board.chars().collect();
        if parts.next().is_some() || chars.len() != Self::CELLS {
            return Err(crate::Error::InvalidLabelFormat {
                label: label.to_string(),
                expected: format!("{}_P", "C".repeat(Self::CELLS)),
            });
        }

        let cells = Self::parse_cells(&chars, label)?;
        let to_move = Self::parse_player(to_move_str, label)?;

        let board = BoardState { cells, to_move };
        board.validate()?;
        Ok(board)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is `>= N`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Cell at a row-major index, `None` when off the board
    pub fn get(&self, index: usize) -> Option<Cell> {
        (index < Self::CELLS).then(|| self.cells[index / N][index % N])
    }

    /// Check if a cell is on the board and empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&cell| cell == Cell::Empty)
    }

    /// All empty cells in row-major order
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(Self::CELLS);
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == Cell::Empty {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    /// Place the mark of the player to move and return the new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, row: usize, col: usize) -> Result<BoardState<N>, crate::Error> {
        if !self.is_empty(row, col) {
            return Err(crate::Error::InvalidMove { row, col });
        }

        let mut new_state = *self;
        new_state.cells[row][col] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// The "pass" successor: identical cells, turn handed to the opponent
    #[must_use = "pass returns a new board state; the original is unchanged"]
    pub fn pass(&self) -> Self {
        BoardState {
            cells: self.cells,
            to_move: self.to_move.opponent(),
        }
    }

    /// Every one-ply successor in row-major order, empty once the game is decided
    pub fn legal_successors(&self) -> Vec<Self> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mut successors = Vec::with_capacity(Self::CELLS - self.occupied_count());
        let mark = self.to_move.to_cell();
        for (row, col) in self.empty_positions() {
            let mut next = *self;
            next.cells[row][col] = mark;
            next.to_move = self.to_move.opponent();
            successors.push(next);
        }
        successors
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Terminal classification independent of the side to move
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.occupied_count() == Self::CELLS => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.status() == GameStatus::Draw
    }

    /// Cells whose contents differ between two boards, in row-major order
    pub fn changed_cells(&self, other: &BoardState<N>) -> Vec<(usize, usize)> {
        let mut changed = Vec::new();
        for r in 0..N {
            for c in 0..N {
                if self.cells[r][c] != other.cells[r][c] {
                    changed.push((r, c));
                }
            }
        }
        changed
    }

    /// Compact label: cells in row-major order, `_`, then the player to move
    pub fn encode(&self) -> String {
        let mut label: String = self.cells.iter().flatten().map(|&c| c.to_char()).collect();
        label.push('_');
        label.push(self.to_move.to_cell().to_char());
        label
    }
}

impl<const N: usize> Default for BoardState<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for BoardState<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> Serialize for BoardState<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de, const N: usize> Deserialize<'de> for BoardState<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label).map_err(serde::de::Error::custom)
    }
}
