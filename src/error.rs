//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is occupied or off the board")]
    InvalidMove { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid label format '{label}' (expected format: '{expected}')")]
    InvalidLabelFormat { label: String, expected: String },

    #[error("missing {part} in label '{label}'")]
    MissingLabelPart { part: String, label: String },

    #[error("invalid player '{player}' in label '{label}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, label: String },

    #[error("invalid position '{position}': {reason}")]
    InvalidPosition { position: String, reason: String },

    #[error("move generator produced '{successor}' from '{position}', which is not one ply ahead")]
    IllegalSuccessor { position: String, successor: String },

    #[error("game between {x_agent} and {o_agent} did not finish within {ply_limit} plies")]
    UnfinishedGame {
        x_agent: String,
        o_agent: String,
        ply_limit: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "perform I/O".to_string(),
            source,
        }
    }
}
