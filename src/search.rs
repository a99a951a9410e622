//! Alpha-beta move search with heuristic move ordering

pub mod config;
pub mod deadline;
pub mod engine;
pub mod evaluate;
pub mod ordering;

pub use config::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, RootWindow, SearchConfig};
pub use deadline::Deadline;
pub use engine::{
    DRAW_SCORE, Engine, LOSS_SCORE, Role, RootCandidate, SearchOutcome, SearchStats, Searcher,
    WIN_SCORE,
};
pub use evaluate::{LineScore, evaluate, line_scores, line_streak, streak_weight};
pub use ordering::{ScoredCandidate, SortDirection, order_successors};
