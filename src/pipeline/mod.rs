//! Match pipeline: agents and the arena that pits them against each other

pub mod agents;
pub mod arena;

pub use agents::{RandomAgent, SearchAgent};
pub use arena::{Arena, ArenaConfig, MatchSummary};

pub use crate::ports::Agent;
