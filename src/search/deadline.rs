//! Caller-supplied time limit for a move decision

use std::time::{Duration, Instant};

/// Point in time by which the caller wants a move.
///
/// The search runs to its depth bound regardless. The deadline only travels
/// with the request so harnesses that impose one can log how much of it a
/// decision used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// No time limit
    pub fn none() -> Self {
        Self { at: None }
    }

    /// Expire `budget` from now
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    /// Expire at a fixed instant
    pub fn at(instant: Instant) -> Self {
        Self { at: Some(instant) }
    }

    /// Time left, `None` when there is no limit
    pub fn remaining(&self) -> Option<Duration> {
        self.at.map(|at| at.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }
}
