//! Agent implementations driven by the arena

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    adapters::StandardRules,
    ports::{Agent, MoveGenerator},
    search::{Deadline, Engine, SearchConfig},
    tictactoe::BoardState,
};

/// Agent backed by the alpha-beta engine
pub struct SearchAgent {
    engine: Engine,
    name: String,
    last_value: Option<i32>,
}

impl SearchAgent {
    /// Create a search agent with the given configuration
    pub fn new(name: String, config: SearchConfig) -> Self {
        Self {
            engine: Engine::new(config),
            name,
            last_value: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Value the engine assigned to its most recent move
    pub fn last_value(&self) -> Option<i32> {
        self.last_value
    }
}

impl<const N: usize> Agent<N> for SearchAgent {
    fn select(&mut self, position: &BoardState<N>) -> Result<BoardState<N>> {
        let outcome = self.engine.choose_move(position, Deadline::none())?;
        self.last_value = outcome.value;
        Ok(outcome.position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Baseline agent picking uniformly among legal successors
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<const N: usize> Agent<N> for RandomAgent {
    fn select(&mut self, position: &BoardState<N>) -> Result<BoardState<N>> {
        let successors = StandardRules.successors(position);
        if successors.is_empty() {
            return Ok(StandardRules.pass(position));
        }
        let index = self.rng.random_range(0..successors.len());
        Ok(successors[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
