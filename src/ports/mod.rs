//! Ports (trait boundaries) for external collaborators.
//!
//! The search core consumes a [`MoveGenerator`] and the game harness drives
//! anything implementing [`Agent`]. Both traits are owned by the domain and
//! implemented by adapters.

pub mod agent;
pub mod move_generator;

pub use agent::Agent;
pub use move_generator::MoveGenerator;
