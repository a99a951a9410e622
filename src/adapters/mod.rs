//! Adapters implementing domain ports.

pub mod standard_rules;

pub use standard_rules::StandardRules;
