//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum distinct (player, minotaur) positions to visit.
    /// The search gives up once this many have been seen.
    pub max_states: usize,

    /// Maximum solution length in turns (0 = unlimited).
    pub max_depth: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_states: 1_000_000,
            max_depth: 0,
        }
    }
}

impl SolverConfig {
    /// Create a new config with a custom state limit.
    #[must_use]
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// Create a new config with a custom depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}
