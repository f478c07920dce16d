//! Solver statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverStats {
    /// Positions taken off the queue and expanded.
    pub states_expanded: usize,

    /// Distinct positions seen (including the start).
    pub states_seen: usize,

    /// Deepest turn count reached.
    pub max_depth: u32,

    /// Whether the search stopped at `max_states`.
    pub truncated: bool,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SolverStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate states expanded per second.
    #[must_use]
    pub fn states_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.states_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
