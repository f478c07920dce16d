//! Shortest-solution search.
//!
//! The game is fully deterministic, so a maze can be solved exactly by
//! breadth-first search over (player, minotaur) positions using the same
//! turn rules as `Game`.
//!
//! ## Usage
//!
//! ```
//! use minotaur_maze::game::{Game, Outcome};
//! use minotaur_maze::solver::{Solver, SolverConfig};
//!
//! let mut game = Game::from_text("#######\n#* . M#\n# ### #\n#. . X#\n#######").unwrap();
//!
//! let mut solver = Solver::new(game.maze(), SolverConfig::default());
//! let solution = solver.solve(game.player(), game.minotaur()).unwrap();
//! println!("solved after expanding {} positions", solver.stats().states_expanded);
//!
//! let replay = game.replay(solution).unwrap();
//! assert_eq!(replay.outcome, Outcome::Won);
//! ```

mod config;
mod search;
mod stats;

pub use config::SolverConfig;
pub use search::{solve, Solver};
pub use stats::SolverStats;
