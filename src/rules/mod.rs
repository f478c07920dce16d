//! Turn rules: player movement and the minotaur's chase.
//!
//! Both are pure functions over an immutable `Maze` and actor positions.
//! The `game` module sequences them into turns and judges the outcome.

pub mod minotaur;
pub mod movement;

pub use minotaur::{chase, chase_step, Step, CHASE_STEPS};
pub use movement::{resolve_player_move, MoveResult};
