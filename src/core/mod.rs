//! Core engine types: cells, directions, actors, configuration, errors.
//!
//! Everything here is plain data shared by the maze, the rules, and the
//! game state machine.

pub mod actor;
pub mod cell;
pub mod config;
pub mod direction;
pub mod error;

pub use actor::Actor;
pub use cell::Cell;
pub use config::{GameConfig, Glyph, MazeSymbols};
pub use direction::Direction;
pub use error::{GameError, ParseError};
