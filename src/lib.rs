//! # minotaur-maze
//!
//! Move-resolution engine for the Theseus and the Minotaur maze puzzle.
//!
//! The player must reach an exit. After every player command the minotaur
//! takes two steps toward the player, horizontal first when a wall allows.
//! If it lands on the player, the game is lost.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Movement and the chase are functions over an immutable
//!    maze and two positions. No hidden state.
//!
//! 2. **One Owned Aggregate**: `Game` holds positions, the undo history,
//!    and the outcome. Any number of games can share one parsed `Maze`.
//!
//! 3. **No I/O**: Reading files, capturing keys, and drawing the board are
//!    left to the caller. The engine only takes text and commands.
//!
//! ## Modules
//!
//! - `core`: Cells, directions, actors, configuration, errors
//! - `maze`: Maze text parsing, passability, serialization
//! - `rules`: Player movement and the minotaur's chase
//! - `game`: Turn sequencing, outcome, undo, replay
//! - `solver`: Breadth-first search for the shortest win
//!
//! ## Example
//!
//! ```
//! use minotaur_maze::{Game, Outcome};
//!
//! let mut game = Game::from_text("#######\n#* . M#\n# ### #\n#. . X#\n#######").unwrap();
//!
//! game.replay_str("s;e;e").unwrap();
//! assert_eq!(game.outcome(), Outcome::Won);
//!
//! game.undo().unwrap();
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! assert_eq!(game.move_history(), "se");
//! ```

pub mod core;
pub mod maze;
pub mod rules;
pub mod game;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Actor, Cell, Direction,
    GameConfig, Glyph, MazeSymbols,
    GameError, ParseError,
};

pub use crate::maze::Maze;

pub use crate::rules::{chase, chase_step, resolve_player_move, MoveResult, Step};

pub use crate::game::{Game, Outcome, Replay, Turn, TurnRecord};

pub use crate::solver::{Solver, SolverConfig, SolverStats};
