//! Player move resolution.
//!
//! Every command consumes a turn. A move into a wall is legal but has no
//! effect, the same as a delay. Moving onto the minotaur is allowed here;
//! collisions are judged by the game after both actors have moved.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Cell, Direction};
use crate::maze::Maze;

/// Result of resolving one player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The player stepped to this cell.
    Moved(Cell),
    /// A wall or the maze edge stopped the move.
    Blocked,
    /// The player chose to wait.
    Delayed,
}

impl MoveResult {
    /// Position after the move, given the position before it.
    #[must_use]
    pub fn position(self, from: Cell) -> Cell {
        match self {
            MoveResult::Moved(to) => to,
            MoveResult::Blocked | MoveResult::Delayed => from,
        }
    }

    /// Check whether the player changed cell.
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, MoveResult::Moved(_))
    }
}

/// Resolve a player command against the maze.
///
/// ```
/// use minotaur_maze::core::{Cell, Direction};
/// use minotaur_maze::maze::Maze;
/// use minotaur_maze::rules::{resolve_player_move, MoveResult};
///
/// let maze = Maze::parse("#######\n#* M .#\n#######").unwrap();
/// let start = maze.player_start();
///
/// assert_eq!(resolve_player_move(&maze, start, Direction::East), MoveResult::Moved(Cell::new(0, 1)));
/// assert_eq!(resolve_player_move(&maze, start, Direction::West), MoveResult::Blocked);
/// assert_eq!(resolve_player_move(&maze, start, Direction::Delay), MoveResult::Delayed);
/// ```
#[must_use]
pub fn resolve_player_move(maze: &Maze, player: Cell, direction: Direction) -> MoveResult {
    if !direction.is_move() {
        return MoveResult::Delayed;
    }

    match maze.step(player, direction) {
        Some(to) => MoveResult::Moved(to),
        None => {
            trace!(%player, %direction, "player move blocked");
            MoveResult::Blocked
        }
    }
}
