//! Minotaur chase rule.
//!
//! The minotaur takes two steps per turn. For each step it closes the
//! horizontal distance to the player if the wall allows, otherwise the
//! vertical distance, otherwise it stays put. The second step starts from
//! wherever the first one ended.
//!
//! There is no path search. A minotaur lured behind a wall stays stuck
//! there until the player moves somewhere it can close in on.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Cell, Direction};
use crate::maze::Maze;

/// Steps the minotaur takes per turn.
pub const CHASE_STEPS: usize = 2;

/// One of the minotaur's sub-moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Moved one cell in `direction`, arriving at `to`.
    Moved { direction: Direction, to: Cell },
    /// Could not close the distance; still at this cell.
    Stayed(Cell),
}

impl Step {
    /// Minotaur position after this step.
    #[must_use]
    pub fn position(self) -> Cell {
        match self {
            Step::Moved { to, .. } => to,
            Step::Stayed(at) => at,
        }
    }

    /// Check whether the minotaur changed cell.
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, Step::Moved { .. })
    }
}

/// Compute a single chase step.
#[must_use]
pub fn chase_step(maze: &Maze, minotaur: Cell, player: Cell) -> Step {
    let horizontal = Direction::horizontal(player.col.cmp(&minotaur.col));
    let vertical = Direction::vertical(player.row.cmp(&minotaur.row));

    let step = [horizontal, vertical]
        .into_iter()
        .flatten()
        .find_map(|direction| {
            maze.step(minotaur, direction)
                .map(|to| Step::Moved { direction, to })
        })
        .unwrap_or(Step::Stayed(minotaur));

    trace!(%minotaur, %player, ?step, "chase step");
    step
}

/// Compute the minotaur's full turn.
///
/// Pure: the same maze and positions always give the same steps.
///
/// ```
/// use minotaur_maze::core::{Cell, Direction};
/// use minotaur_maze::maze::Maze;
/// use minotaur_maze::rules::{chase, Step};
///
/// let maze = Maze::parse("#########\n#* . . M#\n#########").unwrap();
/// let [first, second] = chase(&maze, maze.minotaur_start(), maze.player_start());
///
/// assert_eq!(first, Step::Moved { direction: Direction::West, to: Cell::new(0, 2) });
/// assert_eq!(second.position(), Cell::new(0, 1));
/// ```
#[must_use]
pub fn chase(maze: &Maze, minotaur: Cell, player: Cell) -> [Step; CHASE_STEPS] {
    let first = chase_step(maze, minotaur, player);
    let second = chase_step(maze, first.position(), player);
    [first, second]
}
