//! Turn resolution and the records it produces.
//!
//! A turn is one player command followed by the minotaur's two chase
//! steps, unless the player escaped first. `resolve_turn` is pure; `Game`
//! commits its result and the solver explores with it.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction};
use crate::maze::Maze;
use crate::rules::{chase, resolve_player_move, MoveResult, Step, CHASE_STEPS};

/// Game outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still playing.
    #[default]
    InProgress,
    /// The player reached an exit.
    Won,
    /// The minotaur caught the player.
    Lost,
}

impl Outcome {
    /// Won or lost: no further moves are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won => write!(f, "won"),
            Outcome::Lost => write!(f, "lost"),
        }
    }
}

/// Snapshot taken before a turn is applied. Undo restores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Player position before the turn.
    pub player: Cell,

    /// Minotaur position before the turn.
    pub minotaur: Cell,

    /// Turn counter before the turn.
    pub turn: u32,

    /// The command that was applied.
    pub direction: Direction,
}

/// Everything that happened during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub direction: Direction,

    /// How the player command resolved.
    pub player_move: MoveResult,

    /// Minotaur steps, or `None` when the player escaped first.
    pub chase: Option<[Step; CHASE_STEPS]>,

    pub player: Cell,
    pub minotaur: Cell,
    pub outcome: Outcome,
}

/// Resolve a full turn without mutating anything.
///
/// 1. Resolve the player command.
/// 2. On an exit the game is won and the minotaur does not move.
/// 3. Otherwise the minotaur takes its two chase steps.
/// 4. The game is lost if the minotaur ends on the player's cell.
#[must_use]
pub fn resolve_turn(maze: &Maze, player: Cell, minotaur: Cell, direction: Direction) -> Turn {
    let player_move = resolve_player_move(maze, player, direction);
    let player = player_move.position(player);

    if maze.is_exit(player) {
        return Turn {
            direction,
            player_move,
            chase: None,
            player,
            minotaur,
            outcome: Outcome::Won,
        };
    }

    let steps = chase(maze, minotaur, player);
    let minotaur = steps[CHASE_STEPS - 1].position();
    let outcome = if minotaur == player {
        Outcome::Lost
    } else {
        Outcome::InProgress
    };

    Turn {
        direction,
        player_move,
        chase: Some(steps),
        player,
        minotaur,
        outcome,
    }
}
