//! Error taxonomy.
//!
//! - `ParseError`: the maze text cannot be turned into a playable maze.
//!   Fatal at startup.
//! - `GameError`: a single input was rejected. Game state is unchanged and
//!   the caller can re-prompt.

use super::actor::Actor;
use crate::game::Outcome;

/// Failure to build a `Maze` from text.
///
/// Positions are reported in raw text coordinates `(line, column)`, both
/// 0-based, so the caller can point at the offending character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed maze shape: {0}")]
    MalformedShape(String),

    #[error("no {0} start marker in maze")]
    MissingActor(Actor),

    #[error("{actor} start marker appears more than once: {first:?} and {second:?}")]
    DuplicateActor {
        actor: Actor,
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Rejected per-turn input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid direction symbol {0:?}, expected one of n, s, e, w, d")]
    InvalidDirectionSymbol(String),

    #[error("nothing to undo")]
    UndoUnderflow,

    #[error("game is over ({0}), restart to play again")]
    GameOver(Outcome),
}
