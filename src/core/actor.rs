//! The two actors that occupy maze cells.

use serde::{Deserialize, Serialize};

/// Player or minotaur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Minotaur,
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Player => write!(f, "player"),
            Actor::Minotaur => write!(f, "minotaur"),
        }
    }
}
