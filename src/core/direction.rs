//! Player commands and unit directions.
//!
//! Each direction has a one-character symbol used in interactive input and
//! in replay strings:
//!
//! | Symbol | Direction |
//! |--------|-----------|
//! | `n`    | North     |
//! | `s`    | South     |
//! | `e`    | East      |
//! | `w`    | West      |
//! | `d`    | Delay     |

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A single-turn command: one of the four compass moves or a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Away from row 0.
    South,
    /// Away from column 0.
    East,
    /// Toward column 0.
    West,
    /// Stay in place; the turn is still consumed.
    Delay,
}

impl Direction {
    /// Every command, in symbol order `n s e w d`.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Delay,
    ];

    /// The four moves that change position.
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(row, col)` unit offset.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::Delay => (0, 0),
        }
    }

    /// Input symbol for this command.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
            Direction::Delay => 'd',
        }
    }

    /// Parse an input symbol.
    ///
    /// ```
    /// use minotaur_maze::core::Direction;
    ///
    /// assert_eq!(Direction::from_symbol('n').unwrap(), Direction::North);
    /// assert!(Direction::from_symbol('x').is_err());
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Self, GameError> {
        match symbol {
            'n' => Ok(Direction::North),
            's' => Ok(Direction::South),
            'e' => Ok(Direction::East),
            'w' => Ok(Direction::West),
            'd' => Ok(Direction::Delay),
            other => Err(GameError::InvalidDirectionSymbol(other.to_string())),
        }
    }

    /// Whether this command changes position.
    #[must_use]
    pub const fn is_move(self) -> bool {
        !matches!(self, Direction::Delay)
    }

    /// Horizontal step for a column comparison `target.cmp(&current)`.
    ///
    /// `Equal` yields `None`: there is no horizontal distance to close.
    #[must_use]
    pub const fn horizontal(ordering: Ordering) -> Option<Direction> {
        match ordering {
            Ordering::Less => Some(Direction::West),
            Ordering::Greater => Some(Direction::East),
            Ordering::Equal => None,
        }
    }

    /// Vertical step for a row comparison `target.cmp(&current)`.
    #[must_use]
    pub const fn vertical(ordering: Ordering) -> Option<Direction> {
        match ordering {
            Ordering::Less => Some(Direction::North),
            Ordering::Greater => Some(Direction::South),
            Ordering::Equal => None,
        }
    }

    /// The opposite direction. `Delay` is its own opposite.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Delay => Direction::Delay,
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Parse a single token. Surrounding whitespace is ignored and the
    /// symbol is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_symbol(c.to_ascii_lowercase())
                .map_err(|_| GameError::InvalidDirectionSymbol(token.to_string())),
            _ => Err(GameError::InvalidDirectionSymbol(token.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
