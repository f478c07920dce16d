//! Cell coordinates on the maze lattice.
//!
//! ## Coordinate Layout
//!
//! Cells are addressed by `(row, col)` on the *lattice*, not in raw text
//! coordinates. Neighbouring cells differ by exactly one in one axis:
//!
//! ```
//! use minotaur_maze::core::{Cell, Direction};
//!
//! let cell = Cell::new(1, 1);
//!
//! assert_eq!(cell.offset(Direction::East), Some(Cell::new(1, 2)));
//! assert_eq!(cell.offset(Direction::North), Some(Cell::new(0, 1)));
//! assert_eq!(Cell::new(0, 0).offset(Direction::North), None);
//! ```
//!
//! Rows grow downward (north is `row - 1`), columns grow to the east.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A lattice coordinate.
///
/// Ordering is row-major, which keeps cell lists and exit lists stable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row index, 0 at the top.
    pub row: usize,

    /// Column index, 0 at the left.
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one unit away in `direction`.
    ///
    /// Returns `None` when the offset would leave the non-negative quadrant.
    /// `Direction::Delay` returns the cell itself.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        Some(Cell {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Check whether `other` is orthogonally adjacent (distance exactly one).
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// The direction that leads from `self` to an adjacent `other`.
    ///
    /// ```
    /// use minotaur_maze::core::{Cell, Direction};
    ///
    /// let a = Cell::new(2, 2);
    /// assert_eq!(a.direction_to(Cell::new(2, 3)), Some(Direction::East));
    /// assert_eq!(a.direction_to(Cell::new(1, 2)), Some(Direction::North));
    /// assert_eq!(a.direction_to(Cell::new(4, 2)), None);
    /// ```
    #[must_use]
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::MOVES
            .into_iter()
            .find(|&d| self.offset(d) == Some(other))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
