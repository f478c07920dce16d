//! Maze grid: parsing, passability, and serialization.
//!
//! ## Text Format
//!
//! ```text
//! #########
//! #* . . X#     * player start     M minotaur start
//! # ##### #     . floor            X exit
//! #. .#. M#     # wall (any other symbol is a wall too)
//! #########       (space) open passage
//! ```
//!
//! Cells sit on every second line and column. Moving one cell crosses the
//! character between two cells, which must not be a wall. Besides `X`
//! cells, a gap in the outer wall next to a cell makes that cell an exit.
//!
//! The maze is immutable once parsed and is shared by `Arc` between games.

mod grid;
mod render;

pub use grid::{Maze, TextPos};
