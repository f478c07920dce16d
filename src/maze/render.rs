//! Text serialization of a maze.
//!
//! Output uses the maze's own `MazeSymbols` and is padded to a rectangle,
//! so parsing it again yields a maze with the same cells, walls, exits,
//! and start positions.

use super::grid::Maze;
use crate::core::{Cell, Glyph};

impl Maze {
    /// Serialize with actor markers at their start cells.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.render(self.player_start(), self.minotaur_start())
    }

    /// Serialize with actor markers at arbitrary cells.
    ///
    /// The minotaur is drawn over the player when both share a cell.
    /// Positions outside the lattice are ignored.
    #[must_use]
    pub fn render(&self, player: Cell, minotaur: Cell) -> String {
        let (text_rows, text_cols) = self.text_dimensions();
        let symbols = self.symbols();

        let mut grid: Vec<Vec<char>> = (0..text_rows)
            .map(|r| {
                (0..text_cols)
                    .map(|c| symbols.symbol(self.tile((r, c)).unwrap_or(Glyph::Wall)))
                    .collect()
            })
            .collect();

        for (cell, glyph) in [(player, Glyph::Player), (minotaur, Glyph::Minotaur)] {
            let (r, c) = self.text_pos(cell);
            if let Some(slot) = grid.get_mut(r).and_then(|line| line.get_mut(c)) {
                *slot = symbols.symbol(glyph);
            }
        }

        let mut out = String::with_capacity(text_rows * (text_cols + 1));
        for (i, line) in grid.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line.iter());
        }
        out
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
