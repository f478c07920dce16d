//! Parsed maze: cell lattice plus wall set.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Actor, Cell, Direction, Glyph, MazeSymbols, ParseError};

/// Position in raw text: `(line, column)`, both 0-based.
pub type TextPos = (usize, usize);

/// An immutable maze.
///
/// The text layout interleaves cells and gaps: cells sit on every second
/// line and column (the *lattice*), and the character between two lattice
/// positions is either a wall or a passage. `Cell` coordinates are lattice
/// coordinates, so neighbouring cells differ by one.
///
/// A lattice position whose character is a wall is not a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Text glyphs, row-major, padded with walls to a rectangle.
    /// Actor markers are stored as plain floor.
    tiles: Vec<Glyph>,
    text_rows: usize,
    text_cols: usize,

    /// Text position of lattice cell (0, 0).
    origin: TextPos,

    rows: usize,
    cols: usize,

    /// Lattice mask: `true` where a cell exists.
    open: Vec<bool>,

    exits: Vec<Cell>,
    player_start: Cell,
    minotaur_start: Cell,

    symbols: MazeSymbols,
}

impl Maze {
    /// Parse maze text with the default symbols.
    ///
    /// ```
    /// use minotaur_maze::core::Cell;
    /// use minotaur_maze::maze::Maze;
    ///
    /// let maze = Maze::parse("#####\n#* M#\n#####").unwrap();
    ///
    /// assert_eq!(maze.player_start(), Cell::new(0, 0));
    /// assert_eq!(maze.minotaur_start(), Cell::new(0, 1));
    /// assert!(maze.is_passable(Cell::new(0, 0), Cell::new(0, 1)));
    /// ```
    pub fn parse(text: &str) -> Result<Maze, ParseError> {
        Self::parse_with(text, &MazeSymbols::default())
    }

    /// Parse maze text with a custom character set.
    pub fn parse_with(text: &str, symbols: &MazeSymbols) -> Result<Maze, ParseError> {
        let mut lines: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        while lines
            .last()
            .is_some_and(|line| line.iter().all(|c| c.is_whitespace()))
        {
            lines.pop();
        }

        if lines.is_empty() {
            return Err(ParseError::MalformedShape("maze text is empty".to_string()));
        }

        let text_rows = lines.len();
        let text_cols = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut tiles = Vec::with_capacity(text_rows * text_cols);
        let mut player: Option<TextPos> = None;
        let mut minotaur: Option<TextPos> = None;
        let mut markers: Vec<(TextPos, Glyph)> = Vec::new();

        for (r, line) in lines.iter().enumerate() {
            for c in 0..text_cols {
                // Short lines are walled past their end
                let glyph = line.get(c).map_or(Glyph::Wall, |&ch| symbols.classify(ch));

                match glyph {
                    Glyph::Player => record_actor(&mut player, Actor::Player, (r, c))?,
                    Glyph::Minotaur => record_actor(&mut minotaur, Actor::Minotaur, (r, c))?,
                    _ => {}
                }
                if glyph.is_marker() {
                    markers.push(((r, c), glyph));
                }

                tiles.push(match glyph {
                    Glyph::Player | Glyph::Minotaur => Glyph::Floor,
                    other => other,
                });
            }
        }

        let player = player.ok_or(ParseError::MissingActor(Actor::Player))?;
        let minotaur = minotaur.ok_or(ParseError::MissingActor(Actor::Minotaur))?;

        let origin = (player.0 % 2, player.1 % 2);
        if let Some(((r, c), glyph)) = markers
            .iter()
            .find(|((r, c), _)| (r % 2, c % 2) != origin)
        {
            return Err(ParseError::MalformedShape(format!(
                "{glyph:?} marker at line {r}, column {c} is off the cell lattice \
                 (cells sit on lines of parity {} and columns of parity {})",
                origin.0, origin.1
            )));
        }

        let rows = (text_rows - origin.0).div_ceil(2);
        let cols = (text_cols - origin.1).div_ceil(2);

        let mut maze = Maze {
            tiles,
            text_rows,
            text_cols,
            origin,
            rows,
            cols,
            open: Vec::with_capacity(rows * cols),
            exits: Vec::new(),
            player_start: Cell::new(0, 0),
            minotaur_start: Cell::new(0, 0),
            symbols: symbols.clone(),
        };

        for row in 0..rows {
            for col in 0..cols {
                let open = maze.tile(maze.text_pos(Cell::new(row, col))) != Some(Glyph::Wall);
                maze.open.push(open);
            }
        }

        maze.player_start = maze.lattice_cell(player);
        maze.minotaur_start = maze.lattice_cell(minotaur);
        maze.exits = maze.locate_exits();

        debug!(
            rows,
            cols,
            exits = maze.exits.len(),
            player = %maze.player_start,
            minotaur = %maze.minotaur_start,
            "parsed maze"
        );

        Ok(maze)
    }

    // === Queries ===

    /// Lattice dimensions `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Text dimensions `(lines, columns)` after padding.
    #[must_use]
    pub fn text_dimensions(&self) -> (usize, usize) {
        (self.text_rows, self.text_cols)
    }

    /// Check whether `cell` is open floor inside the maze.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols && self.open[cell.row * self.cols + cell.col]
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
            .filter(move |&cell| self.contains(cell))
    }

    /// Escape cells, sorted. May be empty.
    #[must_use]
    pub fn exits(&self) -> &[Cell] {
        &self.exits
    }

    /// Check whether reaching `cell` wins the game.
    #[must_use]
    pub fn is_exit(&self, cell: Cell) -> bool {
        self.exits.binary_search(&cell).is_ok()
    }

    /// Where the player starts.
    #[must_use]
    pub fn player_start(&self) -> Cell {
        self.player_start
    }

    /// Where the minotaur starts.
    #[must_use]
    pub fn minotaur_start(&self) -> Cell {
        self.minotaur_start
    }

    /// Symbols this maze was parsed with.
    #[must_use]
    pub fn symbols(&self) -> &MazeSymbols {
        &self.symbols
    }

    // === Walls ===

    /// Check whether a wall separates two adjacent cells.
    ///
    /// Returns `None` unless both cells exist and are adjacent.
    #[must_use]
    pub fn wall_between(&self, a: Cell, b: Cell) -> Option<bool> {
        if !self.contains(a) || !self.contains(b) || !a.is_adjacent(b) {
            return None;
        }
        let (ar, ac) = self.text_pos(a);
        let (br, bc) = self.text_pos(b);
        let gap = ((ar + br) / 2, (ac + bc) / 2);
        Some(self.tile(gap) == Some(Glyph::Wall))
    }

    /// True iff `to` is a cell of the maze, orthogonally adjacent to `from`,
    /// and no wall lies between them.
    ///
    /// Symmetric: `is_passable(a, b) == is_passable(b, a)`.
    #[must_use]
    pub fn is_passable(&self, from: Cell, to: Cell) -> bool {
        self.wall_between(from, to) == Some(false)
    }

    /// The cell reached by stepping from `from` in `direction`, if passable.
    ///
    /// `Direction::Delay` never yields a cell.
    #[must_use]
    pub fn step(&self, from: Cell, direction: Direction) -> Option<Cell> {
        if !direction.is_move() {
            return None;
        }
        from.offset(direction)
            .filter(|&to| self.is_passable(from, to))
    }

    /// Passable neighbours of `cell` with the direction leading to each.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[(Direction, Cell); 4]> {
        Direction::MOVES
            .into_iter()
            .filter_map(|d| self.step(cell, d).map(|to| (d, to)))
            .collect()
    }

    // === Text layout ===

    /// Text position of a lattice cell. The cell need not exist.
    #[must_use]
    pub fn text_pos(&self, cell: Cell) -> TextPos {
        (2 * cell.row + self.origin.0, 2 * cell.col + self.origin.1)
    }

    /// Glyph at a text position, `None` outside the text.
    #[must_use]
    pub fn tile(&self, (r, c): TextPos) -> Option<Glyph> {
        (r < self.text_rows && c < self.text_cols).then(|| self.tiles[r * self.text_cols + c])
    }

    fn lattice_cell(&self, (r, c): TextPos) -> Cell {
        Cell::new((r - self.origin.0) / 2, (c - self.origin.1) / 2)
    }

    /// `X` cells plus cells with a boundary opening: an open gap character
    /// inside the text whose far side lies outside it.
    fn locate_exits(&self) -> Vec<Cell> {
        let mut exits: Vec<Cell> = self
            .cells()
            .filter(|&cell| {
                let pos = self.text_pos(cell);
                self.tile(pos) == Some(Glyph::Exit)
                    || Direction::MOVES.into_iter().any(|d| self.opens_outward(pos, d))
            })
            .collect();
        exits.sort();
        exits.dedup();
        exits
    }

    fn opens_outward(&self, pos: TextPos, direction: Direction) -> bool {
        let Some(gap) = text_offset(pos, direction, 1) else {
            return false;
        };
        if self.tile(gap).map_or(true, |glyph| glyph == Glyph::Wall) {
            return false;
        }
        text_offset(pos, direction, 2).map_or(true, |beyond| self.tile(beyond).is_none())
    }
}

fn record_actor(slot: &mut Option<TextPos>, actor: Actor, pos: TextPos) -> Result<(), ParseError> {
    match *slot {
        Some(first) => Err(ParseError::DuplicateActor {
            actor,
            first,
            second: pos,
        }),
        None => {
            *slot = Some(pos);
            Ok(())
        }
    }
}

fn text_offset((r, c): TextPos, direction: Direction, times: isize) -> Option<TextPos> {
    let (dr, dc) = direction.delta();
    Some((
        r.checked_add_signed(dr * times)?,
        c.checked_add_signed(dc * times)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
#########
#* . . .#
# ##### #
#. .#. M#
#########";

    #[test]
    fn test_parse_dimensions_and_actors() {
        let maze = Maze::parse(CORRIDOR).unwrap();

        assert_eq!(maze.dimensions(), (2, 4));
        assert_eq!(maze.text_dimensions(), (5, 9));
        assert_eq!(maze.player_start(), Cell::new(0, 0));
        assert_eq!(maze.minotaur_start(), Cell::new(1, 3));
        assert_eq!(maze.cells().count(), 8);
    }

    #[test]
    fn test_walls_and_passages() {
        let maze = Maze::parse(CORRIDOR).unwrap();

        // Top row is one open corridor
        assert!(maze.is_passable(Cell::new(0, 0), Cell::new(0, 1)));
        assert!(maze.is_passable(Cell::new(0, 2), Cell::new(0, 3)));

        // Vertical links only at both ends
        assert!(maze.is_passable(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(!maze.is_passable(Cell::new(0, 1), Cell::new(1, 1)));
        assert!(maze.is_passable(Cell::new(0, 3), Cell::new(1, 3)));

        // Wall in the middle of the bottom row
        assert_eq!(maze.wall_between(Cell::new(1, 1), Cell::new(1, 2)), Some(true));
        assert_eq!(maze.wall_between(Cell::new(1, 2), Cell::new(1, 3)), Some(false));
    }

    #[test]
    fn test_is_passable_requires_adjacency_and_bounds() {
        let maze = Maze::parse(CORRIDOR).unwrap();

        assert!(!maze.is_passable(Cell::new(0, 0), Cell::new(0, 0)));
        assert!(!maze.is_passable(Cell::new(0, 0), Cell::new(0, 2)));
        assert!(!maze.is_passable(Cell::new(0, 0), Cell::new(1, 1)));
        assert!(!maze.is_passable(Cell::new(1, 3), Cell::new(1, 4)));
        assert!(!maze.is_passable(Cell::new(1, 3), Cell::new(2, 3)));
        assert_eq!(maze.wall_between(Cell::new(1, 3), Cell::new(2, 3)), None);
    }

    #[test]
    fn test_step_and_neighbors() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        let start = maze.player_start();

        assert_eq!(maze.step(start, Direction::East), Some(Cell::new(0, 1)));
        assert_eq!(maze.step(start, Direction::South), Some(Cell::new(1, 0)));
        assert_eq!(maze.step(start, Direction::North), None);
        assert_eq!(maze.step(start, Direction::Delay), None);

        let neighbors = maze.neighbors(Cell::new(0, 1));
        assert_eq!(
            neighbors.as_slice(),
            &[(Direction::East, Cell::new(0, 2)), (Direction::West, Cell::new(0, 0))]
        );
    }

    #[test]
    fn test_no_exit_is_accepted() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        assert!(maze.exits().is_empty());
    }

    #[test]
    fn test_explicit_exit_marker() {
        let maze = Maze::parse("#######\n#* M X#\n#######").unwrap();

        assert_eq!(maze.exits(), &[Cell::new(0, 2)]);
        assert!(maze.is_exit(Cell::new(0, 2)));
        assert!(!maze.is_exit(Cell::new(0, 0)));
    }

    #[test]
    fn test_boundary_opening_is_exit() {
        // Gap in the right-hand wall
        let maze = Maze::parse("#####\n#* M \n#####").unwrap();
        assert_eq!(maze.exits(), &[Cell::new(0, 1)]);

        // Gap in the top wall
        let maze = Maze::parse("### #\n#* M#\n#####").unwrap();
        assert_eq!(maze.exits(), &[Cell::new(0, 1)]);
    }

    #[test]
    fn test_cells_on_text_border_are_enclosed() {
        // Cells on the very edge have no gap character outside them
        let maze = Maze::parse("#*#.#\n# # #\n#.#M#").unwrap();

        assert_eq!(maze.dimensions(), (2, 2));
        assert!(maze.exits().is_empty());
        assert_eq!(maze.player_start(), Cell::new(0, 0));
        assert_eq!(maze.minotaur_start(), Cell::new(1, 1));
    }

    #[test]
    fn test_blank_lattice_positions_are_floor() {
        let maze = Maze::parse("#####\n#*  #\n# ###\n#M  #\n#####").unwrap();

        assert!(maze.contains(Cell::new(0, 1)));
        assert!(maze.contains(Cell::new(1, 0)));
        assert!(maze.is_passable(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(!maze.is_passable(Cell::new(0, 1), Cell::new(1, 1)));
    }

    #[test]
    fn test_ragged_lines_are_walled() {
        let maze = Maze::parse("#####\n#* M\n#####\n").unwrap();

        assert_eq!(maze.text_dimensions(), (3, 5));
        assert!(maze.exits().is_empty());
    }

    #[test]
    fn test_crlf_and_trailing_blank_lines() {
        let maze = Maze::parse("#####\r\n#* M#\r\n#####\r\n\r\n   \n").unwrap();
        assert_eq!(maze.text_dimensions(), (3, 5));
    }

    #[test]
    fn test_empty_text_is_malformed() {
        assert!(matches!(Maze::parse(""), Err(ParseError::MalformedShape(_))));
        assert!(matches!(Maze::parse("\n  \n"), Err(ParseError::MalformedShape(_))));
    }

    #[test]
    fn test_missing_actors() {
        assert_eq!(
            Maze::parse("#####\n#. M#\n#####"),
            Err(ParseError::MissingActor(Actor::Player))
        );
        assert_eq!(
            Maze::parse("#####\n#* .#\n#####"),
            Err(ParseError::MissingActor(Actor::Minotaur))
        );
    }

    #[test]
    fn test_duplicate_actors() {
        assert_eq!(
            Maze::parse("#######\n#* M *#\n#######"),
            Err(ParseError::DuplicateActor {
                actor: Actor::Player,
                first: (1, 1),
                second: (1, 5),
            })
        );
        assert!(matches!(
            Maze::parse("#######\n#M * M#\n#######"),
            Err(ParseError::DuplicateActor { actor: Actor::Minotaur, .. })
        ));
    }

    #[test]
    fn test_off_lattice_marker_is_malformed() {
        // Minotaur sits on a gap column
        let err = Maze::parse("#####\n#*M #\n#####").unwrap_err();
        assert!(matches!(err, ParseError::MalformedShape(_)));
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = MazeSymbols::default().with_actors('T', 'm').with_exit('G');
        let maze = Maze::parse_with("+-+-+-+\n|T m G|\n+-+-+-+", &symbols).unwrap();

        assert_eq!(maze.player_start(), Cell::new(0, 0));
        assert_eq!(maze.minotaur_start(), Cell::new(0, 1));
        assert_eq!(maze.exits(), &[Cell::new(0, 2)]);
    }
}
