//! Engine configuration.
//!
//! - `MazeSymbols`: which characters mark walls, floor, actors, and exits.
//! - `GameConfig`: symbols plus the replay-string delimiter.
//!
//! Defaults match the classic text format:
//!
//! ```text
//! #####
//! #* .#
//! ### #
//! #M  X
//! #####
//! ```

use serde::{Deserialize, Serialize};

/// What a single character of maze text stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// Blocks movement.
    Wall,
    /// Open gap between cells, or open floor with no marker.
    Passage,
    /// Plain floor cell.
    Floor,
    /// Floor cell where the player starts.
    Player,
    /// Floor cell where the minotaur starts.
    Minotaur,
    /// Floor cell that wins the game when the player reaches it.
    Exit,
}

impl Glyph {
    /// Floor-like glyphs fix the lattice parity of the maze.
    #[must_use]
    pub const fn is_marker(self) -> bool {
        matches!(self, Glyph::Floor | Glyph::Player | Glyph::Minotaur | Glyph::Exit)
    }
}

/// Character set of the maze text format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSymbols {
    /// Written for walls when serializing. Any unrecognised non-whitespace
    /// character also parses as a wall.
    pub wall: char,

    /// Open gap. Other whitespace is read as a passage too.
    pub passage: char,

    pub floor: char,
    pub player: char,
    pub minotaur: char,
    pub exit: char,
}

impl Default for MazeSymbols {
    fn default() -> Self {
        Self {
            wall: '#',
            passage: ' ',
            floor: '.',
            player: '*',
            minotaur: 'M',
            exit: 'X',
        }
    }
}

impl MazeSymbols {
    /// Set the wall character.
    #[must_use]
    pub fn with_wall(mut self, wall: char) -> Self {
        self.wall = wall;
        self
    }

    /// Set the floor character.
    #[must_use]
    pub fn with_floor(mut self, floor: char) -> Self {
        self.floor = floor;
        self
    }

    /// Set both actor markers.
    #[must_use]
    pub fn with_actors(mut self, player: char, minotaur: char) -> Self {
        self.player = player;
        self.minotaur = minotaur;
        self
    }

    /// Set the exit marker.
    #[must_use]
    pub fn with_exit(mut self, exit: char) -> Self {
        self.exit = exit;
        self
    }

    /// Classify a character.
    ///
    /// Markers are checked before whitespace, so a configuration may use a
    /// whitespace character as a marker if it really wants to.
    #[must_use]
    pub fn classify(&self, c: char) -> Glyph {
        if c == self.player {
            Glyph::Player
        } else if c == self.minotaur {
            Glyph::Minotaur
        } else if c == self.exit {
            Glyph::Exit
        } else if c == self.floor {
            Glyph::Floor
        } else if c == self.passage || c.is_whitespace() {
            Glyph::Passage
        } else {
            Glyph::Wall
        }
    }

    /// Character written for a glyph.
    #[must_use]
    pub fn symbol(&self, glyph: Glyph) -> char {
        match glyph {
            Glyph::Wall => self.wall,
            Glyph::Passage => self.passage,
            Glyph::Floor => self.floor,
            Glyph::Player => self.player,
            Glyph::Minotaur => self.minotaur,
            Glyph::Exit => self.exit,
        }
    }
}

/// Configuration for a `Game`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maze text format.
    pub symbols: MazeSymbols,

    /// Separator between tokens in a replay string (default `;`).
    pub replay_delimiter: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: MazeSymbols::default(),
            replay_delimiter: ';',
        }
    }
}

impl GameConfig {
    /// Create a config with custom maze symbols.
    #[must_use]
    pub fn with_symbols(mut self, symbols: MazeSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Create a config with a custom replay delimiter.
    #[must_use]
    pub fn with_replay_delimiter(mut self, delimiter: char) -> Self {
        self.replay_delimiter = delimiter;
        self
    }
}
