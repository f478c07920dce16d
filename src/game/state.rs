//! The `Game` aggregate: maze, actors, undo history, outcome.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, warn};

use super::turn::{resolve_turn, Outcome, Turn, TurnRecord};
use crate::core::{Cell, Direction, GameConfig, GameError, ParseError};
use crate::maze::Maze;
use crate::solver::{Solver, SolverConfig};

/// Summary of a `replay` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replay {
    /// Moves applied before the sequence ended or the game finished.
    pub applied: usize,

    /// Outcome after the last applied move.
    pub outcome: Outcome,
}

/// One game in progress.
///
/// Owns the actor positions, the turn counter, and the undo history. The
/// maze is shared, so many games (or solver branches) can use one parse.
/// Cloning is cheap: the history is a persistent vector.
///
/// ## Example
///
/// ```
/// use minotaur_maze::core::Direction;
/// use minotaur_maze::game::{Game, Outcome};
///
/// let mut game = Game::from_text("#########\n#* . X#M#\n#########").unwrap();
///
/// game.apply_move(Direction::East).unwrap();
/// game.apply_move(Direction::East).unwrap();
///
/// assert_eq!(game.outcome(), Outcome::Won);
/// assert_eq!(game.move_history(), "ee");
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    maze: Arc<Maze>,
    config: GameConfig,

    player: Cell,
    minotaur: Cell,

    /// Turns applied (starts at 0).
    turn: u32,
    outcome: Outcome,

    history: Vector<TurnRecord>,
}

impl Game {
    /// Start a game on a parsed maze.
    #[must_use]
    pub fn new(maze: Arc<Maze>) -> Self {
        Self::with_config(maze, GameConfig::default())
    }

    /// Start a game with a custom configuration.
    ///
    /// The maze should have been parsed with `config.symbols`; the symbols
    /// kept here only matter for display.
    #[must_use]
    pub fn with_config(maze: Arc<Maze>, config: GameConfig) -> Self {
        Self {
            player: maze.player_start(),
            minotaur: maze.minotaur_start(),
            maze,
            config,
            turn: 0,
            outcome: Outcome::InProgress,
            history: Vector::new(),
        }
    }

    /// Parse maze text and start a game on it.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        Self::from_text_with_config(text, GameConfig::default())
    }

    /// Parse maze text with `config.symbols` and start a game on it.
    pub fn from_text_with_config(text: &str, config: GameConfig) -> Result<Self, ParseError> {
        let maze = Maze::parse_with(text, &config.symbols)?;
        Ok(Self::with_config(Arc::new(maze), config))
    }

    // === Accessors ===

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Shared handle to the maze, for starting sibling games.
    #[must_use]
    pub fn maze_handle(&self) -> Arc<Maze> {
        Arc::clone(&self.maze)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self) -> Cell {
        self.player
    }

    #[must_use]
    pub fn minotaur(&self) -> Cell {
        self.minotaur
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of turns applied.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Undo history, oldest first. One record per applied turn.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Check whether `undo` would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Applied commands, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Direction> + '_ {
        self.history.iter().map(|record| record.direction)
    }

    /// Applied commands as a string of symbols, e.g. `"nnedw"`.
    #[must_use]
    pub fn move_history(&self) -> String {
        self.moves().map(Direction::symbol).collect()
    }

    // === Turns ===

    /// Apply one player command and the minotaur's response.
    ///
    /// A blocked move or a delay still consumes a turn. Fails only when the
    /// game is already won or lost, in which case nothing changes.
    pub fn apply_move(&mut self, direction: Direction) -> Result<Turn, GameError> {
        if self.outcome.is_terminal() {
            warn!(outcome = %self.outcome, %direction, "move rejected, game is over");
            return Err(GameError::GameOver(self.outcome));
        }

        let turn = resolve_turn(&self.maze, self.player, self.minotaur, direction);

        self.history.push_back(TurnRecord {
            player: self.player,
            minotaur: self.minotaur,
            turn: self.turn,
            direction,
        });
        self.player = turn.player;
        self.minotaur = turn.minotaur;
        self.turn += 1;
        self.outcome = turn.outcome;

        debug!(
            turn = self.turn,
            %direction,
            player = %self.player,
            minotaur = %self.minotaur,
            "applied turn"
        );
        if self.outcome.is_terminal() {
            info!(turn = self.turn, outcome = %self.outcome, "game over");
        }

        Ok(turn)
    }

    /// Parse a single input symbol and apply it.
    ///
    /// An unknown symbol is rejected with state unchanged.
    pub fn apply_symbol(&mut self, symbol: char) -> Result<Turn, GameError> {
        let direction = Direction::from_symbol(symbol).inspect_err(|err| {
            warn!(%err, "rejected input");
        })?;
        self.apply_move(direction)
    }

    /// Parse a single input token (`"n"`, `" E "`) and apply it.
    pub fn apply_command(&mut self, command: &str) -> Result<Turn, GameError> {
        let direction: Direction = command.parse().inspect_err(|err| {
            warn!(%err, "rejected input");
        })?;
        self.apply_move(direction)
    }

    /// Take back the most recent turn.
    ///
    /// Restores both positions and the turn counter, and puts the game back
    /// in progress even if that turn won or lost it.
    pub fn undo(&mut self) -> Result<TurnRecord, GameError> {
        let record = self.history.pop_back().ok_or(GameError::UndoUnderflow)?;

        self.player = record.player;
        self.minotaur = record.minotaur;
        self.turn = record.turn;
        self.outcome = Outcome::InProgress;

        debug!(
            turn = self.turn,
            undone = %record.direction,
            player = %self.player,
            minotaur = %self.minotaur,
            "undid turn"
        );

        Ok(record)
    }

    /// Apply commands in order, stopping early if the game ends.
    ///
    /// Fails without applying anything if the game is already over.
    pub fn replay<I>(&mut self, directions: I) -> Result<Replay, GameError>
    where
        I: IntoIterator<Item = Direction>,
    {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver(self.outcome));
        }

        let mut applied = 0;
        for direction in directions {
            self.apply_move(direction)?;
            applied += 1;
            if self.outcome.is_terminal() {
                break;
            }
        }

        debug!(applied, outcome = %self.outcome, "replay finished");
        Ok(Replay {
            applied,
            outcome: self.outcome,
        })
    }

    /// Parse a move list and replay it.
    ///
    /// The whole list is validated before the first move is applied, so a
    /// bad token leaves the game untouched. See `parse_moves` for the format.
    pub fn replay_str(&mut self, moves: &str) -> Result<Replay, GameError> {
        let directions = parse_moves(moves, self.config.replay_delimiter)?;
        self.replay(directions)
    }

    /// Return to the start positions with an empty history.
    pub fn restart(&mut self) {
        self.player = self.maze.player_start();
        self.minotaur = self.maze.minotaur_start();
        self.turn = 0;
        self.outcome = Outcome::InProgress;
        self.history.clear();

        info!("game restarted");
    }

    /// Shortest winning command sequence from the current position.
    ///
    /// `None` if the game is over, the maze has no reachable exit, or the
    /// default search limit is exhausted.
    #[must_use]
    pub fn solve(&self) -> Option<Vec<Direction>> {
        if self.outcome.is_terminal() {
            return None;
        }
        Solver::new(&self.maze, SolverConfig::default()).solve(self.player, self.minotaur)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.maze.render(self.player, self.minotaur))?;
        write!(f, "Moves: {}", self.move_history())
    }
}

/// Parse a move list such as `"n;s;e"`, `"n s e"`, or `"nse"`.
///
/// Tokens are separated by `delimiter`, whitespace, or commas. A token of
/// several symbols is read one symbol at a time. Symbols are
/// case-insensitive. The first bad token is reported whole.
///
/// ```
/// use minotaur_maze::core::Direction;
/// use minotaur_maze::game::parse_moves;
///
/// let moves = parse_moves("n;ee; d", ';').unwrap();
/// assert_eq!(moves, vec![Direction::North, Direction::East, Direction::East, Direction::Delay]);
///
/// assert!(parse_moves("n;x", ';').is_err());
/// ```
pub fn parse_moves(moves: &str, delimiter: char) -> Result<Vec<Direction>, GameError> {
    let mut directions = Vec::new();

    let tokens = moves
        .split(|c: char| c == delimiter || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for token in tokens {
        let parsed: Result<Vec<Direction>, GameError> = token
            .chars()
            .map(|c| Direction::from_symbol(c.to_ascii_lowercase()))
            .collect();
        match parsed {
            Ok(parsed) => directions.extend(parsed),
            Err(_) => return Err(GameError::InvalidDirectionSymbol(token.to_string())),
        }
    }

    Ok(directions)
}
