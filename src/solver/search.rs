//! Breadth-first search over game positions.
//!
//! A position is the pair (player cell, minotaur cell). The turn counter
//! and history don't affect what happens next, so two games in the same
//! position have the same future. Expanding positions in BFS order gives the
//! shortest winning sequence.

use std::collections::VecDeque;
use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::core::{Cell, Direction};
use crate::game::{resolve_turn, Outcome};
use crate::maze::Maze;
use crate::rules::MoveResult;

use super::config::SolverConfig;
use super::stats::SolverStats;

/// (player, minotaur)
type Position = (Cell, Cell);

/// Search context over one maze.
pub struct Solver<'a> {
    maze: &'a Maze,
    config: SolverConfig,
    stats: SolverStats,
}

impl<'a> Solver<'a> {
    /// Create a solver for `maze`.
    pub fn new(maze: &'a Maze, config: SolverConfig) -> Self {
        Self {
            maze,
            config,
            stats: SolverStats::default(),
        }
    }

    /// Statistics from the most recent `solve`.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Find the shortest command sequence that wins from this position.
    ///
    /// Returns `None` when no winning sequence exists, or none was found
    /// within the configured limits (check `stats().truncated`).
    pub fn solve(&mut self, player: Cell, minotaur: Cell) -> Option<Vec<Direction>> {
        let started = Instant::now();
        self.stats.reset();

        let start: Position = (player, minotaur);
        let mut seen: FxHashSet<Position> = FxHashSet::default();
        let mut parents: FxHashMap<Position, (Position, Direction)> = FxHashMap::default();
        let mut queue: VecDeque<(Position, u32)> = VecDeque::new();

        seen.insert(start);
        queue.push_back((start, 0));

        let solution = 'search: loop {
            let Some((position, depth)) = queue.pop_front() else {
                break None;
            };
            self.stats.states_expanded += 1;

            if self.config.max_depth != 0 && depth >= self.config.max_depth {
                continue;
            }

            for direction in Direction::ALL {
                let turn = resolve_turn(self.maze, position.0, position.1, direction);

                // Same result as a delay, which is tried anyway
                if turn.player_move == MoveResult::Blocked {
                    continue;
                }

                match turn.outcome {
                    Outcome::Won => {
                        break 'search Some(reconstruct(&parents, start, position, direction));
                    }
                    Outcome::Lost => {}
                    Outcome::InProgress => {
                        let next = (turn.player, turn.minotaur);
                        if seen.contains(&next) {
                            continue;
                        }
                        if seen.len() >= self.config.max_states {
                            self.stats.truncated = true;
                            break 'search None;
                        }
                        seen.insert(next);
                        parents.insert(next, (position, direction));
                        queue.push_back((next, depth + 1));
                        self.stats.max_depth = self.stats.max_depth.max(depth + 1);
                    }
                }
            }
        };

        self.stats.states_seen = seen.len();
        self.stats.time_us = started.elapsed().as_micros() as u64;

        debug!(
            found = solution.is_some(),
            length = solution.as_ref().map_or(0, Vec::len),
            expanded = self.stats.states_expanded,
            truncated = self.stats.truncated,
            "solver finished"
        );

        solution
    }
}

fn reconstruct(
    parents: &FxHashMap<Position, (Position, Direction)>,
    start: Position,
    last: Position,
    winning: Direction,
) -> Vec<Direction> {
    let mut directions = vec![winning];
    let mut current = last;
    while current != start {
        let Some(&(parent, direction)) = parents.get(&current) else {
            break;
        };
        directions.push(direction);
        current = parent;
    }
    directions.reverse();
    directions
}

/// Solve from the maze's start positions with the default limits.
///
/// ```
/// use minotaur_maze::core::Direction;
/// use minotaur_maze::maze::Maze;
/// use minotaur_maze::solver::solve;
///
/// let maze = Maze::parse("#########\n#* . X#M#\n#########").unwrap();
/// assert_eq!(solve(&maze), Some(vec![Direction::East, Direction::East]));
/// ```
#[must_use]
pub fn solve(maze: &Maze) -> Option<Vec<Direction>> {
    Solver::new(maze, SolverConfig::default()).solve(maze.player_start(), maze.minotaur_start())
}
