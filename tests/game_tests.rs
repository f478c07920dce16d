//! Game scenario tests.
//!
//! These tests play whole games through the public API: parse a maze,
//! feed commands, and check positions, outcome, and history.

use std::sync::Arc;

use minotaur_maze::core::{Actor, Cell, Direction, GameConfig, GameError, MazeSymbols, ParseError};
use minotaur_maze::game::{Game, Outcome, Replay};
use minotaur_maze::maze::Maze;
use minotaur_maze::rules::{chase, MoveResult, Step};

/// Player must go round the inner wall while the minotaur is held up.
///
/// ```text
/// #######
/// #* . M#
/// # ### #
/// #. . X#
/// #######
/// ```
const DETOUR: &str = "#######\n#* . M#\n# ### #\n#. . X#\n#######";

// =============================================================================
// Startup
// =============================================================================

#[test]
fn test_parse_errors_are_fatal() {
    assert!(matches!(Game::from_text(""), Err(ParseError::MalformedShape(_))));
    assert_eq!(
        Game::from_text("#####\n#* .#\n#####").unwrap_err(),
        ParseError::MissingActor(Actor::Minotaur)
    );
    assert!(matches!(
        Game::from_text("#######\n#* M *#\n#######"),
        Err(ParseError::DuplicateActor { actor: Actor::Player, .. })
    ));
}

#[test]
fn test_games_share_one_maze() {
    let maze = Arc::new(Maze::parse(DETOUR).unwrap());
    let mut first = Game::new(Arc::clone(&maze));
    let second = Game::new(Arc::clone(&maze));

    first.apply_move(Direction::South).unwrap();

    assert_eq!(first.turn(), 1);
    assert_eq!(second.turn(), 0);
    assert_eq!(second.player(), maze.player_start());
}

#[test]
fn test_game_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Game>();
    assert_send_sync::<Maze>();
}

#[test]
fn test_custom_symbols() {
    let config = GameConfig::default()
        .with_symbols(MazeSymbols::default().with_actors('T', 'm').with_exit('G'))
        .with_replay_delimiter(',');
    let mut game = Game::from_text_with_config("#########\n#T . G#m#\n#########", config).unwrap();

    let replay = game.replay_str("e,e").unwrap();

    assert_eq!(replay.outcome, Outcome::Won);
    assert_eq!(game.to_string(), "#########\n#. . T#m#\n#########\nMoves: ee");
}

// =============================================================================
// Turn Resolution
// =============================================================================

#[test]
fn test_walled_example_maze() {
    // Cells: (0,0)* (0,1). / (1,0). (1,1)M, walls between the columns
    let mut game = Game::from_text("#*#.#\n# # #\n#.#M#").unwrap();

    let turn = game.apply_move(Direction::East).unwrap();

    // East is walled; the turn still counts
    assert_eq!(turn.player_move, MoveResult::Blocked);
    assert_eq!(game.player(), Cell::new(0, 0));
    assert_eq!(game.history().len(), 1);

    // Horizontal is walled for the minotaur too, so it closes in vertically
    assert_eq!(
        turn.chase,
        Some([
            Step::Moved { direction: Direction::North, to: Cell::new(0, 1) },
            Step::Stayed(Cell::new(0, 1)),
        ])
    );
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_stepping_toward_minotaur_loses() {
    let mut game = Game::from_text("#######\n#* . M#\n#######").unwrap();

    let turn = game.apply_move(Direction::East).unwrap();

    assert_eq!(
        turn.chase.map(|steps| steps[0]),
        Some(Step::Moved { direction: Direction::West, to: Cell::new(0, 1) })
    );
    assert_eq!(game.outcome(), Outcome::Lost);
    assert_eq!(game.minotaur(), game.player());
}

#[test]
fn test_moving_onto_minotaur_loses() {
    let mut game = Game::from_text("#######\n#* M .#\n#######").unwrap();

    let turn = game.apply_move(Direction::East).unwrap();

    assert_eq!(turn.player_move, MoveResult::Moved(Cell::new(0, 1)));
    assert_eq!(turn.minotaur, Cell::new(0, 1));
    assert_eq!(game.outcome(), Outcome::Lost);
}

#[test]
fn test_replay_to_exit_wins() {
    let mut game = Game::from_text(DETOUR).unwrap();

    let replay = game.replay_str("s;e;e").unwrap();

    assert_eq!(replay, Replay { applied: 3, outcome: Outcome::Won });
    assert_eq!(game.player(), Cell::new(1, 2));
    assert_ne!(game.minotaur(), game.player());
    assert_eq!(game.move_history(), "see");
}

#[test]
fn test_win_skips_minotaur_turn() {
    let mut game = Game::from_text(DETOUR).unwrap();
    game.replay_str("s;e").unwrap();
    let minotaur_before = game.minotaur();

    let turn = game.apply_move(Direction::East).unwrap();

    assert_eq!(turn.outcome, Outcome::Won);
    assert_eq!(turn.chase, None);
    assert_eq!(game.minotaur(), minotaur_before);
}

#[test]
fn test_replay_stops_at_win() {
    let mut game = Game::from_text(DETOUR).unwrap();

    let replay = game.replay_str("s e e w w").unwrap();

    assert_eq!(replay.applied, 3);
    assert_eq!(game.move_history(), "see");
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::from_text(DETOUR).unwrap();
    game.replay_str("see").unwrap();

    assert_eq!(game.apply_move(Direction::West), Err(GameError::GameOver(Outcome::Won)));
    assert_eq!(game.apply_symbol('d'), Err(GameError::GameOver(Outcome::Won)));
    assert_eq!(game.replay_str("d"), Err(GameError::GameOver(Outcome::Won)));
    assert_eq!(game.turn(), 3);

    game.restart();
    assert!(game.apply_move(Direction::South).is_ok());
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_on_fresh_game() {
    let mut game = Game::from_text(DETOUR).unwrap();

    assert_eq!(game.undo(), Err(GameError::UndoUnderflow));
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.player(), game.maze().player_start());
    assert_eq!(game.minotaur(), game.maze().minotaur_start());
}

#[test]
fn test_undo_reverts_win() {
    let mut game = Game::from_text(DETOUR).unwrap();
    game.replay_str("see").unwrap();

    let record = game.undo().unwrap();

    assert_eq!(record.direction, Direction::East);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.player(), Cell::new(1, 1));
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_undo_all_returns_to_start() {
    let mut game = Game::from_text(DETOUR).unwrap();
    game.replay_str("s;e").unwrap();
    assert_eq!(game.outcome(), Outcome::InProgress);

    while game.can_undo() {
        game.undo().unwrap();
    }

    assert_eq!(game.player(), game.maze().player_start());
    assert_eq!(game.minotaur(), game.maze().minotaur_start());
    assert_eq!(game.turn(), 0);
    assert_eq!(game.undo(), Err(GameError::UndoUnderflow));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_commands_same_game() {
    let commands = "d;s;e;n;w;d";
    let mut a = Game::from_text(DETOUR).unwrap();
    let mut b = Game::from_text(DETOUR).unwrap();

    a.replay_str(commands).unwrap();
    b.replay_str(commands).unwrap();

    assert_eq!(a.player(), b.player());
    assert_eq!(a.minotaur(), b.minotaur());
    assert_eq!(a.outcome(), b.outcome());
    assert_eq!(a.history(), b.history());
}

#[test]
fn test_chase_matches_game_turn() {
    let maze = Maze::parse(DETOUR).unwrap();
    let mut game = Game::new(Arc::new(maze.clone()));

    let turn = game.apply_move(Direction::South).unwrap();
    let expected = chase(&maze, maze.minotaur_start(), Cell::new(1, 0));

    assert_eq!(turn.chase, Some(expected));
}

// =============================================================================
// Solver
// =============================================================================

#[test]
fn test_solver_solution_wins() {
    let mut game = Game::from_text(DETOUR).unwrap();
    let solution = game.solve().unwrap();

    let replay = game.replay(solution.iter().copied()).unwrap();

    assert_eq!(replay.outcome, Outcome::Won);
    assert_eq!(replay.applied, solution.len());
}

#[test]
fn test_solver_from_midgame() {
    let mut game = Game::from_text(DETOUR).unwrap();
    game.apply_move(Direction::South).unwrap();

    let solution = game.solve().unwrap();
    assert_eq!(solution, vec![Direction::East, Direction::East]);
}

#[test]
fn test_solver_on_finished_game() {
    let mut game = Game::from_text(DETOUR).unwrap();
    game.replay_str("see").unwrap();

    assert_eq!(game.solve(), None);
}
