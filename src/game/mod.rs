//! Game state machine.
//!
//! ## States
//!
//! ```text
//!              apply_move
//!   InProgress ──────────► Won | Lost
//!       ▲                      │
//!       └──── undo / restart ──┘
//! ```
//!
//! `apply_move` is only accepted while in progress. `undo` takes back the
//! latest turn from any state; `restart` returns to the start positions.

mod state;
mod turn;

pub use state::{parse_moves, Game, Replay};
pub use turn::{resolve_turn, Outcome, Turn, TurnRecord};
