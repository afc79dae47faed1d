//! Data structures for the scorekeeper: darts, players, match state, undo history.

mod dart;
mod game;
mod player;
mod undo;

pub use dart::{DartState, DartThrow, FinishMode, GameType, TurnRecord};
pub use game::{Game, GameError, GamePhase, MatchSummary};
pub use player::{Player, PlayerId, PlayerSummary};
pub use undo::{UndoStack, UNDO_CAPACITY};
