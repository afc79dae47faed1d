//! Darts 301/501 scorekeeping engine: turn resolution and bust detection,
//! leg/match progression, checkout suggestions, and Elo ratings over saved
//! matches. UI and persistence live outside this crate and talk to it
//! through these types.

pub mod logic;
pub mod models;

pub use logic::{
    compute_match_deltas, compute_ratings, new_game, next_leg, reset_game, resolve_turn, rounded,
    start_game, submit_turn, suggest_checkout, suggest_for_active, undo_turn, Checkout,
    CheckoutDart, RatedMatch, TurnOutcome, INITIAL_RATING,
};
pub use models::{
    DartState, DartThrow, FinishMode, Game, GameError, GamePhase, GameType, MatchSummary, Player,
    PlayerId, PlayerSummary, TurnRecord, UndoStack, UNDO_CAPACITY,
};
