//! Engine logic: turn resolution, match flow, checkout suggestions, ratings.

mod checkout;
mod flow;
mod rating;
mod turn;

pub use checkout::{suggest_checkout, suggest_for_active, Checkout, CheckoutDart};
pub use flow::{new_game, next_leg, reset_game, start_game, submit_turn, undo_turn};
pub use rating::{
    compute_match_deltas, compute_ratings, rounded, RatedMatch, INITIAL_RATING,
};
pub use turn::{resolve_turn, TurnOutcome};
