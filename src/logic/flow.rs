//! Match flow: the phase state machine around the turn resolver.
//!
//! Setup actions return errors (see [`GameError`]); in-play actions called
//! out of phase are defensive no-ops so a confused caller cannot corrupt
//! match state.

use crate::logic::turn::resolve_turn;
use crate::models::{DartThrow, Game, GameError, GamePhase, UndoStack};
use chrono::Utc;

/// Start the match: Setup -> Playing. Requires at least two players.
pub fn start_game(game: &mut Game, undo: &mut UndoStack) -> Result<(), GameError> {
    if game.phase != GamePhase::Setup {
        return Err(GameError::InvalidState);
    }
    if game.players.len() < 2 {
        return Err(GameError::NotEnoughPlayers);
    }
    game.current_leg = 1;
    game.active_player_index = 0;
    game.started_at = Utc::now();
    undo.clear();
    game.phase = GamePhase::Playing;
    log::info!(
        "Match started: {} players, first to {} leg(s)",
        game.players.len(),
        game.total_legs / 2 + 1
    );
    Ok(())
}

/// Submit the active player's three darts. No-op outside Playing.
///
/// A pre-turn snapshot is pushed for undo before anything is applied. On a
/// winning turn the leg is credited and the match either finishes (first to
/// a majority of `total_legs`) or parks in LegFinished for `next_leg`.
pub fn submit_turn(game: &mut Game, undo: &mut UndoStack, darts: [DartThrow; 3]) {
    if game.phase != GamePhase::Playing {
        log::debug!("submit_turn ignored in phase {:?}", game.phase);
        return;
    }
    let Some(player) = game.active_player() else {
        return;
    };
    let prior_score = player.score;
    undo.push(game.clone());

    let outcome = resolve_turn(prior_score, game.finish_mode, darts, game.current_leg);
    let legs_to_win = game.total_legs / 2 + 1;

    let Some(player) = game.active_player_mut() else {
        return;
    };
    player.score = outcome.new_score;
    player.turns.push(outcome.record);

    if outcome.is_win {
        player.legs_won += 1;
        let id = player.id;
        let name = player.name.clone();
        let legs_won = player.legs_won;
        if legs_won >= legs_to_win {
            game.winner = Some(id);
            game.finished_at = Some(Utc::now());
            game.phase = GamePhase::Finished;
            log::info!("{} wins the match with {} leg(s)", name, legs_won);
        } else {
            game.leg_winner = Some(id);
            game.phase = GamePhase::LegFinished;
            log::info!("{} wins leg {}", name, game.current_leg);
        }
        return;
    }

    if outcome.is_bust {
        log::debug!(
            "{} busted on {}, score stays at {}",
            player.name,
            outcome.record.total,
            prior_score
        );
    }
    game.active_player_index = (game.active_player_index + 1) % game.players.len();
}

/// Advance to the next leg: LegFinished -> Playing. No-op in any other phase.
/// Scores reset to the starting score; history and legs won are kept. Undo
/// history does not cross the leg boundary.
pub fn next_leg(game: &mut Game, undo: &mut UndoStack) {
    if game.phase != GamePhase::LegFinished {
        log::debug!("next_leg ignored in phase {:?}", game.phase);
        return;
    }
    game.current_leg += 1;
    for p in &mut game.players {
        p.reset_for_leg();
    }
    game.active_player_index = 0;
    game.leg_winner = None;
    undo.clear();
    game.phase = GamePhase::Playing;
}

/// Roll the whole match state back to the snapshot taken before the most
/// recent submitted turn. No-op when the history is empty.
pub fn undo_turn(game: &mut Game, undo: &mut UndoStack) {
    if let Some(snapshot) = undo.pop() {
        *game = snapshot;
    }
}

/// Rematch with the same players and settings: scores, history, and legs won
/// all return to starting values and play begins at leg 1. No-op in Setup.
pub fn reset_game(game: &mut Game, undo: &mut UndoStack) {
    if game.phase == GamePhase::Setup {
        return;
    }
    for p in &mut game.players {
        p.reset_for_match();
    }
    game.current_leg = 1;
    game.active_player_index = 0;
    game.winner = None;
    game.leg_winner = None;
    game.finished_at = None;
    game.started_at = Utc::now();
    undo.clear();
    game.phase = GamePhase::Playing;
}

/// Abandon the match entirely and return to Setup with no players.
pub fn new_game(game: &mut Game, undo: &mut UndoStack) {
    game.players.clear();
    game.current_leg = 1;
    game.active_player_index = 0;
    game.winner = None;
    game.leg_winner = None;
    game.finished_at = None;
    undo.clear();
    game.phase = GamePhase::Setup;
}
