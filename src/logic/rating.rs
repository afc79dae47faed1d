//! Elo ratings over the saved match history.
//!
//! Ratings are keyed by player name so they survive across matches, seeded
//! at 1500 the first time a name appears. The update rule is the one the
//! existing saved ratings were produced with: every opponent of the winner
//! loses `K * (1 - expected_win)` against the winner's pre-match rating, and
//! the winner gains the sum of those amounts. Results depend on match order,
//! so histories are sorted by finish time before processing.

use crate::models::MatchSummary;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Rating assigned to a player the first time their name is seen.
pub const INITIAL_RATING: f64 = 1500.0;

/// Sensitivity of a single result.
const K_FACTOR: f64 = 32.0;

/// Minimal view of a finished match for rating purposes.
#[derive(Clone, Debug, PartialEq)]
pub struct RatedMatch {
    /// None when the record carries no usable winner; such matches are skipped.
    pub winner: Option<String>,
    pub players: Vec<String>,
    pub finished_at: DateTime<Utc>,
}

impl From<&MatchSummary> for RatedMatch {
    fn from(s: &MatchSummary) -> Self {
        Self {
            winner: Some(s.winner_name.clone()),
            players: s.players.iter().map(|p| p.name.clone()).collect(),
            finished_at: s.finished_at,
        }
    }
}

/// Probability that `winner` beats `opponent` under the Elo curve.
fn expected_win(winner: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf((opponent - winner) / 400.0))
}

/// Compute ratings over the full match history.
///
/// Matches are sorted by finish time (stable, so equal timestamps keep their
/// input order) and applied one by one. Matches with no winner or no players
/// contribute nothing.
pub fn compute_ratings(matches: &[RatedMatch]) -> HashMap<String, f64> {
    let mut ordered: Vec<&RatedMatch> = matches.iter().collect();
    ordered.sort_by_key(|m| m.finished_at);

    let mut ratings = HashMap::new();
    for m in ordered {
        apply_match(&mut ratings, m);
    }
    ratings
}

/// Apply one match to the running ratings.
///
/// Opponent updates all use the winner's rating as it stood before the match;
/// the winner's own rating moves once, after every pairing is computed, so
/// the loop order over opponents cannot change the result.
fn apply_match(ratings: &mut HashMap<String, f64>, m: &RatedMatch) {
    let Some(winner) = m.winner.as_deref() else {
        return;
    };
    if m.players.is_empty() {
        return;
    }
    for name in &m.players {
        ratings.entry(name.clone()).or_insert(INITIAL_RATING);
    }
    ratings.entry(winner.to_string()).or_insert(INITIAL_RATING);

    let winner_rating = ratings[winner];
    let mut winner_delta = 0.0;
    for name in &m.players {
        if name == winner {
            continue;
        }
        let e = expected_win(winner_rating, ratings[name.as_str()]);
        let swing = K_FACTOR * (1.0 - e);
        winner_delta += swing;
        if let Some(r) = ratings.get_mut(name.as_str()) {
            *r -= swing;
        }
    }
    if let Some(r) = ratings.get_mut(winner) {
        *r += winner_delta;
    }
}

/// Preview the rating swing a single result would cause, without committing
/// it. Names missing from `ratings` fall back to 1500. Returns the signed
/// delta per player (winner included).
pub fn compute_match_deltas(
    ratings: &HashMap<String, f64>,
    players: &[String],
    winner_name: &str,
) -> HashMap<String, f64> {
    let rating_of = |name: &str| ratings.get(name).copied().unwrap_or(INITIAL_RATING);
    let winner_rating = rating_of(winner_name);

    let mut deltas = HashMap::new();
    let mut winner_delta = 0.0;
    for name in players {
        if name == winner_name {
            continue;
        }
        let e = expected_win(winner_rating, rating_of(name));
        let swing = K_FACTOR * (1.0 - e);
        winner_delta += swing;
        deltas.insert(name.clone(), -swing);
    }
    deltas.insert(winner_name.to_string(), winner_delta);
    deltas
}

/// Ratings rounded to whole numbers for display. Internal accumulation stays
/// in floating point; rounding happens only here.
pub fn rounded(ratings: &HashMap<String, f64>) -> HashMap<String, i64> {
    ratings
        .iter()
        .map(|(name, r)| (name.clone(), r.round() as i64))
        .collect()
}
