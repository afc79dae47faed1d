//! Player state and per-match aggregate statistics.

use crate::models::dart::{FinishMode, TurnRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player within a match.
pub type PlayerId = Uuid;

/// A player in the match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// 301 or 501; also the per-leg reset score.
    pub starting_score: u32,
    /// Running score in the current leg. Never negative; busted turns revert.
    pub score: u32,
    /// Chronological turn history across all legs of the match.
    pub turns: Vec<TurnRecord>,
    pub legs_won: u32,
}

impl Player {
    /// Create a new player at the given starting score.
    pub fn new(name: impl Into<String>, starting_score: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            starting_score,
            score: starting_score,
            turns: Vec::new(),
            legs_won: 0,
        }
    }

    /// Total darts thrown across the match (empty slots excluded).
    pub fn darts_thrown(&self) -> u32 {
        self.turns.iter().map(|t| t.darts_thrown).sum()
    }

    /// Number of busted turns.
    pub fn busts(&self) -> u32 {
        self.turns.iter().filter(|t| t.is_bust).count() as u32
    }

    /// Points per three darts. Busted turns contribute their darts but no points.
    pub fn three_dart_average(&self) -> f64 {
        let darts = self.darts_thrown();
        if darts == 0 {
            return 0.0;
        }
        let points: u32 = self
            .turns
            .iter()
            .filter(|t| !t.is_bust)
            .map(|t| t.total)
            .sum();
        f64::from(points) / f64::from(darts) * 3.0
    }

    /// Share of checkout chances converted, as a percentage. A chance is any
    /// turn begun from a score inside the finish mode's checkout range, or a
    /// turn that checked out (a simple-mode finish can start above the range,
    /// e.g. a 180-out from 180).
    pub fn checkout_percent(&self, mode: FinishMode) -> f64 {
        let range = mode.checkout_range();
        let attempts = self
            .turns
            .iter()
            .filter(|t| t.is_win || range.contains(&t.score_before()))
            .count();
        if attempts == 0 {
            return 0.0;
        }
        let hits = self.turns.iter().filter(|t| t.is_win).count();
        hits as f64 / attempts as f64 * 100.0
    }

    /// Back to the starting score for a fresh leg; history and legs won stay.
    pub(crate) fn reset_for_leg(&mut self) {
        self.score = self.starting_score;
    }

    /// Back to a blank slate for a rematch.
    pub(crate) fn reset_for_match(&mut self) {
        self.score = self.starting_score;
        self.turns.clear();
        self.legs_won = 0;
    }
}

/// Aggregate statistics view of a player (for summaries / display).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    /// Points per three darts over the whole match.
    pub average: f64,
    pub darts_thrown: u32,
    pub legs_won: u32,
    pub busts: u32,
    pub checkout_percent: f64,
}

impl PlayerSummary {
    pub fn from_player(p: &Player, mode: FinishMode) -> Self {
        Self {
            name: p.name.clone(),
            average: p.three_dart_average(),
            darts_thrown: p.darts_thrown(),
            legs_won: p.legs_won,
            busts: p.busts(),
            checkout_percent: p.checkout_percent(mode),
        }
    }
}
