//! Dart throws, finish modes, game variants, and per-turn records.

use crate::models::game::GameError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Finish rule, fixed for the whole match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishMode {
    /// Any dart may bring the score to exactly zero.
    Simple,
    /// The final scoring dart of a winning turn must be a double or the bullseye.
    #[default]
    Double,
}

impl FinishMode {
    /// Scores from which a checkout suggestion can exist at all.
    pub fn checkout_range(self) -> RangeInclusive<u32> {
        match self {
            FinishMode::Simple => 1..=150,
            FinishMode::Double => 2..=170,
        }
    }
}

/// Game variant; fixes the starting score and the per-leg reset score.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "301")]
    ThreeOhOne,
    #[default]
    #[serde(rename = "501")]
    FiveOhOne,
}

impl GameType {
    pub fn starting_score(self) -> u32 {
        match self {
            GameType::ThreeOhOne => 301,
            GameType::FiveOhOne => 501,
        }
    }
}

/// Whether a dart slot was used and whether it scored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DartState {
    /// Slot never thrown (turn ended early).
    #[default]
    Empty,
    /// Thrown but scored nothing.
    Miss,
    /// Thrown and landed on a scoring segment.
    Scored,
}

/// One of the three dart slots in a turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DartThrow {
    /// Face value: 1-20, 25 (bull), or 50 (bullseye). 0 for empty/miss slots.
    pub value: u32,
    /// 1, 2, or 3. Bullseye (50) always carries 1; bull (25) carries 1 or 2.
    pub multiplier: u32,
    pub state: DartState,
}

impl Default for DartThrow {
    fn default() -> Self {
        Self::empty()
    }
}

impl DartThrow {
    /// A slot that was never thrown.
    pub fn empty() -> Self {
        Self {
            value: 0,
            multiplier: 1,
            state: DartState::Empty,
        }
    }

    /// A thrown dart that scored nothing.
    pub fn miss() -> Self {
        Self {
            value: 0,
            multiplier: 1,
            state: DartState::Miss,
        }
    }

    /// A scoring dart. Rejects combinations that cannot occur on a board:
    /// values outside 1-20/25/50, a multiplied bullseye, a trebled bull,
    /// or a multiplier outside 1-3.
    pub fn scored(value: u32, multiplier: u32) -> Result<Self, GameError> {
        let valid = match value {
            50 => multiplier == 1,
            25 => multiplier == 1 || multiplier == 2,
            1..=20 => (1..=3).contains(&multiplier),
            _ => false,
        };
        if !valid {
            return Err(GameError::InvalidDart { value, multiplier });
        }
        Ok(Self {
            value,
            multiplier,
            state: DartState::Scored,
        })
    }

    /// Points this dart contributes to the turn total.
    pub fn score(&self) -> u32 {
        match self.state {
            DartState::Empty | DartState::Miss => 0,
            DartState::Scored => match (self.value, self.multiplier) {
                (50, _) => 50,
                (25, 2) => 50,
                (25, _) => 25,
                (v, m) => v * m,
            },
        }
    }

    /// Whether the slot was actually used (miss counts, empty does not).
    pub fn is_thrown(&self) -> bool {
        self.state != DartState::Empty
    }
}

/// Immutable record of one completed turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub darts: [DartThrow; 3],
    /// Sum of the three darts' scoring contributions.
    pub total: u32,
    /// Score after the turn; equals the pre-turn score if the turn busted.
    pub score_after: u32,
    pub is_bust: bool,
    pub is_win: bool,
    /// Darts actually thrown (non-empty slots); used for 3-dart averages.
    pub darts_thrown: u32,
    /// Leg this turn was played in (1-based).
    pub leg: u32,
}

impl TurnRecord {
    /// Score the player stood at before this turn.
    pub fn score_before(&self) -> u32 {
        if self.is_bust {
            self.score_after
        } else {
            self.score_after + self.total
        }
    }
}
