//! Turn resolution: dart totals, bust detection, win detection.

use crate::models::{DartThrow, FinishMode, TurnRecord};

/// Outcome of resolving one submitted turn. The caller applies it to the
/// active player; resolution itself has no side effects.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TurnOutcome {
    /// Player's score after the turn (pre-turn score if busted).
    pub new_score: u32,
    pub is_bust: bool,
    pub is_win: bool,
    pub record: TurnRecord,
}

/// Resolve three darts against `prior_score`.
///
/// Simple mode: bust on overshoot, win on exactly zero.
///
/// Double mode: bust on overshoot or on a remainder of exactly 1 (no double
/// can finish from 1). A turn reaching zero wins only if the last scoring
/// dart is a double or the bullseye; reaching zero any other way busts, same
/// as an overshoot.
pub fn resolve_turn(
    prior_score: u32,
    finish_mode: FinishMode,
    darts: [DartThrow; 3],
    leg: u32,
) -> TurnOutcome {
    let total: u32 = darts.iter().map(|d| d.score()).sum();
    let candidate = i64::from(prior_score) - i64::from(total);

    let (is_bust, is_win) = match finish_mode {
        FinishMode::Simple => (candidate < 0, candidate == 0),
        FinishMode::Double => {
            if candidate < 0 || candidate == 1 {
                (true, false)
            } else if candidate == 0 {
                if finishes_on_double(&darts) {
                    (false, true)
                } else {
                    (true, false)
                }
            } else {
                (false, false)
            }
        }
    };

    let new_score = if is_bust { prior_score } else { candidate as u32 };
    let darts_thrown = darts.iter().filter(|d| d.is_thrown()).count() as u32;

    TurnOutcome {
        new_score,
        is_bust,
        is_win,
        record: TurnRecord {
            darts,
            total,
            score_after: new_score,
            is_bust,
            is_win,
            darts_thrown,
            leg,
        },
    }
}

/// The last dart with a nonzero contribution (scanning from the third slot
/// backward past empties and misses) must be a double or the bullseye.
fn finishes_on_double(darts: &[DartThrow; 3]) -> bool {
    darts
        .iter()
        .rev()
        .find(|d| d.score() > 0)
        .map(|d| d.multiplier == 2 || d.value == 50)
        .unwrap_or(false)
}
