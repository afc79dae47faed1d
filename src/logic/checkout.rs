//! Checkout suggestions: what to throw to finish from the current score.
//!
//! Double mode uses a precomputed table over [2, 170]; simple mode runs a
//! small live search over single values. Both are deterministic: ties are
//! broken by fewest darts, then the highest first (and second) dart, then
//! the highest finishing dart.

use crate::models::{FinishMode, Game, GamePhase};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// One suggested throw. 50 is the bullseye, 25 the single bull; both carry
/// multiplier 1 here (a finishing bull is encoded as value 50).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckoutDart {
    pub value: u32,
    pub multiplier: u32,
}

impl CheckoutDart {
    fn single(value: u32) -> Self {
        Self {
            value,
            multiplier: 1,
        }
    }

    fn double(value: u32) -> Self {
        Self {
            value,
            multiplier: 2,
        }
    }

    fn triple(value: u32) -> Self {
        Self {
            value,
            multiplier: 3,
        }
    }

    /// Points this throw is worth.
    pub fn score(self) -> u32 {
        self.value * self.multiplier
    }

    /// Whether this throw may legally end a double-mode leg.
    pub fn is_finisher(self) -> bool {
        self.value == 50 || self.multiplier == 2
    }
}

impl fmt::Display for CheckoutDart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, self.multiplier) {
            (50, _) => write!(f, "Bull"),
            (v, 3) => write!(f, "T{}", v),
            (v, 2) => write!(f, "D{}", v),
            (v, _) => write!(f, "{}", v),
        }
    }
}

/// A suggested combination of up to three throws.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkout {
    pub darts: Vec<CheckoutDart>,
}

impl Checkout {
    pub fn total(&self) -> u32 {
        self.darts.iter().map(|d| d.score()).sum()
    }
}

impl fmt::Display for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.darts.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Suggest a finishing combination for `remaining` under `mode`, or None when
/// no checkout exists from that score.
pub fn suggest_checkout(remaining: u32, mode: FinishMode) -> Option<Checkout> {
    if !mode.checkout_range().contains(&remaining) {
        return None;
    }
    match mode {
        FinishMode::Double => double_out_table().get(&remaining).cloned(),
        FinishMode::Simple => simple_search(remaining),
    }
}

/// Checkout hint for the player about to throw. None outside Playing or when
/// their score has no checkout.
pub fn suggest_for_active(game: &Game) -> Option<Checkout> {
    if game.phase != GamePhase::Playing {
        return None;
    }
    let player = game.active_player()?;
    suggest_checkout(player.score, game.finish_mode)
}

/// Double-mode table over [2, 170], built once. Scores with no finish
/// (169, 168, 166, 165, 163, 162, 159) have no entry.
fn double_out_table() -> &'static HashMap<u32, Checkout> {
    static TABLE: OnceLock<HashMap<u32, Checkout>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let fillers = filler_candidates();
        let finishers = finisher_candidates();
        let mut table = HashMap::new();
        for score in 2..=170 {
            if let Some(c) = search_double_out(score, &fillers, &finishers) {
                table.insert(score, c);
            }
        }
        table
    })
}

/// Any scoring segment, in preference order for a non-final dart: higher
/// score first; at equal score a triple beats a single beats a double.
fn filler_candidates() -> Vec<CheckoutDart> {
    let mut out = Vec::new();
    for v in 1..=20 {
        out.push(CheckoutDart::triple(v));
        out.push(CheckoutDart::single(v));
        out.push(CheckoutDart::double(v));
    }
    out.push(CheckoutDart::single(50));
    out.push(CheckoutDart::single(25));
    let kind_rank = |d: &CheckoutDart| match (d.value, d.multiplier) {
        (_, 3) => 0,
        (25, _) | (50, _) => 3,
        (_, 1) => 1,
        _ => 2,
    };
    out.sort_by_key(|d| (std::cmp::Reverse(d.score()), kind_rank(d)));
    out
}

/// Legal finishing darts, highest first: bullseye, then D20 down to D1.
fn finisher_candidates() -> Vec<CheckoutDart> {
    let mut out = vec![CheckoutDart::single(50)];
    for v in (1..=20).rev() {
        out.push(CheckoutDart::double(v));
    }
    out
}

/// Exhaustive preference-ordered search: 1 dart, then 2, then 3, taking the
/// first combination found at each length.
fn search_double_out(
    score: u32,
    fillers: &[CheckoutDart],
    finishers: &[CheckoutDart],
) -> Option<Checkout> {
    for &f in finishers {
        if f.score() == score {
            return Some(Checkout { darts: vec![f] });
        }
    }
    for &a in fillers {
        if a.score() >= score {
            continue;
        }
        for &f in finishers {
            if a.score() + f.score() == score {
                return Some(Checkout { darts: vec![a, f] });
            }
        }
    }
    for &a in fillers {
        if a.score() >= score {
            continue;
        }
        for &b in fillers {
            if a.score() + b.score() >= score {
                continue;
            }
            for &f in finishers {
                if a.score() + b.score() + f.score() == score {
                    return Some(Checkout {
                        darts: vec![a, b, f],
                    });
                }
            }
        }
    }
    None
}

/// Values a simple-mode suggestion may use, in per-slot preference order:
/// singles high to low, then the bull, then the bullseye.
const SIMPLE_VALUES: [u32; 22] = [
    20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 25, 50,
];

/// Live search for a simple-mode finish: fewest darts, singles before bulls,
/// higher first and second values first.
fn simple_search(target: u32) -> Option<Checkout> {
    for &a in &SIMPLE_VALUES {
        if a == target {
            return Some(Checkout {
                darts: vec![CheckoutDart::single(a)],
            });
        }
    }
    for &a in &SIMPLE_VALUES {
        for &b in &SIMPLE_VALUES {
            if a + b == target {
                return Some(Checkout {
                    darts: vec![CheckoutDart::single(a), CheckoutDart::single(b)],
                });
            }
        }
    }
    for &a in &SIMPLE_VALUES {
        for &b in &SIMPLE_VALUES {
            if a + b >= target {
                continue;
            }
            for &c in &SIMPLE_VALUES {
                if a + b + c == target {
                    return Some(Checkout {
                        darts: vec![
                            CheckoutDart::single(a),
                            CheckoutDart::single(b),
                            CheckoutDart::single(c),
                        ],
                    });
                }
            }
        }
    }
    None
}
