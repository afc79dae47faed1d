//! Turn resolution: dart scoring, bust boundaries, and finish rules.

use dart_scorekeeper::{resolve_turn, DartThrow, FinishMode, GameError};

fn d(value: u32, multiplier: u32) -> DartThrow {
    DartThrow::scored(value, multiplier).unwrap()
}

#[test]
fn dart_scoring_contributions() {
    assert_eq!(d(20, 3).score(), 60);
    assert_eq!(d(20, 1).score(), 20);
    assert_eq!(d(25, 1).score(), 25);
    assert_eq!(d(25, 2).score(), 50);
    assert_eq!(d(50, 1).score(), 50);
    assert_eq!(DartThrow::miss().score(), 0);
    assert_eq!(DartThrow::empty().score(), 0);
}

#[test]
fn impossible_darts_are_rejected() {
    assert!(matches!(
        DartThrow::scored(50, 2),
        Err(GameError::InvalidDart { value: 50, multiplier: 2 })
    ));
    assert!(DartThrow::scored(25, 3).is_err());
    assert!(DartThrow::scored(21, 1).is_err());
    assert!(DartThrow::scored(0, 1).is_err());
    assert!(DartThrow::scored(20, 4).is_err());
    assert!(DartThrow::scored(20, 0).is_err());
}

#[test]
fn simple_exact_total_wins() {
    let out = resolve_turn(100, FinishMode::Simple, [d(20, 3), d(20, 1), d(20, 1)], 1);
    assert!(out.is_win);
    assert!(!out.is_bust);
    assert_eq!(out.new_score, 0);
    assert_eq!(out.record.total, 100);
}

#[test]
fn simple_overshoot_busts_and_reverts() {
    let out = resolve_turn(50, FinishMode::Simple, [d(20, 3), DartThrow::miss(), DartThrow::miss()], 1);
    assert!(out.is_bust);
    assert!(!out.is_win);
    assert_eq!(out.new_score, 50);
    assert_eq!(out.record.score_after, 50);
}

#[test]
fn simple_normal_progression() {
    let out = resolve_turn(100, FinishMode::Simple, [d(20, 1), d(20, 1), d(5, 1)], 1);
    assert!(!out.is_bust);
    assert!(!out.is_win);
    assert_eq!(out.new_score, 55);
}

#[test]
fn double_remainder_of_one_always_busts() {
    // 21 - 20 = 1, unreachable with a double finish
    let out = resolve_turn(21, FinishMode::Double, [d(20, 1), DartThrow::miss(), DartThrow::miss()], 1);
    assert!(out.is_bust);
    assert!(!out.is_win);
    assert_eq!(out.new_score, 21);
}

#[test]
fn double_finish_on_double_wins() {
    let out = resolve_turn(40, FinishMode::Double, [d(20, 2), DartThrow::empty(), DartThrow::empty()], 1);
    assert!(out.is_win);
    assert_eq!(out.new_score, 0);
    assert_eq!(out.record.darts_thrown, 1);
}

#[test]
fn double_reaching_zero_without_double_busts() {
    let out = resolve_turn(40, FinishMode::Double, [d(20, 1), d(20, 1), DartThrow::empty()], 1);
    assert!(out.is_bust);
    assert!(!out.is_win);
    assert_eq!(out.new_score, 40);
}

#[test]
fn double_bullseye_finish_wins() {
    let out = resolve_turn(50, FinishMode::Double, [d(50, 1), DartThrow::empty(), DartThrow::empty()], 1);
    assert!(out.is_win);
}

#[test]
fn double_bull_counts_as_double_finish() {
    let out = resolve_turn(90, FinishMode::Double, [d(20, 2), d(25, 2), DartThrow::empty()], 1);
    assert!(out.is_win);
}

#[test]
fn double_finish_skips_trailing_misses() {
    // Last scoring dart is the D20 even though two misses follow it
    let out = resolve_turn(40, FinishMode::Double, [d(20, 2), DartThrow::miss(), DartThrow::miss()], 1);
    assert!(out.is_win);
    assert_eq!(out.record.darts_thrown, 3);
}

#[test]
fn darts_thrown_counts_misses_but_not_empties() {
    let out = resolve_turn(100, FinishMode::Simple, [d(20, 1), DartThrow::miss(), DartThrow::empty()], 1);
    assert_eq!(out.record.darts_thrown, 2);
    assert_eq!(out.record.total, 20);
    assert_eq!(out.new_score, 80);
}

#[test]
fn record_derives_pre_turn_score() {
    let normal = resolve_turn(100, FinishMode::Simple, [d(20, 1), d(5, 1), DartThrow::empty()], 2);
    assert_eq!(normal.record.score_before(), 100);
    assert_eq!(normal.record.leg, 2);

    let bust = resolve_turn(20, FinishMode::Simple, [d(20, 3), DartThrow::empty(), DartThrow::empty()], 2);
    assert_eq!(bust.record.score_before(), 20);
}
