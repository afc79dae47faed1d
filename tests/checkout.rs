//! Checkout resolver: double-out table soundness and simple-mode search.

use dart_scorekeeper::{
    start_game, suggest_checkout, suggest_for_active, FinishMode, Game, GameType, UndoStack,
};

/// Scores in [2, 170] from which no double-out finish exists.
const NO_DOUBLE_FINISH: [u32; 7] = [159, 162, 163, 165, 166, 168, 169];

#[test]
fn double_table_is_sound_over_full_range() {
    for score in 2..=170 {
        match suggest_checkout(score, FinishMode::Double) {
            Some(c) => {
                assert_eq!(c.total(), score, "combination for {} sums wrong", score);
                assert!(c.darts.len() <= 3);
                let last = c.darts.last().unwrap();
                assert!(last.is_finisher(), "{} does not end on a double", score);
            }
            None => {
                assert!(
                    NO_DOUBLE_FINISH.contains(&score),
                    "{} unexpectedly has no checkout",
                    score
                );
            }
        }
    }
}

#[test]
fn double_impossible_scores_return_none() {
    for score in NO_DOUBLE_FINISH {
        assert_eq!(suggest_checkout(score, FinishMode::Double), None);
    }
}

#[test]
fn double_out_of_range_returns_none() {
    assert_eq!(suggest_checkout(0, FinishMode::Double), None);
    assert_eq!(suggest_checkout(1, FinishMode::Double), None);
    assert_eq!(suggest_checkout(171, FinishMode::Double), None);
}

#[test]
fn double_canonical_combinations() {
    let s = |score| suggest_checkout(score, FinishMode::Double).unwrap().to_string();
    assert_eq!(s(170), "T20 T20 Bull");
    assert_eq!(s(167), "T20 T19 Bull");
    assert_eq!(s(160), "T20 T20 D20");
    assert_eq!(s(158), "T20 T20 D19");
    assert_eq!(s(110), "T20 Bull");
    assert_eq!(s(100), "T20 D20");
    assert_eq!(s(50), "Bull");
    assert_eq!(s(40), "D20");
    assert_eq!(s(2), "D1");
}

/// Three values from {1..20, 25, 50} can reach any total in 1..=120 plus 125
/// and 150, and nothing else below 151.
fn simple_reachable(score: u32) -> bool {
    score <= 120 || score == 125 || score == 150
}

#[test]
fn simple_search_is_sound_over_full_range() {
    for score in 1..=150 {
        match suggest_checkout(score, FinishMode::Simple) {
            Some(c) => {
                assert!(simple_reachable(score));
                assert_eq!(c.total(), score);
                assert!(c.darts.len() <= 3);
                for dart in &c.darts {
                    assert_eq!(dart.multiplier, 1);
                    assert!(
                        (1..=20).contains(&dart.value) || dart.value == 25 || dart.value == 50,
                        "illegal simple value {}",
                        dart.value
                    );
                }
            }
            None => {
                assert!(
                    !simple_reachable(score),
                    "{} unexpectedly has no simple-mode suggestion",
                    score
                );
            }
        }
    }
}

#[test]
fn simple_out_of_range_returns_none() {
    assert_eq!(suggest_checkout(0, FinishMode::Simple), None);
    assert_eq!(suggest_checkout(151, FinishMode::Simple), None);
}

#[test]
fn simple_canonical_combinations() {
    let s = |score| suggest_checkout(score, FinishMode::Simple).unwrap().to_string();
    assert_eq!(s(1), "1");
    assert_eq!(s(20), "20");
    assert_eq!(s(25), "25");
    assert_eq!(s(40), "20 20");
    assert_eq!(s(45), "20 25");
    assert_eq!(s(150), "Bull Bull Bull");
}

#[test]
fn suggestions_are_deterministic() {
    for score in [2, 61, 100, 137, 170] {
        assert_eq!(
            suggest_checkout(score, FinishMode::Double),
            suggest_checkout(score, FinishMode::Double)
        );
    }
    for score in [1, 45, 99, 150] {
        assert_eq!(
            suggest_checkout(score, FinishMode::Simple),
            suggest_checkout(score, FinishMode::Simple)
        );
    }
}

#[test]
fn active_player_hint_follows_phase_and_score() {
    let mut game = Game::with_players(
        ["Ann", "Ben"],
        GameType::ThreeOhOne,
        FinishMode::Double,
        1,
    )
    .unwrap();
    // Not started yet
    assert_eq!(suggest_for_active(&game), None);

    let mut undo = UndoStack::new();
    start_game(&mut game, &mut undo).unwrap();
    // 301 is beyond any checkout
    assert_eq!(suggest_for_active(&game), None);

    game.active_player_mut().unwrap().score = 40;
    let hint = suggest_for_active(&game).unwrap();
    assert_eq!(hint.to_string(), "D20");
}
