//! Sequence engine integration tests.
//!
//! Covers the sliding-window bound, the recall state machine, and the
//! end-to-end scenarios for eviction, completion and failure.

use memory_swipe::core::Direction;
use memory_swipe::engine::{Evaluation, Outcome, Phase, SequenceEngine};
use proptest::prelude::*;

use Direction::{Down, Left, Right, Up};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn engine_with(dirs: &[Direction]) -> SequenceEngine {
    let mut engine = SequenceEngine::new();
    for &dir in dirs {
        engine.append_direction(dir, 0);
    }
    engine
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_sliding_window_scenario() {
    let mut engine = SequenceEngine::new();
    for dir in [Up, Down, Left] {
        engine.append_direction(dir, 3);
    }
    assert_eq!(engine.sequence(), &[Up, Down, Left]);

    engine.append_direction(Right, 3);
    assert_eq!(engine.sequence(), &[Down, Left, Right]);
}

#[test]
fn test_completion_scenario() {
    let mut engine = engine_with(&[Up, Down]);
    engine.begin_recall();

    let first = engine.evaluate_input(Up);
    assert_eq!(first, Evaluation::correct(2, 1, Up, Up));

    let second = engine.evaluate_input(Down);
    assert_eq!(second.outcome, Outcome::Completed);
    assert_eq!(second.sequence_length, 2);
    assert_eq!(second.progress, 2);

    let third = engine.evaluate_input(Up);
    assert_eq!(third.outcome, Outcome::Ignored);
}

#[test]
fn test_failure_scenario() {
    let mut engine = engine_with(&[Left, Right]);
    engine.begin_recall();

    let eval = engine.evaluate_input(Up);
    assert_eq!(eval.outcome, Outcome::Incorrect);
    assert_eq!(eval.expected, Some(Left));
    assert_eq!(eval.received, Up);
    assert_eq!(eval.progress, 0);
    assert_eq!(eval.sequence_length, 2);
    assert_eq!(engine.phase(), Phase::GameOver);

    assert_eq!(engine.evaluate_input(Left).outcome, Outcome::Ignored);
}

#[test]
fn test_fresh_engine_ignores_input() {
    let mut engine = SequenceEngine::new();
    let eval = engine.evaluate_input(Down);

    assert_eq!(eval.outcome, Outcome::Ignored);
    assert_eq!(eval.sequence_length, 0);
    assert_eq!(eval.progress, 0);
    assert_eq!(eval.expected, None);
    assert_eq!(eval.received, Down);
}

#[test]
fn test_new_round_after_game_over() {
    let mut engine = engine_with(&[Up]);
    engine.begin_recall();
    engine.evaluate_input(Down);
    assert!(engine.is_game_over());

    engine.append_direction(Left, 0);
    engine.begin_recall();
    assert_eq!(engine.evaluate_input(Up).outcome, Outcome::Correct);
    assert_eq!(engine.evaluate_input(Left).outcome, Outcome::Completed);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_bound_and_newest_last(
        max_length in 1usize..8,
        dirs in prop::collection::vec(direction(), 1..40),
    ) {
        let mut engine = SequenceEngine::new();
        for &dir in &dirs {
            engine.append_direction(dir, max_length);
            prop_assert!(engine.len() <= max_length);
            prop_assert_eq!(engine.sequence().last(), Some(&dir));
        }
    }

    #[test]
    fn prop_eviction_drops_index_zero(
        max_length in 1usize..6,
        dirs in prop::collection::vec(direction(), 1..30),
        next in direction(),
    ) {
        let mut engine = SequenceEngine::new();
        for &dir in &dirs {
            engine.append_direction(dir, max_length);
        }
        let before = engine.sequence().to_vec();

        engine.append_direction(next, max_length);

        let mut expected = before.clone();
        if before.len() == max_length {
            expected.remove(0);
        }
        expected.push(next);
        prop_assert_eq!(engine.sequence(), expected.as_slice());
    }

    #[test]
    fn prop_recall_progress_is_monotonic(dirs in prop::collection::vec(direction(), 1..20)) {
        let mut engine = engine_with(&dirs);
        engine.begin_recall();

        let n = dirs.len();
        for (i, &dir) in dirs.iter().enumerate() {
            let eval = engine.evaluate_input(dir);
            if i + 1 < n {
                prop_assert_eq!(eval.outcome, Outcome::Correct);
                prop_assert_eq!(eval.progress, i + 1);
            } else {
                prop_assert_eq!(eval.outcome, Outcome::Completed);
                prop_assert_eq!(eval.progress, n);
            }
        }
        prop_assert!(!engine.is_recall_active());
    }

    #[test]
    fn prop_wrong_input_keeps_progress(
        dirs in prop::collection::vec(direction(), 1..20),
        fail_at in any::<prop::sample::Index>(),
        later in direction(),
    ) {
        let k = fail_at.index(dirs.len());
        let mut engine = engine_with(&dirs);
        engine.begin_recall();
        for &dir in &dirs[..k] {
            engine.evaluate_input(dir);
        }

        let eval = engine.evaluate_input(dirs[k].opposite());
        prop_assert_eq!(eval.outcome, Outcome::Incorrect);
        prop_assert_eq!(eval.progress, k);
        prop_assert!(engine.is_game_over());

        let after = engine.evaluate_input(later);
        prop_assert_eq!(after.outcome, Outcome::Ignored);
    }

    #[test]
    fn prop_ignored_never_mutates(
        dirs in prop::collection::vec(direction(), 0..10),
        inputs in prop::collection::vec(direction(), 1..10),
    ) {
        let mut engine = engine_with(&dirs);
        let before = engine.clone();

        for &input in &inputs {
            prop_assert_eq!(engine.evaluate_input(input).outcome, Outcome::Ignored);
        }
        prop_assert_eq!(engine, before);
    }
}
