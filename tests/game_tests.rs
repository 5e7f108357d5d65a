//! Orchestrator integration tests.
//!
//! These tests drive `MemoryGame` through full rounds and check the exact
//! notifications an observer receives.

use std::cell::RefCell;
use std::rc::Rc;

use memory_swipe::core::{Direction, RandomDirections, ScriptedDirections};
use memory_swipe::engine::Outcome;
use memory_swipe::game::{notification_queue, GameNotification, GameObserver, MemoryGame};
use memory_swipe::GameError;

use Direction::{Down, Left, Right, Up};

/// Observer that records notifications into a shared log.
#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<GameNotification>>>,
}

impl Recorder {
    fn drain(&self) -> Vec<GameNotification> {
        self.log.borrow_mut().drain(..).collect()
    }

    fn push(&self, notification: GameNotification) {
        self.log.borrow_mut().push(notification);
    }
}

impl GameObserver for Recorder {
    fn game_reset(&mut self) {
        self.push(GameNotification::GameReset);
    }

    fn round_prepared(&mut self, sequence: &[Direction], newest: Direction) {
        self.push(GameNotification::RoundPrepared {
            sequence: sequence.to_vec(),
            newest,
        });
    }

    fn recall_ready(&mut self, sequence_length: usize) {
        self.push(GameNotification::RecallReady { sequence_length });
    }

    fn correct_input(&mut self, progress: usize, sequence_length: usize) {
        self.push(GameNotification::CorrectInput { progress, sequence_length });
    }

    fn sequence_completed(&mut self, sequence_length: usize) {
        self.push(GameNotification::SequenceCompleted { sequence_length });
    }

    fn incorrect_input(
        &mut self,
        expected: Direction,
        received: Direction,
        progress: usize,
        sequence_length: usize,
    ) {
        self.push(GameNotification::IncorrectInput {
            expected,
            received,
            progress,
            sequence_length,
        });
    }

    fn game_over(&mut self, sequence_length: usize) {
        self.push(GameNotification::GameOver { sequence_length });
    }
}

fn game(script: &[Direction], max_length: usize) -> (MemoryGame<ScriptedDirections>, Recorder) {
    let source = ScriptedDirections::new(script.to_vec()).unwrap();
    let mut game = MemoryGame::new(max_length, source);
    let recorder = Recorder::default();
    game.set_observer(recorder.clone());
    (game, recorder)
}

// =============================================================================
// Round Flow
// =============================================================================

#[test]
fn test_full_game_notification_order() {
    let (mut game, recorder) = game(&[Up, Down], 10);

    game.reset_game();
    game.prepare_next_round().unwrap();
    game.begin_recall_phase();
    game.submit_input(Up);
    game.prepare_next_round().unwrap();
    game.begin_recall_phase();
    game.submit_input(Up);
    game.submit_input(Down);

    assert_eq!(
        recorder.drain(),
        vec![
            GameNotification::GameReset,
            GameNotification::RoundPrepared { sequence: vec![Up], newest: Up },
            GameNotification::RecallReady { sequence_length: 1 },
            GameNotification::SequenceCompleted { sequence_length: 1 },
            GameNotification::RoundPrepared { sequence: vec![Up, Down], newest: Down },
            GameNotification::RecallReady { sequence_length: 2 },
            GameNotification::CorrectInput { progress: 1, sequence_length: 2 },
            GameNotification::SequenceCompleted { sequence_length: 2 },
        ]
    );
}

#[test]
fn test_incorrect_then_ignored() {
    let (mut game, recorder) = game(&[Left, Right], 10);
    game.prepare_next_round().unwrap();
    game.prepare_next_round().unwrap();
    game.begin_recall_phase();
    recorder.drain();

    let eval = game.submit_input(Up);
    assert_eq!(eval.outcome, Outcome::Incorrect);
    assert_eq!(
        recorder.drain(),
        vec![
            GameNotification::IncorrectInput {
                expected: Left,
                received: Up,
                progress: 0,
                sequence_length: 2,
            },
            GameNotification::GameOver { sequence_length: 2 },
        ]
    );

    let ignored = game.submit_input(Left);
    assert_eq!(ignored.outcome, Outcome::Ignored);
    assert!(recorder.drain().is_empty());
}

#[test]
fn test_prepare_mid_recall_abandons_it() {
    let (mut game, _recorder) = game(&[Up, Down, Left], 10);
    game.prepare_next_round().unwrap();
    game.prepare_next_round().unwrap();
    game.begin_recall_phase();
    game.submit_input(Up);
    assert_eq!(game.recall_progress(), 1);

    game.prepare_next_round().unwrap();
    assert!(!game.is_recall_active());
    assert_eq!(game.recall_progress(), 0);
    assert_eq!(game.current_sequence(), &[Up, Down, Left]);
}

#[test]
fn test_max_length_applies_through_game() {
    let (mut game, recorder) = game(&[Up, Down, Left, Right], 3);
    for _ in 0..4 {
        game.prepare_next_round().unwrap();
    }

    assert_eq!(game.current_sequence(), &[Down, Left, Right]);
    let last = recorder.drain().pop();
    assert_eq!(
        last,
        Some(GameNotification::RoundPrepared {
            sequence: vec![Down, Left, Right],
            newest: Right,
        })
    );
}

#[test]
fn test_round_prepared_matches_engine() {
    let mut game = MemoryGame::new(5, RandomDirections::new(1234));
    let recorder = Recorder::default();
    game.set_observer(recorder.clone());

    for _ in 0..12 {
        let newest = game.prepare_next_round().unwrap();
        let notes = recorder.drain();
        assert_eq!(notes.len(), 1);

        match &notes[0] {
            GameNotification::RoundPrepared { sequence, newest: emitted } => {
                assert_eq!(sequence.as_slice(), game.current_sequence());
                assert_eq!(sequence.last(), Some(emitted));
                assert_eq!(*emitted, newest);
            }
            other => panic!("unexpected notification {:?}", other),
        }
    }
}

// =============================================================================
// Usage Errors
// =============================================================================

#[test]
fn test_prepare_without_observer_fails() {
    let source = ScriptedDirections::new(vec![Up]).unwrap();
    let mut game = MemoryGame::new(10, source);

    let err = game.prepare_next_round().unwrap_err();
    assert_eq!(err, GameError::ObserverNotAttached);
    assert_eq!(err.to_string(), "game observer has not been attached");
}

#[test]
fn test_channel_observer() {
    let source = ScriptedDirections::new(vec![Right]).unwrap();
    let mut game = MemoryGame::new(10, source);
    let (tx, rx) = notification_queue(16);
    game.set_observer(tx);

    game.prepare_next_round().unwrap();
    game.begin_recall_phase();
    game.submit_input(Right);

    let mut replayed = Recorder::default();
    for note in rx.try_iter() {
        note.dispatch(&mut replayed);
    }
    assert_eq!(
        replayed.drain(),
        vec![
            GameNotification::RoundPrepared { sequence: vec![Right], newest: Right },
            GameNotification::RecallReady { sequence_length: 1 },
            GameNotification::SequenceCompleted { sequence_length: 1 },
        ]
    );
}
