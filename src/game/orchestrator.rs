//! `MemoryGame`: one sequence engine, one direction source, one observer.
//!
//! Each operation drives the engine and then reports what happened to the
//! attached observer. The game holds no copy of the sequence; observers
//! receive read-only snapshots.

use crate::core::{Direction, DirectionSource, GameConfig, RandomDirections};
use crate::engine::{Evaluation, Outcome, Phase, SequenceEngine};
use crate::error::{GameError, GameResult};

use super::observer::GameObserver;

/// A single sequence-memory game.
///
/// ## Example
///
/// ```
/// use memory_swipe::core::{Direction, ScriptedDirections};
/// use memory_swipe::engine::Outcome;
/// use memory_swipe::game::{notification_queue, MemoryGame};
///
/// let source = ScriptedDirections::new(vec![Direction::Up]).unwrap();
/// let mut game = MemoryGame::new(10, source);
/// let (tx, rx) = notification_queue(16);
/// game.set_observer(tx);
///
/// game.prepare_next_round().unwrap();
/// game.begin_recall_phase();
/// let eval = game.submit_input(Direction::Up);
///
/// assert_eq!(eval.outcome, Outcome::Completed);
/// assert_eq!(rx.try_iter().count(), 3);
/// ```
pub struct MemoryGame<S> {
    engine: SequenceEngine,
    source: S,
    max_length: usize,
    observer: Option<Box<dyn GameObserver>>,
}

impl MemoryGame<RandomDirections> {
    /// Build a game over a random source configured by `config`.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => RandomDirections::new(seed),
            None => RandomDirections::from_entropy(),
        };
        Ok(Self::new(config.max_length, source))
    }
}

impl<S: DirectionSource> MemoryGame<S> {
    /// Create a game. `max_length` of 0 leaves the sequence unbounded.
    pub fn new(max_length: usize, source: S) -> Self {
        Self {
            engine: SequenceEngine::new(),
            source,
            max_length,
            observer: None,
        }
    }

    /// Attach an observer, replacing any previous one.
    pub fn set_observer<O: GameObserver + 'static>(&mut self, observer: O) {
        self.observer = Some(Box::new(observer));
    }

    /// Detach and return the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn GameObserver>> {
        self.observer.take()
    }

    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Clear the sequence and notify `game_reset`.
    pub fn reset_game(&mut self) {
        self.engine.reset();
        tracing::info!("game reset");
        if let Some(observer) = self.observer.as_mut() {
            observer.game_reset();
        }
    }

    /// Draw a direction, append it and notify `round_prepared`.
    ///
    /// Meant to be called while building; calling it mid-recall abandons
    /// the recall. Returns the newly drawn direction.
    pub fn prepare_next_round(&mut self) -> GameResult<Direction> {
        let observer = self.observer.as_mut().ok_or(GameError::ObserverNotAttached)?;

        let newest = self.source.next_direction();
        self.engine.append_direction(newest, self.max_length);
        tracing::debug!(%newest, length = self.engine.len(), "round prepared");

        observer.round_prepared(self.engine.sequence(), newest);
        Ok(newest)
    }

    /// Arm the recall and notify `recall_ready`.
    pub fn begin_recall_phase(&mut self) {
        self.engine.begin_recall();
        let length = self.engine.len();
        tracing::debug!(length, phase = %self.engine.phase(), "recall phase started");
        if let Some(observer) = self.observer.as_mut() {
            observer.recall_ready(length);
        }
    }

    /// Evaluate a direction and notify the matching observer method.
    ///
    /// `Ignored` outcomes notify nothing. An `Incorrect` outcome notifies
    /// `incorrect_input` followed by `game_over`. The evaluation is returned
    /// either way.
    pub fn submit_input(&mut self, direction: Direction) -> Evaluation {
        let eval = self.engine.evaluate_input(direction);

        match eval.outcome {
            Outcome::Ignored => tracing::trace!(%direction, "input ignored"),
            Outcome::Incorrect => tracing::info!(
                expected = ?eval.expected,
                received = %direction,
                progress = eval.progress,
                length = eval.sequence_length,
                "game over"
            ),
            Outcome::Correct | Outcome::Completed => tracing::debug!(
                outcome = ?eval.outcome,
                progress = eval.progress,
                length = eval.sequence_length,
                "input evaluated"
            ),
        }

        let Some(observer) = self.observer.as_mut() else {
            return eval;
        };
        match eval.outcome {
            Outcome::Correct => observer.correct_input(eval.progress, eval.sequence_length),
            Outcome::Completed => observer.sequence_completed(eval.sequence_length),
            Outcome::Incorrect => {
                // The engine only reports a mismatch while it is waiting for a direction.
                debug_assert!(
                    eval.expected.is_some(),
                    "incorrect evaluation without an expected direction"
                );
                if let Some(expected) = eval.expected {
                    observer.incorrect_input(
                        expected,
                        eval.received,
                        eval.progress,
                        eval.sequence_length,
                    );
                }
                observer.game_over(eval.sequence_length);
            }
            Outcome::Ignored => {}
        }
        eval
    }

    /// The current sequence, oldest first.
    #[must_use]
    pub fn current_sequence(&self) -> &[Direction] {
        self.engine.sequence()
    }

    #[must_use]
    pub fn is_recall_active(&self) -> bool {
        self.engine.is_recall_active()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    #[must_use]
    pub fn recall_progress(&self) -> usize {
        self.engine.recall_progress()
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Read-only view of the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &SequenceEngine {
        &self.engine
    }
}

impl<S> std::fmt::Debug for MemoryGame<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("engine", &self.engine)
            .field("max_length", &self.max_length)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
