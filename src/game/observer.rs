//! Notification boundary between the game and its presentation.
//!
//! Presentations either implement `GameObserver` directly, one method per
//! notification, or attach the sending half of a `notification_queue` and
//! drain the receiving end on their own schedule. The queue is bounded; a
//! presentation that stops draining loses notifications, never memory.

use crossbeam_channel::{Receiver, Sender, TrySendError};

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Receives game notifications.
///
/// Calls are synchronous and fire-and-forget. Every method defaults to a
/// no-op so observers only override what they render.
pub trait GameObserver {
    /// The game was reset to an empty sequence.
    fn game_reset(&mut self) {}

    /// A direction was appended. `sequence` is a read-only snapshot whose
    /// last element is `newest`.
    fn round_prepared(&mut self, sequence: &[Direction], newest: Direction) {
        let _ = (sequence, newest);
    }

    /// Recall is armed; the player should reproduce `sequence_length`
    /// directions.
    fn recall_ready(&mut self, sequence_length: usize) {
        let _ = sequence_length;
    }

    fn correct_input(&mut self, progress: usize, sequence_length: usize) {
        let _ = (progress, sequence_length);
    }

    fn sequence_completed(&mut self, sequence_length: usize) {
        let _ = sequence_length;
    }

    /// Always followed by `game_over` within the same call.
    fn incorrect_input(
        &mut self,
        expected: Direction,
        received: Direction,
        progress: usize,
        sequence_length: usize,
    ) {
        let _ = (expected, received, progress, sequence_length);
    }

    fn game_over(&mut self, sequence_length: usize) {
        let _ = sequence_length;
    }
}

/// A notification as a value, for queue-based presentations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameNotification {
    GameReset,
    RoundPrepared {
        sequence: Vec<Direction>,
        newest: Direction,
    },
    RecallReady {
        sequence_length: usize,
    },
    CorrectInput {
        progress: usize,
        sequence_length: usize,
    },
    SequenceCompleted {
        sequence_length: usize,
    },
    IncorrectInput {
        expected: Direction,
        received: Direction,
        progress: usize,
        sequence_length: usize,
    },
    GameOver {
        sequence_length: usize,
    },
}

impl GameNotification {
    /// Replay this notification onto an observer.
    pub fn dispatch<O: GameObserver + ?Sized>(&self, observer: &mut O) {
        match self {
            GameNotification::GameReset => observer.game_reset(),
            GameNotification::RoundPrepared { sequence, newest } => {
                observer.round_prepared(sequence, *newest);
            }
            GameNotification::RecallReady { sequence_length } => {
                observer.recall_ready(*sequence_length);
            }
            GameNotification::CorrectInput { progress, sequence_length } => {
                observer.correct_input(*progress, *sequence_length);
            }
            GameNotification::SequenceCompleted { sequence_length } => {
                observer.sequence_completed(*sequence_length);
            }
            GameNotification::IncorrectInput {
                expected,
                received,
                progress,
                sequence_length,
            } => observer.incorrect_input(*expected, *received, *progress, *sequence_length),
            GameNotification::GameOver { sequence_length } => {
                observer.game_over(*sequence_length);
            }
        }
    }
}

/// Default capacity of a `notification_queue`.
pub const NOTIFICATION_QUEUE_CAPACITY: usize = 2048;

/// Create a bounded notification queue holding at most `capacity`
/// undrained notifications.
#[must_use]
pub fn notification_queue(
    capacity: usize,
) -> (Sender<GameNotification>, Receiver<GameNotification>) {
    crossbeam_channel::bounded(capacity)
}

fn send(sender: &Sender<GameNotification>, notification: GameNotification) {
    match sender.try_send(notification) {
        Ok(()) => {}
        Err(TrySendError::Full(dropped)) => {
            tracing::warn!(notification = ?dropped, "notification queue is full, dropping");
        }
        Err(TrySendError::Disconnected(dropped)) => {
            tracing::warn!(notification = ?dropped, "notification queue disconnected, dropping");
        }
    }
}

impl GameObserver for Sender<GameNotification> {
    fn game_reset(&mut self) {
        send(self, GameNotification::GameReset);
    }

    fn round_prepared(&mut self, sequence: &[Direction], newest: Direction) {
        send(
            self,
            GameNotification::RoundPrepared {
                sequence: sequence.to_vec(),
                newest,
            },
        );
    }

    fn recall_ready(&mut self, sequence_length: usize) {
        send(self, GameNotification::RecallReady { sequence_length });
    }

    fn correct_input(&mut self, progress: usize, sequence_length: usize) {
        send(self, GameNotification::CorrectInput { progress, sequence_length });
    }

    fn sequence_completed(&mut self, sequence_length: usize) {
        send(self, GameNotification::SequenceCompleted { sequence_length });
    }

    fn incorrect_input(
        &mut self,
        expected: Direction,
        received: Direction,
        progress: usize,
        sequence_length: usize,
    ) {
        send(
            self,
            GameNotification::IncorrectInput {
                expected,
                received,
                progress,
                sequence_length,
            },
        );
    }

    fn game_over(&mut self, sequence_length: usize) {
        send(self, GameNotification::GameOver { sequence_length });
    }
}
