//! Sequence engine: the bounded direction sequence and the recall state
//! machine.
//!
//! ## States
//!
//! - `Building`: initial state, and the state after `reset` or a completed
//!   recall. Input is ignored.
//! - `RecallActive`: the player is reproducing the sequence; `cursor`
//!   counts the directions reproduced so far.
//! - `GameOver`: a wrong direction was submitted. Input is ignored until
//!   `reset` or the next `append_direction`.
//!
//! The engine performs no I/O and knows nothing about timing or input
//! devices, so any presentation can drive it deterministically.

use serde::{Deserialize, Serialize};

use super::evaluation::Evaluation;
use crate::core::Direction;

/// Recall phase of a `SequenceEngine`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Building,
    RecallActive,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Building => "building",
            Phase::RecallActive => "recall",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Owns the direction sequence and the recall cursor.
///
/// The sequence is a sliding window: appending past `max_length` drops the
/// oldest direction, so the newest is always last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceEngine {
    sequence: Vec<Direction>,
    cursor: usize,
    phase: Phase,
}

impl SequenceEngine {
    /// Create an empty engine in `Building`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current sequence, oldest first.
    #[must_use]
    pub fn sequence(&self) -> &[Direction] {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of directions reproduced in the current (or last) recall.
    #[must_use]
    pub fn recall_progress(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_recall_active(&self) -> bool {
        self.phase == Phase::RecallActive
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Clear the sequence and return to `Building`.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.cursor = 0;
        self.phase = Phase::Building;
    }

    /// Start a new round by appending `direction`.
    ///
    /// Always returns to `Building` first, abandoning any recall in
    /// progress or a game over. With `max_length > 0` the oldest direction
    /// is evicted once the bound is exceeded; `0` means unbounded.
    pub fn append_direction(&mut self, direction: Direction, max_length: usize) {
        self.phase = Phase::Building;
        self.cursor = 0;

        self.sequence.push(direction);
        if max_length > 0 && self.sequence.len() > max_length {
            let excess = self.sequence.len() - max_length;
            self.sequence.drain(..excess);
        }
    }

    /// Arm the recall from the start of the sequence.
    ///
    /// Calling again while recall is active restarts it at cursor 0.
    /// A game over stays a game over; only `reset` or `append_direction`
    /// clears it.
    pub fn begin_recall(&mut self) {
        self.cursor = 0;
        match self.phase {
            Phase::Building | Phase::RecallActive => self.phase = Phase::RecallActive,
            Phase::GameOver => {}
        }
    }

    /// The direction the recall is waiting for, if any.
    #[must_use]
    pub fn peek_expected_direction(&self) -> Option<Direction> {
        match self.phase {
            Phase::RecallActive => self.sequence.get(self.cursor).copied(),
            Phase::Building | Phase::GameOver => None,
        }
    }

    /// Evaluate one submitted direction against the sequence.
    pub fn evaluate_input(&mut self, input: Direction) -> Evaluation {
        let length = self.sequence.len();

        let expected = match (self.phase, self.peek_expected_direction()) {
            (Phase::RecallActive, Some(expected)) => expected,
            (_, expected) => {
                return Evaluation::ignored(length, self.cursor, expected, input);
            }
        };

        if input != expected {
            self.phase = Phase::GameOver;
            return Evaluation::incorrect(length, self.cursor, expected, input);
        }

        self.cursor += 1;
        if self.cursor >= length {
            self.phase = Phase::Building;
            Evaluation::completed(length, expected, input)
        } else {
            Evaluation::correct(length, self.cursor, expected, input)
        }
    }
}
