//! The result of evaluating one submitted direction.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// What happened to a submitted direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Matched the expected direction; more remain.
    Correct,
    /// Matched the last direction of the sequence.
    Completed,
    /// Did not match; the game is over.
    Incorrect,
    /// Recall was not active, so the input had no effect.
    Ignored,
}

/// Outcome of one `evaluate_input` call plus the context it happened in.
///
/// Produced once per submission and not retained by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: Outcome,

    /// Sequence length at the time of the attempt.
    pub sequence_length: usize,

    /// Recall cursor after the attempt.
    /// For `Incorrect` this is the cursor before the failed attempt.
    pub progress: usize,

    /// The direction the engine was waiting for, if recall was active.
    pub expected: Option<Direction>,

    /// The direction that was submitted.
    pub received: Direction,
}

impl Evaluation {
    #[must_use]
    pub fn correct(
        sequence_length: usize,
        progress: usize,
        expected: Direction,
        received: Direction,
    ) -> Self {
        Self {
            outcome: Outcome::Correct,
            sequence_length,
            progress,
            expected: Some(expected),
            received,
        }
    }

    /// Progress of a completed recall is always the full length.
    #[must_use]
    pub fn completed(sequence_length: usize, expected: Direction, received: Direction) -> Self {
        Self {
            outcome: Outcome::Completed,
            sequence_length,
            progress: sequence_length,
            expected: Some(expected),
            received,
        }
    }

    #[must_use]
    pub fn incorrect(
        sequence_length: usize,
        progress: usize,
        expected: Direction,
        received: Direction,
    ) -> Self {
        Self {
            outcome: Outcome::Incorrect,
            sequence_length,
            progress,
            expected: Some(expected),
            received,
        }
    }

    #[must_use]
    pub fn ignored(
        sequence_length: usize,
        progress: usize,
        expected: Option<Direction>,
        received: Direction,
    ) -> Self {
        Self {
            outcome: Outcome::Ignored,
            sequence_length,
            progress,
            expected,
            received,
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.outcome == Outcome::Correct
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.outcome == Outcome::Completed
    }

    #[must_use]
    pub fn is_incorrect(&self) -> bool {
        self.outcome == Outcome::Incorrect
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.outcome == Outcome::Ignored
    }
}
