//! Error type for configuration and usage faults.
//!
//! Game-rule failures (a wrong swipe, input outside recall) are never
//! errors; they are reported as an `Outcome` on the evaluation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `prepare_next_round` was called before an observer was attached.
    #[error("game observer has not been attached")]
    ObserverNotAttached,

    /// A scripted direction source needs at least one direction.
    #[error("scripted direction source has an empty script")]
    EmptyScript,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type GameResult<T> = Result<T, GameError>;
