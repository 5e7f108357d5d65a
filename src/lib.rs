//! # memory-swipe
//!
//! A "Simon says" sequence-memory game engine driven by swipes.
//!
//! Each round appends one random direction to a growing sequence and
//! reveals it; the player then swipes the whole sequence back in order.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: The sequence engine is data plus transitions. No
//!    timers, rendering or input devices.
//!
//! 2. **Typed Outcomes**: Every submitted direction yields an `Evaluation`.
//!    Input outside recall is `Ignored`, never an error.
//!
//! 3. **Pluggable Collaborators**: Randomness comes from a `DirectionSource`
//!    and presentation hangs off a `GameObserver`.
//!
//! ## Modules
//!
//! - `core`: Directions, direction sources, configuration
//! - `engine`: Sequence engine and evaluation results
//! - `game`: `MemoryGame` orchestrator and the observer boundary
//! - `input`: Swipe classification
//! - `session`: Reveal and next-round timing around a game

pub mod core;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, DirectionSource, GameConfig,
    RandomDirections, RandomDirectionsState, ScriptedDirections,
};

pub use crate::engine::{Evaluation, Outcome, Phase, SequenceEngine};

pub use crate::error::{GameError, GameResult};

pub use crate::game::{
    notification_queue, GameNotification, GameObserver, MemoryGame,
    NOTIFICATION_QUEUE_CAPACITY,
};

pub use crate::input::{classify_swipe, SwipeDelta, SwipeTracker};

pub use crate::session::{GameSession, SessionStatus};
