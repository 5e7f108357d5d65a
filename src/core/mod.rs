//! Core types: directions, direction sources, configuration.
//!
//! Everything here is independent of the engine's state machine and can be
//! shared by any presentation.

pub mod direction;
pub mod source;
pub mod config;

pub use direction::Direction;
pub use source::{DirectionSource, RandomDirections, RandomDirectionsState, ScriptedDirections};
pub use config::GameConfig;
