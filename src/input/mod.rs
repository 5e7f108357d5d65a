//! Pointer input: turning press/release positions into directions.

pub mod swipe;

pub use swipe::{classify_swipe, SwipeDelta, SwipeTracker};
