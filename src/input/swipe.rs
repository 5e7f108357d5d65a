//! Swipe gesture classification.
//!
//! A gesture is the vector from press to release in screen pixels with
//! the y axis pointing up. Gestures shorter than the dead zone are not
//! swipes; otherwise the dominant axis decides, with ties going to the
//! horizontal axis.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Press-to-release displacement in pixels (y up).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SwipeDelta {
    pub dx: f32,
    pub dy: f32,
}

impl SwipeDelta {
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub fn magnitude(&self) -> f32 {
        self.dx.hypot(self.dy)
    }
}

/// Classify a gesture, or `None` if it falls inside the dead zone.
///
/// ```
/// use memory_swipe::core::Direction;
/// use memory_swipe::input::{classify_swipe, SwipeDelta};
///
/// assert_eq!(classify_swipe(SwipeDelta::new(80.0, 20.0), 40.0), Some(Direction::Right));
/// assert_eq!(classify_swipe(SwipeDelta::new(5.0, 5.0), 40.0), None);
/// ```
#[must_use]
pub fn classify_swipe(delta: SwipeDelta, dead_zone: f32) -> Option<Direction> {
    if delta.magnitude() < dead_zone {
        return None;
    }

    if delta.dx.abs() >= delta.dy.abs() {
        Some(if delta.dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if delta.dy > 0.0 { Direction::Up } else { Direction::Down })
    }
}

/// Tracks one pointer from press to release.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down at `(x, y)`. A second press restarts the gesture.
    pub fn press(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Pointer went up at `(x, y)`. Returns the gesture, if one was started.
    pub fn release(&mut self, x: f32, y: f32) -> Option<SwipeDelta> {
        let (sx, sy) = self.start.take()?;
        Some(SwipeDelta::new(x - sx, y - sy))
    }

    /// Abandon the current gesture.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}
