//! Game configuration.
//!
//! `GameConfig` carries everything a game session is tuned by: the
//! sequence bound, presentation timings, the swipe dead zone and the
//! random seed. Durations serialize as `std::time::Duration`'s serde form.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum sequence length (0 = unlimited).
    /// Once reached, each new round drops the oldest direction.
    pub max_length: usize,

    /// How long the newest direction stays visible.
    pub reveal_duration: Duration,

    /// Pause between a completed recall and the next round.
    pub next_round_delay: Duration,

    /// Gestures shorter than this (in pixels) are not swipes.
    pub dead_zone: f32,

    /// Seed for the random direction source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_length: 50,
            reveal_duration: Duration::from_secs(3),
            next_round_delay: Duration::from_millis(750),
            dead_zone: 40.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with default timings and the given bound.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }

    /// Set the bound from a signed value; zero or negative means unlimited.
    #[must_use]
    pub fn with_max_length_signed(mut self, max_length: i64) -> Self {
        self.max_length = usize::try_from(max_length).unwrap_or(0);
        self
    }

    #[must_use]
    pub fn with_reveal_duration(mut self, duration: Duration) -> Self {
        self.reveal_duration = duration;
        self
    }

    #[must_use]
    pub fn with_next_round_delay(mut self, delay: Duration) -> Self {
        self.next_round_delay = delay;
        self
    }

    #[must_use]
    pub fn with_dead_zone(mut self, pixels: f32) -> Self {
        self.dead_zone = pixels;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check values that the type system cannot.
    pub fn validate(&self) -> GameResult<()> {
        if !self.dead_zone.is_finite() || self.dead_zone < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "dead zone must be a non-negative number of pixels, got {}",
                self.dead_zone
            )));
        }
        Ok(())
    }
}
