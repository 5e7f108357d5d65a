//! Direction sources: where each round's new direction comes from.
//!
//! ## Key Features
//!
//! - **Pluggable**: the game only sees the `DirectionSource` trait
//! - **Deterministic**: `RandomDirections` with the same seed produces the
//!   same directions
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: `ScriptedDirections` replays a fixed script for tests
//!
//! ```
//! use memory_swipe::core::{DirectionSource, RandomDirections};
//!
//! let mut a = RandomDirections::new(42);
//! let mut b = RandomDirections::new(42);
//! assert_eq!(a.next_direction(), b.next_direction());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::Direction;
use crate::error::{GameError, GameResult};

/// Produces one direction per call.
///
/// Implementations must only ever yield one of the four real directions;
/// seeding and determinism are the implementation's concern.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

impl<S: DirectionSource + ?Sized> DirectionSource for &mut S {
    fn next_direction(&mut self) -> Direction {
        (**self).next_direction()
    }
}

impl<S: DirectionSource + ?Sized> DirectionSource for Box<S> {
    fn next_direction(&mut self) -> Direction {
        (**self).next_direction()
    }
}

/// Uniformly random directions from a seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct RandomDirections {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RandomDirections {
    /// Create a source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from the thread RNG.
    ///
    /// The chosen seed is still recorded, so `state()` works as usual.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RandomDirectionsState {
        RandomDirectionsState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RandomDirectionsState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DirectionSource for RandomDirections {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.inner.gen_range(0..Direction::ALL.len())]
    }
}

/// Serializable `RandomDirections` state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many directions have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomDirectionsState {
    /// Seed the stream was created with
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed script of directions, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedDirections {
    script: Vec<Direction>,
    position: usize,
}

impl ScriptedDirections {
    /// Create a scripted source. Fails if `script` is empty.
    pub fn new(script: impl Into<Vec<Direction>>) -> GameResult<Self> {
        let script = script.into();
        if script.is_empty() {
            return Err(GameError::EmptyScript);
        }
        Ok(Self { script, position: 0 })
    }

    /// Number of directions handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        let dir = self.script[self.position % self.script.len()];
        self.position += 1;
        dir
    }
}
