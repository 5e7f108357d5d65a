//! Swipe directions: the symbols a player memorizes and reproduces.
//!
//! There is no "no direction" variant. Places where the game has nothing
//! to report (an inactive recall, a gesture inside the dead zone) use
//! `Option<Direction>` instead.

use serde::{Deserialize, Serialize};

/// One of the four swipe directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in index order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a raw index (0-3) to a direction.
    ///
    /// ```
    /// use memory_swipe::core::Direction;
    ///
    /// assert_eq!(Direction::from_index(2), Some(Direction::Left));
    /// assert_eq!(Direction::from_index(4), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Raw index of this direction (inverse of `from_index`).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Arrow glyph for display.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}
