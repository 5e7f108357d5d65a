//! Timed game session.
//!
//! `GameSession` owns the presentation-side timing around a `MemoryGame`:
//! the reveal of each new direction and the pause between rounds. There
//! is no frame loop or async runtime; the caller reports elapsed time
//! through `advance` and pending timers are plain values that are
//! cancelled by dropping them.
//!
//! ## Round Flow
//!
//! 1. `start_new_game` resets the game and prepares the first round
//! 2. The reveal timer runs; swipes are locked out
//! 3. The reveal timer fires and recall begins
//! 4. A completed recall starts the next-round timer, which prepares the
//!    next round and loops back to 2
//! 5. A wrong swipe ends the game; the next press starts a new one
//!
//! Pointer input goes through `press`/`release`. A press only starts a
//! drag while recall is accepting swipes, so a gesture begun during the
//! reveal never counts once recall opens.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Direction, DirectionSource, GameConfig};
use crate::engine::{Evaluation, Outcome};
use crate::error::GameResult;
use crate::game::MemoryGame;
use crate::input::{classify_swipe, SwipeDelta, SwipeTracker};

/// What the player should be doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No game started yet.
    #[default]
    Idle,
    /// The newest direction is being revealed.
    Memorize,
    /// Waiting for the player to swipe the sequence.
    Recall,
    /// Sequence reproduced; the next round is pending.
    RoundComplete,
    GameOver,
}

impl SessionStatus {
    /// Does this status accept swipes?
    #[must_use]
    pub fn accepts_input(self) -> bool {
        self == SessionStatus::Recall
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = match self {
            SessionStatus::Idle => "Tap to start",
            SessionStatus::Memorize => "Memorize the arrow...",
            SessionStatus::Recall => "Swipe the sequence in order",
            SessionStatus::RoundComplete => "Well done!",
            SessionStatus::GameOver => "Game Over - Tap/Click to Retry",
        };
        f.write_str(line)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
    Reveal,
    NextRound,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    kind: TimerKind,
    remaining: Duration,
}

/// A `MemoryGame` plus its reveal and next-round timers.
///
/// The wrapped game must have an observer attached before
/// `start_new_game`; rendering happens in that observer.
#[derive(Debug)]
pub struct GameSession<S> {
    game: MemoryGame<S>,
    reveal_duration: Duration,
    next_round_delay: Duration,
    dead_zone: f32,
    timer: Option<Timer>,
    status: SessionStatus,
    tracker: SwipeTracker,
}

impl<S: DirectionSource> GameSession<S> {
    /// Wrap `game`, taking timings and the dead zone from `config`.
    pub fn new(game: MemoryGame<S>, config: &GameConfig) -> GameResult<Self> {
        config.validate()?;
        Ok(Self {
            game,
            reveal_duration: config.reveal_duration,
            next_round_delay: config.next_round_delay,
            dead_zone: config.dead_zone,
            timer: None,
            status: SessionStatus::Idle,
            tracker: SwipeTracker::new(),
        })
    }

    /// Abandon everything in flight and start over from an empty sequence.
    pub fn start_new_game(&mut self) -> GameResult<()> {
        self.timer = None;
        self.tracker.cancel();
        self.game.reset_game();
        self.prepare_round()
    }

    /// Let `elapsed` pass, firing every timer that runs out.
    pub fn advance(&mut self, elapsed: Duration) -> GameResult<()> {
        let mut budget = elapsed;
        while let Some(timer) = self.timer {
            if budget < timer.remaining {
                self.timer = Some(Timer {
                    remaining: timer.remaining - budget,
                    ..timer
                });
                return Ok(());
            }

            budget -= timer.remaining;
            self.timer = None;
            tracing::trace!(kind = ?timer.kind, "timer fired");
            match timer.kind {
                TimerKind::Reveal => {
                    self.game.begin_recall_phase();
                    self.status = SessionStatus::Recall;
                }
                TimerKind::NextRound => self.prepare_round()?,
            }
        }
        Ok(())
    }

    /// Pointer went down at `(x, y)`.
    ///
    /// Before the first game and after a game over this starts a new game.
    /// While input is locked the press is dropped and no drag begins.
    pub fn press(&mut self, x: f32, y: f32) -> GameResult<()> {
        match self.status {
            SessionStatus::Idle | SessionStatus::GameOver => self.start_new_game(),
            SessionStatus::Recall => {
                self.tracker.press(x, y);
                Ok(())
            }
            SessionStatus::Memorize | SessionStatus::RoundComplete => {
                tracing::trace!(status = ?self.status, "press ignored while input is locked");
                Ok(())
            }
        }
    }

    /// Pointer went up at `(x, y)`. Submits the gesture if a drag was
    /// started during recall.
    pub fn release(&mut self, x: f32, y: f32) -> Option<Evaluation> {
        let delta = self.tracker.release(x, y)?;
        self.submit_swipe(delta)
    }

    /// Classify a gesture and submit it.
    ///
    /// Returns `None` when the gesture is inside the dead zone or input is
    /// locked (reveal, between rounds, game over).
    pub fn submit_swipe(&mut self, delta: SwipeDelta) -> Option<Evaluation> {
        let direction = classify_swipe(delta, self.dead_zone)?;
        self.submit_direction(direction)
    }

    /// Submit an already classified direction.
    pub fn submit_direction(&mut self, direction: Direction) -> Option<Evaluation> {
        if !self.status.accepts_input() {
            tracing::trace!(%direction, status = ?self.status, "input locked");
            return None;
        }

        let eval = self.game.submit_input(direction);
        match eval.outcome {
            Outcome::Completed => {
                self.status = SessionStatus::RoundComplete;
                self.timer = Some(Timer {
                    kind: TimerKind::NextRound,
                    remaining: self.next_round_delay,
                });
            }
            Outcome::Incorrect => {
                self.status = SessionStatus::GameOver;
                self.timer = None;
            }
            Outcome::Correct | Outcome::Ignored => {}
        }
        Some(eval)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn recall_progress(&self) -> usize {
        self.game.recall_progress()
    }

    /// Time left on the pending timer, if any.
    #[must_use]
    pub fn time_until_next_event(&self) -> Option<Duration> {
        self.timer.map(|timer| timer.remaining)
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame<S> {
        &self.game
    }

    #[must_use]
    pub fn into_game(self) -> MemoryGame<S> {
        self.game
    }

    // A new round always supersedes whatever timer was pending.
    fn prepare_round(&mut self) -> GameResult<()> {
        self.timer = None;
        self.tracker.cancel();
        self.game.prepare_next_round()?;
        self.status = SessionStatus::Memorize;
        self.timer = Some(Timer {
            kind: TimerKind::Reveal,
            remaining: self.reveal_duration,
        });
        Ok(())
    }
}
