//! Hero carousel index arithmetic.
//!
//! The hero advances on a fixed timer and also accepts manual prev/next.
//! A manual move takes a short transition lock; further manual moves are
//! ignored until it expires. The timer itself does not observe the lock.

use std::time::{Duration, Instant};

/// Interval between automatic advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(3000);

/// How long a manual move blocks further manual moves.
pub const TRANSITION_LOCK: Duration = Duration::from_millis(500);

/// Maximum number of projects rotated in the hero.
pub const HERO_PROJECT_LIMIT: i64 = 10;

#[derive(Debug, Clone)]
pub struct HeroRotator {
    len: usize,
    index: usize,
    locked_until: Option<Instant>,
}

impl HeroRotator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            locked_until: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the slide currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Timer-driven advance with wrap-around. `None` when there is nothing
    /// to rotate.
    pub fn tick(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Manual "next". Returns `false` if ignored because a transition is
    /// still running at `now`.
    pub fn next(&mut self, now: Instant) -> bool {
        self.manual_move(now, |index, len| (index + 1) % len)
    }

    /// Manual "prev". Returns `false` if ignored because a transition is
    /// still running at `now`.
    pub fn prev(&mut self, now: Instant) -> bool {
        self.manual_move(now, |index, len| (index + len - 1) % len)
    }

    /// Whether a manual move at `now` would be ignored.
    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    fn manual_move(&mut self, now: Instant, step: impl Fn(usize, usize) -> usize) -> bool {
        if self.len == 0 || self.is_locked(now) {
            return false;
        }
        self.locked_until = Some(now + TRANSITION_LOCK);
        self.index = step(self.index, self.len);
        true
    }
}
