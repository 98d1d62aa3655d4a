//! Logical game timer
//!
//! The timer is a pair of captured timestamps, not a scheduled callback.
//! `start` is a no-op once started, and `stop` keeps returning the elapsed
//! value captured by the first call.

use std::time::{Duration, Instant};

/// Session stopwatch from first keystroke to winning submission
#[derive(Debug, Clone, Copy, Default)]
pub struct GameTimer {
    started_at: Option<Instant>,
    elapsed: Option<Duration>,
}

impl GameTimer {
    /// Create a stopped, unstarted timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started_at: None,
            elapsed: None,
        }
    }

    /// Start the timer. Idempotent: later calls do not move the start point.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stop the timer, capturing the elapsed time.
    ///
    /// Idempotent: repeated calls return the value captured by the first
    /// stop. Returns `None` if the timer was never started.
    pub fn stop(&mut self) -> Option<Duration> {
        if self.elapsed.is_none()
            && let Some(started_at) = self.started_at
        {
            self.elapsed = Some(started_at.elapsed());
        }
        self.elapsed
    }

    /// The captured elapsed time, if the timer has been stopped.
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Whether the timer has been started.
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Clear both timestamps for a new game.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_idempotent() {
        let mut timer = GameTimer::new();
        timer.start();
        let first = timer.stop();
        let second = timer.stop();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn stop_without_start_returns_none() {
        let mut timer = GameTimer::new();
        assert_eq!(timer.stop(), None);
        assert_eq!(timer.stop(), None);
    }

    #[test]
    fn start_is_idempotent() {
        let mut timer = GameTimer::new();
        timer.start();
        let anchor = timer.started_at;
        timer.start();
        assert_eq!(timer.started_at, anchor);
    }

    #[test]
    fn reset_clears_captured_state() {
        let mut timer = GameTimer::new();
        timer.start();
        timer.stop();
        timer.reset();
        assert!(!timer.is_started());
        assert_eq!(timer.elapsed(), None);
    }
}
