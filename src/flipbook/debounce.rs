// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing driven by externally scheduled timers.
//!
//! Each `schedule` call bumps a generation counter and hands back a token.
//! When the matching timer fires, only the most recent token yields a value;
//! older ones are stale and dropped.

use std::time::Duration;

/// Identifies one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stores `value` as the pending one and returns the token the caller
    /// must schedule a timer for.
    pub fn schedule(&mut self, value: T) -> DebounceToken {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        DebounceToken(self.generation)
    }

    /// Returns the pending value if `token` is the latest one issued.
    pub fn fire(&mut self, token: DebounceToken) -> Option<T> {
        if token.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops any pending value; outstanding tokens become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_into_last_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let first = debouncer.schedule(1);
        let second = debouncer.schedule(2);
        let third = debouncer.schedule(3);

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert_eq!(debouncer.fire(third), Some(3));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn token_fires_at_most_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let token = debouncer.schedule("a");
        assert_eq!(debouncer.fire(token), Some("a"));
        assert_eq!(debouncer.fire(token), None);
    }

    #[test]
    fn cancel_makes_outstanding_token_stale() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let token = debouncer.schedule(5);
        debouncer.cancel();
        assert_eq!(debouncer.fire(token), None);
    }

    #[test]
    fn separated_events_each_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let a = debouncer.schedule(1);
        assert_eq!(debouncer.fire(a), Some(1));
        let b = debouncer.schedule(2);
        assert_eq!(debouncer.fire(b), Some(2));
    }
}
