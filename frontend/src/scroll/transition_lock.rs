//! Timed gate that keeps section transitions from overlapping.
//!
//! A held lock rejects every acquisition attempt until its hold time has
//! elapsed on the injected clock. Rejected attempts are dropped, never queued.

use super::clock::Clock;

pub const DEFAULT_SCROLL_DURATION_MS: f64 = 800.0;

#[derive(Debug, Clone)]
pub struct TransitionLock<C> {
    clock: C,
    duration_ms: f64,
    held: Option<Hold>,
}

#[derive(Debug, Clone, Copy)]
struct Hold {
    since: f64,
    for_ms: f64,
}

impl<C: Clock> TransitionLock<C> {
    pub fn new(clock: C, duration_ms: f64) -> Self {
        Self {
            clock,
            duration_ms: duration_ms.max(0.0),
            held: None,
        }
    }

    /// Takes the lock for the default duration.
    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_for(self.duration_ms)
    }

    /// Takes the lock for `ms` milliseconds. Returns false, with no state
    /// change, while a previous hold is still running.
    pub fn try_acquire_for(&mut self, ms: f64) -> bool {
        if self.is_held() {
            return false;
        }
        self.held = Some(Hold {
            since: self.clock.now_ms(),
            for_ms: ms.max(0.0),
        });
        true
    }

    pub fn is_held(&self) -> bool {
        self.remaining_ms() > 0.0
    }

    /// Time left on the current hold. A clock that jumped backwards past the
    /// acquisition point counts as expired so the lock cannot wedge.
    pub fn remaining_ms(&self) -> f64 {
        let Some(hold) = self.held else { return 0.0 };
        let elapsed = self.clock.now_ms() - hold.since;
        if elapsed < 0.0 || elapsed >= hold.for_ms {
            0.0
        } else {
            hold.for_ms - elapsed
        }
    }

    pub fn release(&mut self) {
        self.held = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::clock::ManualClock;

    #[test]
    fn second_acquire_within_duration_fails() {
        let clock = ManualClock::new();
        let mut lock = TransitionLock::new(clock.clone(), DEFAULT_SCROLL_DURATION_MS);

        assert!(lock.try_acquire());
        clock.advance(100.0);
        assert!(!lock.try_acquire());
        assert!(lock.is_held());
        assert_eq!(lock.remaining_ms(), 700.0);
    }

    #[test]
    fn lock_frees_itself_after_duration() {
        let clock = ManualClock::new();
        let mut lock = TransitionLock::new(clock.clone(), 800.0);

        assert!(lock.try_acquire());
        clock.advance(799.0);
        assert!(lock.is_held());
        clock.advance(1.0);
        assert!(!lock.is_held());
        assert!(lock.try_acquire());
    }

    #[test]
    fn rejected_attempt_does_not_extend_hold() {
        let clock = ManualClock::new();
        let mut lock = TransitionLock::new(clock.clone(), 800.0);

        assert!(lock.try_acquire());
        clock.advance(700.0);
        assert!(!lock.try_acquire());
        clock.advance(100.0);
        assert!(lock.try_acquire());
    }

    #[test]
    fn custom_hold_duration() {
        let clock = ManualClock::new();
        let mut lock = TransitionLock::new(clock.clone(), 800.0);

        assert!(lock.try_acquire_for(300.0));
        clock.advance(300.0);
        assert!(lock.try_acquire());
    }

    #[test]
    fn release_frees_immediately() {
        let clock = ManualClock::new();
        let mut lock = TransitionLock::new(clock, 800.0);

        assert!(lock.try_acquire());
        lock.release();
        assert!(!lock.is_held());
        assert!(lock.try_acquire());
    }

    #[test]
    fn clock_going_backwards_does_not_wedge() {
        let clock = ManualClock::new();
        clock.set(5_000.0);
        let mut lock = TransitionLock::new(clock.clone(), 800.0);

        assert!(lock.try_acquire());
        clock.set(1_000.0);
        assert!(!lock.is_held());
    }
}
