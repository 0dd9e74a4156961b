//! Time source for the transition lock.
//!
//! Lock expiry is computed as `now - acquired_at` against whatever clock the
//! navigator was built with, so tests can drive time by hand instead of
//! waiting on real timers.

/// Milliseconds on a timeline that never runs backwards under normal use.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `performance.now()` when the page exposes it, wall-clock millis otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        match web_sys::window().and_then(|w| w.performance()) {
            Some(performance) => performance.now(),
            None => chrono::Utc::now().timestamp_millis() as f64,
        }
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use super::Clock;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Hand-driven clock. Clones share the same timeline.
    #[derive(Debug, Clone, Default)]
    pub struct ManualClock {
        now: Rc<Cell<f64>>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn advance(&self, ms: f64) {
            self.now.set(self.now.get() + ms);
        }

        pub fn set(&self, ms: f64) {
            self.now.set(ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(250.0);
        assert_eq!(other.now_ms(), 250.0);
        other.set(10.0);
        assert_eq!(clock.now_ms(), 10.0);
    }
}
