use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Shared home for at most one pending timer. Dropping a gloo `Timeout`
/// cancels it, so replacing or clearing the slot cancels the old one.
pub struct TimerSlot<T = Timeout>(Rc<RefCell<Option<T>>>);

impl<T> Clone for TimerSlot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> TimerSlot<T> {
    pub fn replace(&self, timer: T) {
        let previous = self.0.borrow_mut().replace(timer);
        drop(previous);
    }

    /// Drops the stored timer. A timer callback that captured a handle to
    /// its own slot must call this when it fires, or the slot keeps the
    /// callback's captures alive.
    pub fn clear(&self) {
        let pending = self.0.borrow_mut().take();
        drop(pending);
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}
