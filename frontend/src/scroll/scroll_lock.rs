//! Page-wide scroll suppression shared by modals and the intro overlay.
//!
//! Holders are counted: the body stays `overflow: hidden` until the last
//! holder lets go, so closing one modal cannot unlock the page underneath
//! another.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

/// Where the overflow style lands. The browser implementation writes to
/// `document.body`.
pub trait OverflowTarget {
    fn set_hidden(&self, hidden: bool);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BodyOverflow;

impl OverflowTarget for BodyOverflow {
    fn set_hidden(&self, hidden: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let _ = if hidden {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

pub struct ScrollLock {
    holders: Cell<usize>,
    target: Box<dyn OverflowTarget>,
}

impl ScrollLock {
    pub fn new(target: impl OverflowTarget + 'static) -> Self {
        Self {
            holders: Cell::new(0),
            target: Box::new(target),
        }
    }

    pub fn browser() -> Self {
        Self::new(BodyOverflow)
    }

    pub fn lock(&self) {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        if holders == 1 {
            debug!("page scroll locked");
            self.target.set_hidden(true);
        }
    }

    /// Releases one hold. Extra calls with no holders are ignored.
    pub fn unlock(&self) {
        match self.holders.get() {
            0 => debug!("scroll unlock without a holder ignored"),
            1 => {
                self.holders.set(0);
                debug!("page scroll unlocked");
                self.target.set_hidden(false);
            }
            n => self.holders.set(n - 1),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.get()
    }

    /// Locks now and unlocks when the guard drops.
    pub fn acquire(self: &Rc<Self>) -> ScrollLockGuard {
        self.lock();
        ScrollLockGuard {
            lock: Rc::clone(self),
        }
    }
}

#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    lock: Rc<ScrollLock>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}
