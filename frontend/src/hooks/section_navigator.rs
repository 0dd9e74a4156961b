//! Connects a `SectionNavigator` to window events and the rendered sections.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::use_window_size;

use super::scroll_lock::use_scroll_lock_context;
use super::timer_slot::TimerSlot;
use crate::config::NavigatorConfig;
use crate::scroll::clock::{BrowserClock, Clock};
use crate::scroll::gesture::{Intent, TouchTracker};
use crate::scroll::locator::{
    locate_in_document, scroll_section_into_view, viewport_height, ReadDecision, ReadThrottle,
};
use crate::scroll::navigator::{DeviceClass, NavOutcome, NavigatorPhase, NavigatorSnapshot, SectionNavigator};
use crate::scroll::scroll_lock::ScrollLock;
use crate::scroll::sections::Section;

pub struct NavigatorHandle {
    pub snapshot: NavigatorSnapshot,
    pub navigate: Callback<usize>,
}

#[derive(Clone)]
struct Driver {
    navigator: Rc<RefCell<SectionNavigator<BrowserClock>>>,
    ids: Rc<Vec<String>>,
    snapshot: UseStateSetter<NavigatorSnapshot>,
    settle: TimerSlot,
    trailing_read: TimerSlot,
    /// Section a nav click asked for, walked one transition at a time.
    target: Rc<Cell<Option<usize>>>,
    scroll_lock: Option<Rc<ScrollLock>>,
    config: Rc<NavigatorConfig>,
}

impl Driver {
    /// A held page scroll lock (modal, intro) pauses section navigation.
    fn suspended(&self) -> bool {
        self.scroll_lock.as_ref().map_or(false, |l| l.is_locked())
    }

    fn dispatch(&self, intent: Intent) -> Option<NavOutcome> {
        if self.suspended() {
            return None;
        }
        let outcome = self.navigator.borrow_mut().handle_intent(intent);
        if !matches!(
            outcome,
            NavOutcome::Insignificant | NavOutcome::Dropped | NavOutcome::NoSections
        ) {
            // The user took over; abandon any walk towards a clicked section.
            self.target.set(None);
        }
        self.apply(outcome);
        Some(outcome)
    }

    fn navigate(&self, index: usize) {
        if self.suspended() {
            return;
        }
        self.target.set(Some(index));
        self.walk_to_target();
    }

    fn walk_to_target(&self) {
        let Some(target) = self.target.get() else {
            return;
        };
        if self.suspended() {
            self.target.set(None);
            return;
        }
        let outcome = self.navigator.borrow_mut().navigate(target);
        match outcome {
            NavOutcome::Transition { to, .. } if to != target => {}
            // Still animating; the settle timer retries.
            NavOutcome::Dropped => {
                self.schedule_settle();
                return;
            }
            _ => self.target.set(None),
        }
        self.apply(outcome);
    }

    fn apply(&self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Transition { to, .. } => {
                let scrolled = self
                    .ids
                    .get(to)
                    .map_or(false, |id| scroll_section_into_view(id));
                if !scrolled {
                    self.navigator.borrow_mut().revert(outcome);
                    self.target.set(None);
                    return;
                }
            }
            NavOutcome::Step { .. } => {}
            _ => return,
        }
        self.publish();
        self.schedule_settle();
    }

    fn publish(&self) {
        self.snapshot.set(self.navigator.borrow().snapshot());
    }

    /// Re-renders once the lock has run out so `transitioning` clears, then
    /// continues any walk towards a clicked section.
    fn schedule_settle(&self) {
        let remaining = self.navigator.borrow().remaining_lock_ms();
        let driver = self.clone();
        self.settle.replace(Timeout::new(remaining.ceil() as u32, move || {
            driver.settle.clear();
            driver.publish();
            driver.walk_to_target();
        }));
    }

    /// Reads layout once the throttle window closes, so the position a
    /// native scroll came to rest at is always seen.
    fn schedule_trailing_read(&self, throttle: Rc<Cell<ReadThrottle>>, wait_ms: f64) {
        if self.trailing_read.is_pending() {
            return;
        }
        let driver = self.clone();
        self.trailing_read.replace(Timeout::new(wait_ms.ceil() as u32, move || {
            driver.trailing_read.clear();
            let mut state = throttle.get();
            state.mark_read(BrowserClock.now_ms());
            throttle.set(state);
            driver.sync_from_layout();
        }));
    }

    fn sync_from_layout(&self) {
        if self.navigator.borrow().phase() != NavigatorPhase::Idle {
            return;
        }
        if let Some(index) = locate_in_document(self.ids.as_slice()) {
            if self.navigator.borrow_mut().sync_to(index) {
                debug!("navigator synced to section {}", index);
                self.publish();
            }
        }
    }
}

fn is_form_field(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map_or(false, |el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

fn coarse_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Registers the window listeners that feed the navigator. The returned
/// closure removes them again and cancels any pending timers.
fn attach_listeners(driver: Driver) -> Option<Box<dyn FnOnce()>> {
    let window = web_sys::window()?;
    if let Some(first) = driver.ids.first() {
        debug!("section navigator mounted at #{}", first);
    }

    let threshold = driver.config.threshold_px;
    let tracker = Rc::new(RefCell::new(TouchTracker::default()));

    let on_wheel = {
        let driver = driver.clone();
        Closure::wrap(Box::new(move |e: WheelEvent| {
            let intent = Intent::from_wheel(e.delta_y(), e.delta_mode(), viewport_height(), threshold);
            if driver.dispatch(intent).map_or(false, |o| o.consumes_event()) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(WheelEvent)>)
    };

    let on_touch_start = {
        let tracker = tracker.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                tracker.borrow_mut().begin(touch.client_y() as f64);
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };

    let on_touch_move = {
        let tracker = tracker.clone();
        let driver = driver.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                tracker.borrow_mut().update(touch.client_y() as f64);
            }
            // Snapped sections must not momentum-scroll under the finger.
            if !driver.suspended() && driver.navigator.borrow().intercepts_current() {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };

    let on_touch_end = {
        let tracker = tracker.clone();
        let driver = driver.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let end_y = e.changed_touches().get(0).map(|t| t.client_y() as f64);
            let intent = tracker.borrow_mut().finish(end_y, threshold);
            if let Some(intent) = intent {
                driver.dispatch(intent);
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };

    let on_touch_cancel = {
        let tracker = tracker.clone();
        Closure::wrap(Box::new(move || tracker.borrow_mut().cancel()) as Box<dyn FnMut()>)
    };

    let on_key = {
        let driver = driver.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if is_form_field(e.target()) {
                return;
            }
            if let Some(intent) = Intent::from_key(&e.key()) {
                if driver.dispatch(intent).map_or(false, |o| o.consumes_event()) {
                    e.prevent_default();
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };

    let on_scroll = {
        let driver = driver.clone();
        let throttle = Rc::new(Cell::new(ReadThrottle::new(driver.config.scroll_read_interval_ms)));
        Closure::wrap(Box::new(move || {
            let mut state = throttle.get();
            let decision = state.poll(BrowserClock.now_ms());
            throttle.set(state);
            match decision {
                ReadDecision::Read => {
                    driver.trailing_read.clear();
                    driver.sync_from_layout();
                }
                ReadDecision::Defer(wait_ms) => driver.schedule_trailing_read(throttle.clone(), wait_ms),
            }
        }) as Box<dyn FnMut()>)
    };

    let active = AddEventListenerOptions::new();
    active.set_passive(false);

    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        on_wheel.as_ref().unchecked_ref(),
        &active,
    );
    let _ = window.add_event_listener_with_callback("touchstart", on_touch_start.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touch_move.as_ref().unchecked_ref(),
        &active,
    );
    let _ = window.add_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("touchcancel", on_touch_cancel.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());

    Some(Box::new(move || {
        let _ = window.remove_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("touchstart", on_touch_start.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("touchmove", on_touch_move.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("touchcancel", on_touch_cancel.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        driver.settle.clear();
        driver.trailing_read.clear();
        driver.target.set(None);
        driver.navigator.borrow_mut().cancel();
    }))
}

/// Drives full-page section navigation for the sections returned by `build`.
/// `build` only runs on first render.
#[hook]
pub fn use_section_navigator(build: fn() -> Vec<Section>, config: Rc<NavigatorConfig>) -> NavigatorHandle {
    let navigator = {
        let config = config.clone();
        use_mut_ref(move || SectionNavigator::new(build(), BrowserClock, &config))
    };
    let snapshot = {
        let navigator = navigator.clone();
        use_state(move || navigator.borrow().snapshot())
    };
    let ids = {
        let navigator = navigator.clone();
        use_memo(move |_| navigator.borrow().section_ids(), ())
    };
    let timers = use_memo(|_| (TimerSlot::<Timeout>::default(), TimerSlot::<Timeout>::default()), ());
    let target = use_memo(|_| Rc::new(Cell::new(None::<usize>)), ());
    let scroll_lock = use_scroll_lock_context();
    let (width, _height) = use_window_size();

    let driver = Driver {
        navigator: navigator.clone(),
        ids,
        snapshot: snapshot.setter(),
        settle: timers.0.clone(),
        trailing_read: timers.1.clone(),
        target: (*target).clone(),
        scroll_lock,
        config,
    };

    {
        let navigator = navigator.clone();
        let breakpoint = driver.config.mobile_breakpoint_px;
        use_effect_with_deps(
            move |width| {
                let device = DeviceClass::classify(*width as f64, coarse_pointer(), breakpoint);
                navigator.borrow_mut().set_device_class(device);
                || ()
            },
            width as i64,
        );
    }

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                let detach = attach_listeners(driver);
                move || {
                    if let Some(detach) = detach {
                        detach();
                    }
                }
            },
            (),
        );
    }

    let navigate = {
        let driver = driver.clone();
        Callback::from(move |index: usize| driver.navigate(index))
    };

    NavigatorHandle {
        snapshot: (*snapshot).clone(),
        navigate,
    }
}
