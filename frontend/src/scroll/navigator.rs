//! Section-to-section navigation state machine.
//!
//! The navigator is `Idle` until a significant gesture or an explicit
//! `navigate` call moves it, and `Transitioning` while the transition lock is
//! held. Gestures arriving mid-transition are dropped. The current section's
//! gate runs first, so a carousel can swallow gestures until it runs out of
//! steps. Every transition moves exactly one section.

use std::collections::HashSet;

use log::{debug, warn};

use super::clock::Clock;
use super::gesture::{Direction, Intent};
use super::sections::{CarouselState, Gate, Section};
use super::transition_lock::TransitionLock;
use crate::config::NavigatorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorPhase {
    Idle,
    Transitioning,
}

/// Which gesture policy applies to the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    /// Narrow or coarse-pointer viewports. Only sections flagged
    /// `snap_on_touch` are snapped; the rest scroll natively.
    Touch,
}

impl DeviceClass {
    pub fn classify(viewport_width: f64, coarse_pointer: bool, breakpoint_px: f64) -> Self {
        if coarse_pointer || viewport_width <= breakpoint_px {
            DeviceClass::Touch
        } else {
            DeviceClass::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    NoSections,
    Insignificant,
    /// A transition is still animating.
    Dropped,
    /// The browser should handle this gesture.
    Native,
    /// Already at the first or last section.
    Boundary,
    OutOfRange,
    Step { section: usize, step: usize },
    Transition { from: usize, to: usize, direction: Direction },
}

impl NavOutcome {
    /// Whether the originating DOM event should have its default prevented.
    /// Boundary gestures fall through so the page can reach content past the
    /// last snapped section.
    pub fn consumes_event(&self) -> bool {
        matches!(
            self,
            NavOutcome::Insignificant
                | NavOutcome::Dropped
                | NavOutcome::Step { .. }
                | NavOutcome::Transition { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    pub current_index: usize,
    pub direction: Direction,
    pub locked: bool,
}

/// Everything the view needs to render the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorSnapshot {
    pub active: usize,
    pub direction: Direction,
    pub transitioning: bool,
    /// Active step per section, `None` for non-carousel sections.
    pub steps: Vec<Option<usize>>,
    pub pinned: Vec<bool>,
}

impl NavigatorSnapshot {
    pub fn step_of(&self, index: usize) -> usize {
        self.steps.get(index).copied().flatten().unwrap_or(0)
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.pinned.get(index).copied().unwrap_or(false)
    }
}

pub struct SectionNavigator<C> {
    sections: Vec<Section>,
    current: usize,
    direction: Direction,
    lock: TransitionLock<C>,
    step_duration_ms: f64,
    device: DeviceClass,
}

impl<C: Clock> SectionNavigator<C> {
    pub fn new(sections: Vec<Section>, clock: C, config: &NavigatorConfig) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(sections.len());
        for section in sections {
            if seen.insert(section.id.clone()) {
                unique.push(section);
            } else {
                warn!("duplicate section id '{}' ignored", section.id);
            }
        }

        let mut navigator = Self {
            sections: unique,
            current: 0,
            direction: Direction::Down,
            lock: TransitionLock::new(clock, config.scroll_duration_ms),
            step_duration_ms: config.step_duration_ms,
            device: DeviceClass::Desktop,
        };
        if let Some(first) = navigator.sections.first_mut() {
            first.enter(Direction::Down);
        }
        navigator
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.sections.get(self.current)
    }

    pub fn carousel(&self, id: &str) -> Option<&CarouselState> {
        self.sections.iter().find(|s| s.id == id)?.carousel()
    }

    pub fn set_device_class(&mut self, device: DeviceClass) {
        if self.device != device {
            debug!("navigator device class {:?} -> {:?}", self.device, device);
            self.device = device;
        }
    }

    pub fn phase(&self) -> NavigatorPhase {
        if self.lock.is_held() {
            NavigatorPhase::Transitioning
        } else {
            NavigatorPhase::Idle
        }
    }

    pub fn state(&self) -> NavigatorState {
        NavigatorState {
            current_index: self.current,
            direction: self.direction,
            locked: self.lock.is_held(),
        }
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            active: self.current,
            direction: self.direction,
            transitioning: self.lock.is_held(),
            steps: self
                .sections
                .iter()
                .map(|s| s.carousel().map(CarouselState::active_step))
                .collect(),
            pinned: self
                .sections
                .iter()
                .map(|s| s.carousel().map_or(false, CarouselState::is_pinned))
                .collect(),
        }
    }

    pub fn remaining_lock_ms(&self) -> f64 {
        self.lock.remaining_ms()
    }

    /// True when gestures over the current section are snapped rather than
    /// left to the browser.
    pub fn intercepts_current(&self) -> bool {
        self.current_section().map_or(false, |s| self.intercepts(s))
    }

    fn intercepts(&self, section: &Section) -> bool {
        if section.allow_internal_scroll {
            return false;
        }
        match self.device {
            DeviceClass::Desktop => true,
            DeviceClass::Touch => section.snap_on_touch,
        }
    }

    pub fn handle_intent(&mut self, intent: Intent) -> NavOutcome {
        if self.sections.is_empty() {
            return NavOutcome::NoSections;
        }
        if !self.intercepts_current() {
            return NavOutcome::Native;
        }
        let Some(direction) = intent.direction().filter(|_| intent.significant) else {
            return NavOutcome::Insignificant;
        };
        if self.lock.is_held() {
            debug!("gesture dropped, transition in flight");
            return NavOutcome::Dropped;
        }

        let current = self.current;
        if let Gate::Consumed { step } = self.sections[current].gate(direction) {
            self.lock.try_acquire_for(self.step_duration_ms);
            self.direction = direction;
            debug!("section '{}' advanced to step {}", self.sections[current].id, step);
            return NavOutcome::Step {
                section: current,
                step,
            };
        }

        let target = self.neighbour(direction);
        if target == current {
            return NavOutcome::Boundary;
        }
        // Sections outside the touch snap set are reached by native scrolling.
        if self.device == DeviceClass::Touch && !self.sections[target].snap_on_touch {
            return NavOutcome::Native;
        }
        self.transition(target, direction)
    }

    /// Explicit selection, e.g. a nav-dot click. Moves one section towards
    /// `index`; callers repeat once the lock frees to walk the rest.
    pub fn navigate(&mut self, index: usize) -> NavOutcome {
        if self.sections.is_empty() {
            return NavOutcome::NoSections;
        }
        if index >= self.sections.len() {
            return NavOutcome::OutOfRange;
        }
        if index == self.current {
            return NavOutcome::Boundary;
        }
        if self.lock.is_held() {
            return NavOutcome::Dropped;
        }
        let direction = Direction::between(self.current, index);
        self.transition(self.neighbour(direction), direction)
    }

    fn neighbour(&self, direction: Direction) -> usize {
        let last = self.sections.len().saturating_sub(1);
        self.current.saturating_add_signed(direction.step()).min(last)
    }

    fn transition(&mut self, to: usize, direction: Direction) -> NavOutcome {
        if !self.lock.try_acquire() {
            return NavOutcome::Dropped;
        }
        let from = self.current;
        self.sections[from].leave();
        self.sections[to].enter(direction);
        self.current = to;
        self.direction = direction;
        debug!(
            "section transition {} -> {} ({})",
            self.sections[from].id, self.sections[to].id, to
        );
        NavOutcome::Transition { from, to, direction }
    }

    /// Undoes a transition whose scroll target could not be found, leaving
    /// the navigator where it was and the lock free.
    pub fn revert(&mut self, outcome: NavOutcome) {
        if let NavOutcome::Transition { from, to, direction } = outcome {
            if self.current != to || from >= self.sections.len() {
                return;
            }
            self.sections[to].leave();
            let back = match direction {
                Direction::Down => Direction::Up,
                Direction::Up => Direction::Down,
            };
            self.sections[from].enter(back);
            self.current = from;
            self.lock.release();
        }
    }

    /// Adopts the section the locator found after native scrolling. Ignored
    /// while a transition is in flight or when `index` is out of range.
    pub fn sync_to(&mut self, index: usize) -> bool {
        if index >= self.sections.len() || index == self.current || self.lock.is_held() {
            return false;
        }
        let direction = Direction::between(self.current, index);
        self.sections[self.current].leave();
        self.sections[index].enter(direction);
        self.current = index;
        self.direction = direction;
        true
    }

    /// Drops any hold, used when the page unmounts mid-transition.
    pub fn cancel(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::clock::ManualClock;
    use crate::scroll::gesture::DEFAULT_THRESHOLD_PX;
    use crate::scroll::sections::{SectionKind, SectionTable};

    fn wheel(delta_y: f64) -> Intent {
        Intent::from_wheel(delta_y, 0, 900.0, DEFAULT_THRESHOLD_PX)
    }

    fn navigator(table: SectionTable, ids: &[&str]) -> (SectionNavigator<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let nav = SectionNavigator::new(table.build(ids), clock.clone(), &NavigatorConfig::default());
        (nav, clock)
    }

    #[test]
    fn forward_wheel_scenario() {
        let (mut nav, clock) = navigator(SectionTable::new(), &["home", "middle", "end"]);

        let outcome = nav.handle_intent(wheel(100.0));
        assert_eq!(
            outcome,
            NavOutcome::Transition { from: 0, to: 1, direction: Direction::Down }
        );
        assert!(nav.state().locked);
        assert_eq!(nav.phase(), NavigatorPhase::Transitioning);

        clock.advance(100.0);
        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Dropped);
        assert_eq!(nav.state().current_index, 1);

        clock.advance(800.0);
        assert_eq!(nav.phase(), NavigatorPhase::Idle);
        assert_eq!(
            nav.handle_intent(wheel(100.0)),
            NavOutcome::Transition { from: 1, to: 2, direction: Direction::Down }
        );
        assert_eq!(nav.state().current_index, 2);
    }

    #[test]
    fn forward_at_last_section_is_boundary_without_lock() {
        let (mut nav, clock) = navigator(SectionTable::new(), &["home", "middle", "end"]);
        nav.handle_intent(wheel(100.0));
        clock.advance(900.0);
        nav.handle_intent(wheel(100.0));
        clock.advance(900.0);

        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Boundary);
        assert_eq!(nav.state().current_index, 2);
        assert!(!nav.state().locked);
    }

    #[test]
    fn backward_at_first_section_is_boundary() {
        let (mut nav, _clock) = navigator(SectionTable::new(), &["home", "end"]);
        assert_eq!(nav.handle_intent(wheel(-120.0)), NavOutcome::Boundary);
        assert!(!nav.state().locked);
    }

    #[test]
    fn insignificant_gesture_changes_nothing() {
        let (mut nav, _clock) = navigator(SectionTable::new(), &["home", "end"]);
        assert_eq!(nav.handle_intent(wheel(10.0)), NavOutcome::Insignificant);
        assert_eq!(nav.state().current_index, 0);
        assert!(!nav.state().locked);
    }

    #[test]
    fn no_sections_is_a_no_op() {
        let (mut nav, _clock) = navigator(SectionTable::new(), &[]);
        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::NoSections);
        assert_eq!(nav.navigate(0), NavOutcome::NoSections);
        assert!(!nav.sync_to(0));
    }

    #[test]
    fn navigate_to_current_takes_no_lock() {
        let (mut nav, _clock) = navigator(SectionTable::new(), &["home", "middle", "end"]);
        assert_eq!(nav.navigate(0), NavOutcome::Boundary);
        assert!(!nav.state().locked);
        assert!(!NavOutcome::Boundary.consumes_event());
    }

    #[test]
    fn navigate_moves_one_section_towards_selection() {
        let (mut nav, clock) = navigator(SectionTable::new(), &["home", "middle", "end"]);
        assert_eq!(
            nav.navigate(2),
            NavOutcome::Transition { from: 0, to: 1, direction: Direction::Down }
        );
        assert_eq!(nav.navigate(0), NavOutcome::Dropped);
        clock.advance(800.0);
        assert_eq!(
            nav.navigate(2),
            NavOutcome::Transition { from: 1, to: 2, direction: Direction::Down }
        );
        clock.advance(800.0);
        assert_eq!(
            nav.navigate(0),
            NavOutcome::Transition { from: 2, to: 1, direction: Direction::Up }
        );
        assert_eq!(nav.navigate(7), NavOutcome::OutOfRange);
    }

    #[test]
    fn navigate_to_distant_section_never_skips() {
        let ids = ["a", "b", "c", "d", "e"];
        let (mut nav, clock) = navigator(SectionTable::new(), &ids);

        let mut transitions = 0;
        while nav.state().current_index != 4 {
            let before = nav.state().current_index;
            assert!(matches!(nav.navigate(4), NavOutcome::Transition { .. }));
            assert_eq!(nav.state().current_index.abs_diff(before), 1);
            transitions += 1;
            clock.advance(800.0);
        }
        assert_eq!(transitions, 4);
        assert_eq!(nav.navigate(4), NavOutcome::Boundary);
    }

    #[test]
    fn rapid_gestures_never_skip_or_escape_bounds() {
        let ids = ["a", "b", "c", "d", "e"];
        let (mut nav, clock) = navigator(SectionTable::new(), &ids);
        let deltas = [120.0, 300.0, -80.0, 500.0, 45.0, -600.0, 90.0, 90.0, 90.0, 90.0, 90.0, -35.0];

        for (i, delta) in deltas.iter().cycle().take(200).enumerate() {
            let before = nav.state().current_index;
            nav.handle_intent(wheel(*delta));
            let after = nav.state().current_index;
            assert!(after < ids.len());
            assert!(before.abs_diff(after) <= 1);
            clock.advance(if i % 3 == 0 { 850.0 } else { 60.0 });
        }
    }

    #[test]
    fn carousel_consumes_steps_before_releasing() {
        let table = SectionTable::new().kind("how", SectionKind::Carousel { steps: 4 });
        let (mut nav, clock) = navigator(table, &["home", "how", "end"]);

        assert!(matches!(nav.handle_intent(wheel(100.0)), NavOutcome::Transition { to: 1, .. }));
        assert_eq!(nav.carousel("how").map(|c| c.is_pinned()), Some(true));
        clock.advance(800.0);

        for expected_step in 1..4 {
            assert_eq!(
                nav.handle_intent(wheel(100.0)),
                NavOutcome::Step { section: 1, step: expected_step }
            );
            assert_eq!(nav.state().current_index, 1);
            clock.advance(800.0);
        }

        assert!(matches!(nav.handle_intent(wheel(100.0)), NavOutcome::Transition { from: 1, to: 2, .. }));
        assert_eq!(nav.carousel("how").map(|c| c.is_pinned()), Some(false));
    }

    #[test]
    fn carousel_step_drops_gestures_during_its_hold() {
        let table = SectionTable::new().kind("how", SectionKind::Carousel { steps: 3 });
        let (mut nav, clock) = navigator(table, &["how", "end"]);

        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Step { section: 0, step: 1 });
        clock.advance(50.0);
        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Dropped);
        clock.advance(NavigatorConfig::default().step_duration_ms);
        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Step { section: 0, step: 2 });
    }

    #[test]
    fn entering_carousel_from_below_rewinds_through_steps() {
        let table = SectionTable::new().kind("how", SectionKind::Carousel { steps: 3 });
        let (mut nav, clock) = navigator(table, &["how", "end"]);
        nav.navigate(1);
        clock.advance(800.0);

        assert!(matches!(nav.handle_intent(wheel(-100.0)), NavOutcome::Transition { to: 0, .. }));
        assert_eq!(nav.carousel("how").map(|c| c.active_step()), Some(2));
        clock.advance(800.0);
        assert_eq!(nav.handle_intent(wheel(-100.0)), NavOutcome::Step { section: 0, step: 1 });
    }

    #[test]
    fn touch_devices_only_snap_between_flagged_sections() {
        let table = SectionTable::new().snap_on_touch("home").snap_on_touch("how");
        let (mut nav, _clock) = navigator(table, &["home", "how", "problem"]);
        nav.set_device_class(DeviceClass::Touch);

        assert!(matches!(nav.handle_intent(wheel(100.0)), NavOutcome::Transition { to: 1, .. }));
        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Dropped);
    }

    #[test]
    fn touch_swipe_into_unflagged_section_scrolls_natively() {
        let table = SectionTable::new().snap_on_touch("home").snap_on_touch("how");
        let (mut nav, _clock) = navigator(table, &["home", "problem", "how"]);
        nav.set_device_class(DeviceClass::Touch);

        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Native);
        assert!(!NavOutcome::Native.consumes_event());
        assert_eq!(nav.state().current_index, 0);
        assert!(!nav.state().locked);

        assert!(nav.sync_to(1));
        assert_eq!(nav.handle_intent(wheel(100.0)), NavOutcome::Native);

        nav.set_device_class(DeviceClass::Desktop);
        assert!(matches!(nav.handle_intent(wheel(100.0)), NavOutcome::Transition { to: 2, .. }));
    }

    #[test]
    fn internal_scroll_sections_defer_to_browser() {
        let table = SectionTable::new().internal_scroll("contact");
        let (mut nav, clock) = navigator(table, &["home", "contact"]);
        nav.handle_intent(wheel(100.0));
        clock.advance(800.0);
        assert_eq!(nav.handle_intent(wheel(-100.0)), NavOutcome::Native);
        assert!(!nav.intercepts_current());
    }

    #[test]
    fn sync_follows_native_scroll_only_when_idle() {
        let table = SectionTable::new().kind("how", SectionKind::Carousel { steps: 2 });
        let (mut nav, clock) = navigator(table, &["home", "how", "end"]);

        assert!(nav.sync_to(1));
        assert_eq!(nav.state().current_index, 1);
        assert_eq!(nav.carousel("how").map(|c| c.is_pinned()), Some(true));
        assert!(!nav.sync_to(1));
        assert!(!nav.sync_to(9));

        nav.navigate(2);
        assert!(!nav.sync_to(0));
        clock.advance(800.0);
        assert!(nav.sync_to(0));
        assert_eq!(nav.state().direction, Direction::Up);
    }

    #[test]
    fn revert_restores_previous_section_and_frees_lock() {
        let (mut nav, _clock) = navigator(SectionTable::new(), &["home", "middle"]);
        let outcome = nav.handle_intent(wheel(100.0));
        nav.revert(outcome);
        assert_eq!(nav.state().current_index, 0);
        assert!(!nav.state().locked);
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let (nav, _clock) = navigator(SectionTable::new(), &["home", "home", "end"]);
        assert_eq!(nav.section_ids(), vec!["home".to_string(), "end".to_string()]);
    }

    #[test]
    fn snapshot_reports_steps_and_pins() {
        let table = SectionTable::new().kind("how", SectionKind::Carousel { steps: 3 });
        let (mut nav, _clock) = navigator(table, &["home", "how"]);
        nav.navigate(1);

        let snapshot = nav.snapshot();
        assert_eq!(snapshot.active, 1);
        assert!(snapshot.transitioning);
        assert_eq!(snapshot.steps, vec![None, Some(0)]);
        assert!(snapshot.is_pinned(1));
        assert!(!snapshot.is_pinned(0));
        assert_eq!(snapshot.step_of(5), 0);
    }

    #[test]
    fn device_class_from_viewport() {
        assert_eq!(DeviceClass::classify(1280.0, false, 768.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::classify(768.0, false, 768.0), DeviceClass::Touch);
        assert_eq!(DeviceClass::classify(1280.0, true, 768.0), DeviceClass::Touch);
    }
}
