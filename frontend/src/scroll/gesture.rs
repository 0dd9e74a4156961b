//! Turns raw wheel, touch and keyboard input into a signed scroll intent.
//!
//! Positive intent means "forward" (towards the next section, down the page),
//! negative means "back". Nothing here decides navigation; it only classifies
//! how strong a gesture was and which way it pointed.

pub const DEFAULT_THRESHOLD_PX: f64 = 40.0;

// WheelEvent.deltaMode values
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    pub fn between(from: usize, to: usize) -> Self {
        if to < from {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub magnitude: f64,
    pub significant: bool,
}

impl Intent {
    pub fn new(magnitude: f64, threshold: f64) -> Self {
        Self {
            magnitude,
            significant: magnitude.is_finite() && magnitude.abs() >= threshold,
        }
    }

    /// Normalizes a wheel delta to pixels before classifying it.
    ///
    /// Line-mode deltas (Firefox on some platforms) count 16px per line and
    /// page-mode deltas count one viewport height per page.
    pub fn from_wheel(delta_y: f64, delta_mode: u32, viewport_height: f64, threshold: f64) -> Self {
        let pixels = match delta_mode {
            DOM_DELTA_LINE => delta_y * LINE_HEIGHT_PX,
            DOM_DELTA_PAGE => delta_y * viewport_height,
            _ => delta_y,
        };
        Self::new(pixels, threshold)
    }

    /// A finger moving up the screen scrolls the page forward.
    pub fn from_touch(start_y: f64, end_y: f64, threshold: f64) -> Self {
        Self::new(start_y - end_y, threshold)
    }

    /// Keyboard navigation always counts as a deliberate gesture.
    pub fn from_key(key: &str) -> Option<Self> {
        let magnitude = match key {
            "ArrowDown" | "PageDown" | " " | "Spacebar" => 1.0,
            "ArrowUp" | "PageUp" => -1.0,
            _ => return None,
        };
        Some(Self {
            magnitude,
            significant: true,
        })
    }

    pub fn direction(&self) -> Option<Direction> {
        if self.magnitude > 0.0 {
            Some(Direction::Down)
        } else if self.magnitude < 0.0 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

/// Accumulates one touch gesture from `touchstart` to `touchend`.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    start_y: Option<f64>,
    last_y: Option<f64>,
}

impl TouchTracker {
    pub fn begin(&mut self, y: f64) {
        self.start_y = Some(y);
        self.last_y = Some(y);
    }

    pub fn update(&mut self, y: f64) {
        if self.start_y.is_some() {
            self.last_y = Some(y);
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }

    /// Ends the gesture. `end_y` comes from `changedTouches` and wins over the
    /// last `touchmove` position when present.
    pub fn finish(&mut self, end_y: Option<f64>, threshold: f64) -> Option<Intent> {
        let start = self.start_y.take()?;
        let last = self.last_y.take();
        let end = end_y.or(last)?;
        Some(Intent::from_touch(start, end, threshold))
    }

    pub fn cancel(&mut self) {
        self.start_y = None;
        self.last_y = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_above_threshold_is_significant_forward() {
        let intent = Intent::from_wheel(100.0, 0, 900.0, DEFAULT_THRESHOLD_PX);
        assert!(intent.significant);
        assert_eq!(intent.direction(), Some(Direction::Down));
    }

    #[test]
    fn small_wheel_delta_is_not_significant() {
        let intent = Intent::from_wheel(-12.0, 0, 900.0, DEFAULT_THRESHOLD_PX);
        assert!(!intent.significant);
        assert_eq!(intent.direction(), Some(Direction::Up));
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(Intent::new(40.0, 40.0).significant);
        assert!(Intent::new(-40.0, 40.0).significant);
        assert!(!Intent::new(39.9, 40.0).significant);
    }

    #[test]
    fn line_and_page_modes_are_scaled() {
        let lines = Intent::from_wheel(3.0, 1, 900.0, DEFAULT_THRESHOLD_PX);
        assert_eq!(lines.magnitude, 48.0);
        assert!(lines.significant);

        let pages = Intent::from_wheel(-1.0, 2, 900.0, DEFAULT_THRESHOLD_PX);
        assert_eq!(pages.magnitude, -900.0);
    }

    #[test]
    fn nan_delta_is_ignored() {
        let intent = Intent::new(f64::NAN, DEFAULT_THRESHOLD_PX);
        assert!(!intent.significant);
        assert_eq!(intent.direction(), None);
    }

    #[test]
    fn swipe_up_scrolls_forward() {
        let intent = Intent::from_touch(600.0, 450.0, DEFAULT_THRESHOLD_PX);
        assert_eq!(intent.magnitude, 150.0);
        assert_eq!(intent.direction(), Some(Direction::Down));

        let back = Intent::from_touch(300.0, 320.0, DEFAULT_THRESHOLD_PX);
        assert!(!back.significant);
        assert_eq!(back.direction(), Some(Direction::Up));
    }

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(Intent::from_key("PageDown").and_then(|i| i.direction()), Some(Direction::Down));
        assert_eq!(Intent::from_key("ArrowUp").and_then(|i| i.direction()), Some(Direction::Up));
        assert!(Intent::from_key("Enter").is_none());
    }

    #[test]
    fn tracker_prefers_changed_touch_then_last_move() {
        let mut tracker = TouchTracker::default();
        tracker.begin(500.0);
        tracker.update(420.0);
        let intent = tracker.finish(None, DEFAULT_THRESHOLD_PX).unwrap();
        assert_eq!(intent.magnitude, 80.0);
        assert!(!tracker.is_tracking());

        tracker.begin(500.0);
        tracker.update(420.0);
        let intent = tracker.finish(Some(300.0), DEFAULT_THRESHOLD_PX).unwrap();
        assert_eq!(intent.magnitude, 200.0);
    }

    #[test]
    fn tracker_without_start_yields_nothing() {
        let mut tracker = TouchTracker::default();
        tracker.update(100.0);
        assert!(tracker.finish(Some(10.0), DEFAULT_THRESHOLD_PX).is_none());

        tracker.begin(100.0);
        tracker.cancel();
        assert!(tracker.finish(Some(10.0), DEFAULT_THRESHOLD_PX).is_none());
    }

    #[test]
    fn direction_between_indices() {
        assert_eq!(Direction::between(2, 1), Direction::Up);
        assert_eq!(Direction::between(0, 3), Direction::Down);
        assert_eq!(Direction::Up.step(), -1);
    }
}
