//! Finds the section closest to the middle of the viewport.

use log::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Vertical extent of a section relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index of the rect whose centre is nearest the viewport centre.
///
/// `None` entries are sections that are not rendered. Returns `None` when no
/// section is present at all; callers treat that as a no-op. Ties go to the
/// earlier section.
pub fn locate_centered(rects: &[Option<SectionRect>], viewport_height: f64) -> Option<usize> {
    let viewport_center = viewport_height / 2.0;
    let mut best: Option<(usize, f64)> = None;

    for (index, rect) in rects.iter().enumerate() {
        let Some(rect) = rect else { continue };
        let distance = (rect.center() - viewport_center).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Reads live layout for every id. Not cached; throttle the caller.
pub fn locate_in_document<S: AsRef<str>>(ids: &[S]) -> Option<usize> {
    let rects: Vec<Option<SectionRect>> = ids
        .iter()
        .map(|id| {
            element_by_id(id.as_ref()).map(|el| {
                let rect = el.get_bounding_client_rect();
                SectionRect {
                    top: rect.top(),
                    height: rect.height(),
                }
            })
        })
        .collect();
    locate_centered(&rects, viewport_height())
}

/// Smooth-scrolls the section with `id` to the top of the viewport.
/// Returns false when the element is not in the document.
pub fn scroll_section_into_view(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        debug!("section #{} not found, skipping scroll", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadDecision {
    Read,
    /// Too soon after the last read; read again after this many ms.
    Defer(f64),
}

/// Limits layout reads to one per interval. A deferred read must still be
/// performed once the interval ends, otherwise a scroll that stops inside
/// the window is never observed.
#[derive(Debug, Clone, Copy)]
pub struct ReadThrottle {
    interval_ms: f64,
    last_read: f64,
}

impl ReadThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_read: f64::NEG_INFINITY,
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> ReadDecision {
        let elapsed = now_ms - self.last_read;
        if elapsed >= self.interval_ms || elapsed < 0.0 {
            self.last_read = now_ms;
            ReadDecision::Read
        } else {
            ReadDecision::Defer(self.interval_ms - elapsed)
        }
    }

    /// Records a read made outside `poll`, i.e. by the trailing timer.
    pub fn mark_read(&mut self, now_ms: f64) {
        self.last_read = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, height: f64) -> Option<SectionRect> {
        Some(SectionRect { top, height })
    }

    #[test]
    fn picks_section_straddling_the_middle() {
        // viewport 800 tall, user scrolled 1.2 sections into the page
        let rects = vec![rect(-960.0, 800.0), rect(-160.0, 800.0), rect(640.0, 800.0)];
        assert_eq!(locate_centered(&rects, 800.0), Some(1));
    }

    #[test]
    fn skips_missing_sections() {
        let rects = vec![None, rect(0.0, 800.0), None];
        assert_eq!(locate_centered(&rects, 800.0), Some(1));
    }

    #[test]
    fn nothing_rendered_is_no_section() {
        assert_eq!(locate_centered(&[], 800.0), None);
        assert_eq!(locate_centered(&[None, None], 800.0), None);
    }

    #[test]
    fn ties_resolve_to_earlier_section() {
        // centres at 300 and 500, viewport centre at 400
        let rects = vec![rect(200.0, 200.0), rect(400.0, 200.0)];
        assert_eq!(locate_centered(&rects, 800.0), Some(0));
    }

    #[test]
    fn tall_sections_use_their_own_centre() {
        let rects = vec![rect(0.0, 400.0), rect(400.0, 2000.0)];
        assert_eq!(locate_centered(&rects, 800.0), Some(0));
    }

    #[test]
    fn throttle_defers_reads_inside_the_interval() {
        let mut throttle = ReadThrottle::new(100.0);
        assert_eq!(throttle.poll(0.0), ReadDecision::Read);
        assert_eq!(throttle.poll(60.0), ReadDecision::Defer(40.0));
        assert_eq!(throttle.poll(100.0), ReadDecision::Read);
    }

    #[test]
    fn trailing_read_restarts_the_interval() {
        let mut throttle = ReadThrottle::new(100.0);
        throttle.poll(0.0);
        // scroll stops at 60; the deferred read lands when the window closes
        let ReadDecision::Defer(wait) = throttle.poll(60.0) else {
            panic!("expected a deferred read");
        };
        throttle.mark_read(60.0 + wait);
        assert_eq!(throttle.poll(150.0), ReadDecision::Defer(50.0));
        assert_eq!(throttle.poll(200.0), ReadDecision::Read);
    }

    #[test]
    fn clock_going_backwards_reads_immediately() {
        let mut throttle = ReadThrottle::new(100.0);
        throttle.poll(500.0);
        assert_eq!(throttle.poll(10.0), ReadDecision::Read);
    }
}
