//! Section descriptions and the per-kind gating rules the navigator consults
//! before it moves between sections.

use std::collections::HashMap;

use super::gesture::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Plain full-viewport section. Gestures always pass through.
    Standard,
    /// Internally paginated section. Gestures move the step pointer until it
    /// reaches a boundary.
    Carousel { steps: usize },
}

/// What a section's gate decided about a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    PassThrough,
    Consumed { step: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    active_step: usize,
    step_count: usize,
    is_pinned: bool,
}

impl CarouselState {
    pub fn new(step_count: usize) -> Self {
        Self {
            active_step: 0,
            step_count: step_count.max(1),
            is_pinned: false,
        }
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    pub fn at_boundary(&self, direction: Direction) -> bool {
        match direction {
            Direction::Down => self.active_step + 1 >= self.step_count,
            Direction::Up => self.active_step == 0,
        }
    }

    /// Moves one step. Returns false at the boundary.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.at_boundary(direction) {
            return false;
        }
        match direction {
            Direction::Down => self.active_step += 1,
            Direction::Up => self.active_step -= 1,
        }
        true
    }

    /// Arriving from above starts at the first step, from below at the last.
    pub fn enter(&mut self, direction: Direction) {
        self.is_pinned = true;
        self.active_step = match direction {
            Direction::Down => 0,
            Direction::Up => self.step_count - 1,
        };
    }

    pub fn leave(&mut self) {
        self.is_pinned = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub kind: SectionKind,
    /// Native scrolling inside this section instead of snapping.
    pub allow_internal_scroll: bool,
    /// Takes part in snap navigation on touch devices.
    pub snap_on_touch: bool,
    carousel: Option<CarouselState>,
}

impl Section {
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        let carousel = match kind {
            SectionKind::Carousel { steps } => Some(CarouselState::new(steps)),
            SectionKind::Standard => None,
        };
        Self {
            id: id.into(),
            kind,
            allow_internal_scroll: false,
            snap_on_touch: false,
            carousel,
        }
    }

    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref()
    }

    /// Runs this section's gating rule for a gesture made while it is the
    /// current section.
    pub fn gate(&mut self, direction: Direction) -> Gate {
        match (self.kind, self.carousel.as_mut()) {
            (SectionKind::Carousel { .. }, Some(carousel)) => {
                if carousel.advance(direction) {
                    Gate::Consumed {
                        step: carousel.active_step(),
                    }
                } else {
                    Gate::PassThrough
                }
            }
            _ => Gate::PassThrough,
        }
    }

    pub(crate) fn enter(&mut self, direction: Direction) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.enter(direction);
        }
    }

    pub(crate) fn leave(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.leave();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionSpec {
    kind: SectionKind,
    allow_internal_scroll: bool,
    snap_on_touch: bool,
}

impl Default for SectionSpec {
    fn default() -> Self {
        Self {
            kind: SectionKind::Standard,
            allow_internal_scroll: false,
            snap_on_touch: false,
        }
    }
}

/// Lookup table from section id to its behaviour. Ids without an entry build
/// as standard sections.
#[derive(Debug, Clone, Default)]
pub struct SectionTable {
    specs: HashMap<String, SectionSpec>,
}

impl SectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, id: &str, kind: SectionKind) -> Self {
        self.specs.entry(id.to_string()).or_default().kind = kind;
        self
    }

    pub fn internal_scroll(mut self, id: &str) -> Self {
        self.specs.entry(id.to_string()).or_default().allow_internal_scroll = true;
        self
    }

    pub fn snap_on_touch(mut self, id: &str) -> Self {
        self.specs.entry(id.to_string()).or_default().snap_on_touch = true;
        self
    }

    pub fn build(&self, ids: &[&str]) -> Vec<Section> {
        ids.iter()
            .map(|id| {
                let spec = self.specs.get(*id).copied().unwrap_or_default();
                let mut section = Section::new(*id, spec.kind);
                section.allow_internal_scroll = spec.allow_internal_scroll;
                section.snap_on_touch = spec.snap_on_touch;
                section
            })
            .collect()
    }
}
