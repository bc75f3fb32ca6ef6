//! Scroll-axis geometry shared by every sequencing component.
//!
//! Positions are document units (terminal rows on the vertical axis,
//! columns on the horizontal one).  Nothing here knows about rendering.

/// A one-dimensional extent: `start` plus a non-negative `len`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub start: f64,
    pub len: f64,
}

impl Span {
    /// Build a span; negative lengths collapse to zero.
    pub fn new(start: f64, len: f64) -> Self {
        Self {
            start,
            len: len.max(0.0),
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len <= 0.0 || self.len.is_nan()
    }

    /// Position at `fraction` of the way through the span (0 = start, 1 = end).
    pub fn at(&self, fraction: f64) -> f64 {
        self.start + self.len * fraction
    }

    /// Does any part of `self` lie inside `other`?
    ///
    /// An empty span is treated as a point: it intersects when the point
    /// falls within `other`'s half-open range.
    pub fn intersects(&self, other: &Span) -> bool {
        if other.is_empty() {
            return false;
        }
        if self.is_empty() {
            return other.start <= self.start && self.start < other.end();
        }
        self.start < other.end() && other.start < self.end()
    }
}

/// The visible window of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Document offset of the top edge.
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            scroll_y,
        }
    }

    /// The vertical document span currently on screen.
    pub fn visible(&self) -> Span {
        Span::new(self.scroll_y, self.height)
    }

    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }
}
