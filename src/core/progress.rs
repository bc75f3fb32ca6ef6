//! Scroll progress of a tracked element through an anchor window.
//!
//! A window is two anchors, each pairing an edge of the tracked element with
//! an edge of the viewport: `"start end"` means "the element's start meets
//! the viewport's end".  Progress is always recomputed from positions, never
//! accumulated, so it cannot drift.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::geometry::{Span, Viewport};

/// Edge of a span, as a fraction of its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Edge::Start => "start",
            Edge::Center => "center",
            Edge::End => "end",
        }
    }
}

impl FromStr for Edge {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::Start),
            "center" => Ok(Edge::Center),
            "end" => Ok(Edge::End),
            other => Err(AnchorParseError::UnknownEdge(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnchorParseError {
    #[error("unknown anchor edge `{0}` (expected start, center or end)")]
    UnknownEdge(String),
    #[error("anchor `{0}` must be two edges, e.g. \"start end\"")]
    Malformed(String),
}

/// Meeting point of an element edge and a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub target: Edge,
    pub container: Edge,
}

impl Anchor {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Scroll offset at which this anchor is met.
    pub fn offset(&self, target: Span, viewport_height: f64) -> f64 {
        target.at(self.target.fraction()) - viewport_height * self.container.fraction()
    }
}

impl FromStr for Anchor {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(c), None) => Ok(Anchor::new(t.parse()?, c.parse()?)),
            _ => Err(AnchorParseError::Malformed(s.to_string())),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target.keyword(), self.container.keyword())
    }
}

/// Start and end anchors bounding the tracked scroll range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollWindow {
    /// From the moment the element enters at the bottom until it has left
    /// through the top.
    pub const ENTER_TO_EXIT: ScrollWindow = ScrollWindow {
        start: Anchor::new(Edge::Start, Edge::End),
        end: Anchor::new(Edge::End, Edge::Start),
    };

    /// Progress in `[0, 1]` for the given element and viewport.
    ///
    /// Zero-height elements, degenerate or inverted windows and non-finite
    /// inputs all report 0.
    pub fn progress(&self, target: Span, viewport: &Viewport) -> f64 {
        if target.is_empty() {
            return 0.0;
        }
        let from = self.start.offset(target, viewport.height);
        let to = self.end.offset(target, viewport.height);
        let range = to - from;
        if range <= 0.0 || !range.is_finite() {
            return 0.0;
        }
        let p = (viewport.scroll_y - from) / range;
        if p.is_finite() {
            p.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Continuously updated progress for one tracked element.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProgressTracker {
    window: ScrollWindow,
    progress: f64,
    attached: bool,
}

impl ScrollProgressTracker {
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            window,
            progress: 0.0,
            attached: true,
        }
    }

    /// Recompute from current positions.  A detached tracker keeps its last
    /// value.
    pub fn update(&mut self, target: Span, viewport: &Viewport) -> f64 {
        if self.attached {
            self.progress = self.window.progress(target, viewport);
        }
        self.progress
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vp(scroll_y: f64) -> Viewport {
        Viewport::new(80.0, 20.0, scroll_y)
    }

    #[test]
    fn parses_anchor_keywords() {
        let a: Anchor = "start end".parse().unwrap();
        assert_eq!(a, Anchor::new(Edge::Start, Edge::End));
        assert_eq!(a.to_string(), "start end");
        assert_eq!(
            "top end".parse::<Anchor>(),
            Err(AnchorParseError::UnknownEdge("top".into()))
        );
        assert!(matches!(
            "start".parse::<Anchor>(),
            Err(AnchorParseError::Malformed(_))
        ));
    }

    #[test]
    fn enter_to_exit_endpoints() {
        // Element at rows 100..130, viewport 20 rows tall.
        // Starts when scroll_y = 100 - 20 = 80, ends at scroll_y = 130.
        let target = Span::new(100.0, 30.0);
        let w = ScrollWindow::ENTER_TO_EXIT;
        assert_eq!(w.progress(target, &vp(80.0)), 0.0);
        assert_eq!(w.progress(target, &vp(130.0)), 1.0);
        assert_eq!(w.progress(target, &vp(105.0)), 0.5);
        assert_eq!(w.progress(target, &vp(0.0)), 0.0);
        assert_eq!(w.progress(target, &vp(500.0)), 1.0);
    }

    #[test]
    fn degenerate_inputs_report_zero() {
        let w = ScrollWindow::ENTER_TO_EXIT;
        assert_eq!(w.progress(Span::new(50.0, 0.0), &vp(60.0)), 0.0);

        // start == end window
        let flat = ScrollWindow {
            start: Anchor::new(Edge::Start, Edge::Start),
            end: Anchor::new(Edge::Start, Edge::Start),
        };
        assert_eq!(flat.progress(Span::new(50.0, 10.0), &vp(70.0)), 0.0);

        // inverted window
        let inverted = ScrollWindow {
            start: Anchor::new(Edge::End, Edge::Start),
            end: Anchor::new(Edge::Start, Edge::End),
        };
        assert_eq!(inverted.progress(Span::new(50.0, 10.0), &vp(55.0)), 0.0);

        assert_eq!(w.progress(Span::new(50.0, 10.0), &vp(f64::NAN)), 0.0);
    }

    #[test]
    fn detached_tracker_holds_last_value() {
        let target = Span::new(100.0, 30.0);
        let mut t = ScrollProgressTracker::new(ScrollWindow::ENTER_TO_EXIT);
        assert_eq!(t.update(target, &vp(105.0)), 0.5);
        t.detach();
        assert_eq!(t.update(target, &vp(130.0)), 0.5);
        assert!(!t.attached);
    }

    proptest! {
        #[test]
        fn progress_is_monotone_and_bounded(
            start in -100.0f64..500.0,
            len in 1.0f64..200.0,
            height in 1.0f64..80.0,
            mut scrolls in prop::collection::vec(-200.0f64..900.0, 2..50),
        ) {
            scrolls.sort_by(|a, b| a.total_cmp(b));
            let target = Span::new(start, len);
            let w = ScrollWindow::ENTER_TO_EXIT;
            let mut last = 0.0;
            for y in scrolls {
                let p = w.progress(target, &Viewport::new(80.0, height, y));
                prop_assert!((0.0..=1.0).contains(&p));
                prop_assert!(p >= last);
                last = p;
            }
        }
    }
}
