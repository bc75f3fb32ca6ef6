//! Pinned horizontal scrolling.
//!
//! While the page scrolls through a vertical stretch equal to the overflow
//! of a wide strip (`content width − viewport width`), the section stays
//! pinned and the strip translates left by the same amount.  Afterwards the
//! pin releases and normal scrolling resumes.

/// Horizontal overflow of `content_width` in a viewport of `viewport_width`.
pub fn scroll_distance(content_width: f64, viewport_width: f64) -> f64 {
    let d = content_width - viewport_width;
    if d.is_finite() && d > 0.0 {
        d
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    /// Trigger not reached yet; the section scrolls normally.
    Before,
    /// Section locked to the viewport top while the strip translates.
    Pinned,
    /// Full distance traversed; the section scrolls away normally.
    Released,
}

/// What the renderer needs for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinFrame {
    pub phase: PinPhase,
    /// Horizontal offset of the strip (zero or negative).
    pub translate_x: f64,
    /// Fraction of the distance traversed, in `[0, 1]`.
    pub progress: f64,
}

impl PinFrame {
    fn at_rest(phase: PinPhase) -> Self {
        Self {
            phase,
            translate_x: 0.0,
            progress: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinnedScroller {
    /// Scroll offset at which the section's top meets the viewport top.
    trigger_start: f64,
    distance: f64,
    alive: bool,
}

impl PinnedScroller {
    pub fn new(trigger_start: f64, content_width: f64, viewport_width: f64) -> Self {
        Self {
            trigger_start,
            distance: scroll_distance(content_width, viewport_width),
            alive: true,
        }
    }

    /// Recompute after a layout change.  Ignored once killed.
    pub fn relayout(&mut self, trigger_start: f64, content_width: f64, viewport_width: f64) {
        if !self.alive {
            return;
        }
        self.trigger_start = trigger_start;
        self.distance = scroll_distance(content_width, viewport_width);
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Pin state at page offset `scroll_y`.
    pub fn frame(&self, scroll_y: f64) -> PinFrame {
        let local = scroll_y - self.trigger_start;
        if !local.is_finite() || local < 0.0 {
            return PinFrame::at_rest(PinPhase::Before);
        }
        // Zero distance (or a killed pin) never locks the page.
        if !self.alive || self.distance <= 0.0 {
            return PinFrame::at_rest(PinPhase::Released);
        }
        let progress = (local / self.distance).clamp(0.0, 1.0);
        PinFrame {
            phase: if local > self.distance {
                PinPhase::Released
            } else {
                PinPhase::Pinned
            },
            translate_x: -self.distance * progress,
            progress,
        }
    }

    /// Release the pin for good.
    pub fn kill(&mut self) {
        self.alive = false;
        self.distance = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_overflow() {
        assert_eq!(scroll_distance(2000.0, 800.0), 1200.0);
        assert_eq!(scroll_distance(800.0, 800.0), 0.0);
        assert_eq!(scroll_distance(500.0, 800.0), 0.0);
    }

    #[test]
    fn translation_tracks_scroll_and_clamps() {
        let pin = PinnedScroller::new(0.0, 2000.0, 800.0);
        assert_eq!(pin.distance(), 1200.0);

        assert_eq!(pin.frame(0.0).translate_x, 0.0);
        assert_eq!(pin.frame(0.0).phase, PinPhase::Pinned);
        assert_eq!(pin.frame(600.0).translate_x, -600.0);
        assert_eq!(pin.frame(1200.0).translate_x, -1200.0);

        assert_eq!(pin.frame(-50.0).translate_x, 0.0);
        assert_eq!(pin.frame(-50.0).phase, PinPhase::Before);
        assert_eq!(pin.frame(5000.0).translate_x, -1200.0);
        assert_eq!(pin.frame(5000.0).phase, PinPhase::Released);
    }

    #[test]
    fn trigger_offset_shifts_the_window() {
        let pin = PinnedScroller::new(300.0, 2000.0, 800.0);
        assert_eq!(pin.frame(300.0).translate_x, 0.0);
        assert_eq!(pin.frame(900.0).translate_x, -600.0);
        assert_eq!(pin.frame(1500.0).progress, 1.0);
    }

    #[test]
    fn narrow_content_never_pins() {
        let pin = PinnedScroller::new(0.0, 600.0, 800.0);
        for y in [0.0, 10.0, 1000.0] {
            let f = pin.frame(y);
            assert_ne!(f.phase, PinPhase::Pinned);
            assert_eq!(f.translate_x, 0.0);
        }
    }

    #[test]
    fn relayout_recomputes_distance() {
        let mut pin = PinnedScroller::new(0.0, 2000.0, 800.0);
        pin.relayout(0.0, 2000.0, 1500.0);
        assert_eq!(pin.distance(), 500.0);
        assert_eq!(pin.frame(1200.0).translate_x, -500.0);
    }

    #[test]
    fn killed_pin_is_inert() {
        let mut pin = PinnedScroller::new(0.0, 2000.0, 800.0);
        pin.kill();
        pin.relayout(0.0, 4000.0, 800.0);
        assert_eq!(pin.distance(), 0.0);
        assert_eq!(pin.frame(600.0).translate_x, 0.0);
        assert_ne!(pin.frame(600.0).phase, PinPhase::Pinned);
    }
}
