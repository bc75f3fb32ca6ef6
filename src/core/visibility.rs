//! One-shot viewport visibility observer.
//!
//! The revealed flag only ever moves `false → true`.  Once revealed (or once
//! disconnected) further observations are ignored.

use super::geometry::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityObserver {
    revealed: bool,
    connected: bool,
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self {
            revealed: false,
            connected: true,
        }
    }

    /// Feed the current region and viewport.  Returns `true` only on the
    /// observation that flips the flag.
    pub fn observe(&mut self, region: Span, viewport: Span) -> bool {
        if !self.connected || self.revealed {
            return false;
        }
        if region.intersects(&viewport) {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Stop observing.  The flag keeps whatever value it had.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}
