//! The hero's "PORTFOLIO" blob button: a knockout label inside a shape
//! that wobbles through a short keyframe loop.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::theme::Theme;
use crate::content::Rgb;

/// Outline frames, one per quarter of the loop.  Each entry is
/// (top edge, side glyph left, side glyph right, bottom edge).
const BLOB_FRAMES: &[(&str, &str, &str, &str)] = &[
    ("▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄", "█", "█", "▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀"),
    (" ▄▄▄▄▄▆▆▄▄▄▄▃▃▄▄ ", "▐", "█", "▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀ "),
    ("  ▃▄▄▄▄▄▆▆▆▄▄▄▄  ", "█", "▌", " ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀"),
    (" ▄▄▃▃▄▄▄▄▄▄▆▆▄▄▄ ", "▐", "▌", " ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀ "),
];

/// One full wobble.
const LOOP: Duration = Duration::from_millis(2000);

pub struct BlobButton<'a> {
    pub label: &'a str,
    /// Time since start; drives the wobble frame.
    pub clock: Duration,
    pub fill: Rgb,
    pub background: Rgb,
    pub opacity: f64,
}

impl BlobButton<'_> {
    pub const WIDTH: u16 = 19;
    pub const HEIGHT: u16 = 3;

    fn frame(&self) -> usize {
        let phase = self.clock.as_millis() % LOOP.as_millis();
        (phase * BLOB_FRAMES.len() as u128 / LOOP.as_millis()) as usize
    }
}

impl Widget for BlobButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < Self::WIDTH || area.height < Self::HEIGHT {
            return;
        }
        let (top, left, right, bottom) = BLOB_FRAMES[self.frame() % BLOB_FRAMES.len()];
        let fill = Theme::fade(self.fill, self.background, self.opacity);
        let shape = Style::default().fg(fill);
        // Knockout: the label shows the background through the fill.
        let label = Style::default()
            .fg(Theme::rgb(self.background))
            .bg(fill)
            .add_modifier(Modifier::BOLD);

        let x = area.x + (area.width - Self::WIDTH) / 2;
        let y = area.y;
        buf.set_string(x + 1, y, top, shape);
        buf.set_string(x, y + 1, left, shape);
        let inner = Self::WIDTH - 2;
        buf.set_string(x + 1, y + 1, format!("{:^w$}", self.label, w = inner as usize), label);
        buf.set_string(x + Self::WIDTH - 1, y + 1, right, shape);
        buf.set_string(x + 1, y + 2, bottom, shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_cycles_over_the_loop() {
        let mut b = BlobButton {
            label: "PORTFOLIO",
            clock: Duration::ZERO,
            fill: Theme::WHITE,
            background: Theme::HERO_BG,
            opacity: 1.0,
        };
        assert_eq!(b.frame(), 0);
        b.clock = Duration::from_millis(500);
        assert_eq!(b.frame(), 1);
        b.clock = Duration::from_millis(1999);
        assert_eq!(b.frame(), 3);
        b.clock = Duration::from_millis(2000);
        assert_eq!(b.frame(), 0);
    }

    #[test]
    fn label_is_centred_in_the_shape() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        BlobButton {
            label: "PORTFOLIO",
            clock: Duration::ZERO,
            fill: Theme::WHITE,
            background: Theme::HERO_BG,
            opacity: 1.0,
        }
        .render(area, &mut buf);
        let row: String = (0..30u16).map(|x| buf[(x, 1u16)].symbol().to_string()).collect();
        assert!(row.contains("PORTFOLIO"));
    }
}
