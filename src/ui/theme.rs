//! Colour palette, text styles, and opacity blending.

use ratatui::style::{Color, Modifier, Style};

use crate::content::Rgb;

/// Central theme. Every colour the page uses is defined here.
pub struct Theme;

impl Theme {
    // ── section backgrounds ────────────────────────────────────
    pub const HERO_BG: Rgb = (0, 0, 0);
    pub const ABOUT_BG: Rgb = (24, 30, 41);
    pub const PROJECTS_BG: Rgb = (122, 155, 142);
    pub const SKILLS_BG: Rgb = (17, 24, 39);
    pub const CARD_BG: Rgb = (31, 41, 55);

    // ── brand ──────────────────────────────────────────────────
    pub const INDIGO: Rgb = (94, 98, 255);
    pub const VIOLET: Rgb = (153, 102, 255);
    pub const HEADING_FROM: Rgb = (96, 165, 250);
    pub const HEADING_TO: Rgb = (192, 132, 252);
    pub const CREAM: Rgb = (244, 241, 232);
    pub const ORANGE: Rgb = (249, 115, 22);
    pub const TEXT: Rgb = (229, 231, 235);
    pub const MUTED: Rgb = (156, 163, 175);
    pub const TRACK: Rgb = (55, 65, 81);
    pub const WHITE: Rgb = (255, 255, 255);

    pub fn rgb(c: Rgb) -> Color {
        Color::Rgb(c.0, c.1, c.2)
    }

    /// Linear blend from `a` (t = 0) to `b` (t = 1).
    pub fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let ch = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
        (ch(a.0, b.0), ch(a.1, b.1), ch(a.2, b.2))
    }

    /// `fg` drawn at `opacity` over `bg`.
    pub fn fade(fg: Rgb, bg: Rgb, opacity: f64) -> Color {
        Self::rgb(Self::mix(bg, fg, opacity))
    }

    /// Colour at `t` along a gradient.
    pub fn gradient(from: Rgb, to: Rgb, t: f64) -> Color {
        Self::rgb(Self::mix(from, to, t))
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn status_accent_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_blends_toward_background() {
        assert_eq!(Theme::fade((200, 100, 0), (0, 0, 0), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(Theme::fade((200, 100, 0), (0, 0, 0), 1.0), Color::Rgb(200, 100, 0));
        assert_eq!(Theme::fade((200, 100, 0), (0, 0, 0), 0.5), Color::Rgb(100, 50, 0));
        assert_eq!(Theme::fade((200, 100, 0), (0, 0, 0), 9.0), Color::Rgb(200, 100, 0));
    }
}
