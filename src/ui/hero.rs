//! Hero banner: gradient headline, tagline, the wobbling portfolio button,
//! and the looping statistics counters.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::paint;
use super::pulse::BlobButton;
use super::theme::Theme;
use crate::content::{HERO_BUTTON, HERO_HEADLINE, HERO_STATS, HERO_TAGLINE};

const CONTENT_WIDTH: u16 = 72;
const STAT_CARD: (u16, u16) = (28, 4);
/// Background of the translucent stat cards (white at 5% over black).
const STAT_BG: (u8, u8, u8) = (13, 13, 13);

pub struct HeroSection<'a> {
    /// Current counter values, one per hero statistic.
    pub counts: &'a [u32],
    pub clock: Duration,
}

fn headline() -> Line<'static> {
    let (lead, accent, tail) = HERO_HEADLINE;
    let n = accent.chars().count().max(2) - 1;
    let bold_white = Style::default()
        .fg(Theme::rgb(Theme::WHITE))
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(lead, bold_white)];
    spans.extend(accent.chars().enumerate().map(|(i, ch)| {
        Span::styled(
            ch.to_string(),
            Style::default()
                .fg(Theme::gradient(Theme::INDIGO, Theme::VIOLET, i as f64 / n as f64))
                .add_modifier(Modifier::BOLD),
        )
    }));
    spans.push(Span::styled(tail, bold_white));
    Line::from(spans)
}

impl Widget for HeroSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        paint::fill(buf, area, Theme::HERO_BG);

        let [column] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [title, _, tagline, _, button, _, stats] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(BlobButton::HEIGHT),
            Constraint::Length(2),
            Constraint::Length(STAT_CARD.1),
        ])
        .flex(Flex::Center)
        .areas(column);

        Paragraph::new(headline())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(title, buf);

        Paragraph::new(HERO_TAGLINE)
            .style(Style::default().fg(Theme::rgb(Theme::MUTED)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(tagline, buf);

        BlobButton {
            label: HERO_BUTTON,
            clock: self.clock,
            fill: Theme::WHITE,
            background: Theme::HERO_BG,
            opacity: 1.0,
        }
        .render(button, buf);

        let cards = Layout::horizontal(
            HERO_STATS
                .iter()
                .map(|_| Constraint::Length(STAT_CARD.0)),
        )
        .flex(Flex::SpaceAround)
        .split(stats);

        for (i, (stat, card)) in HERO_STATS.iter().zip(cards.iter()).enumerate() {
            paint::fill(buf, *card, STAT_BG);
            let value = self.counts.get(i).copied().unwrap_or(0);
            let lines = vec![
                Line::raw(""),
                Line::styled(
                    format!("{value}+"),
                    Style::default()
                        .fg(Theme::rgb(Theme::INDIGO))
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(stat.label, Style::default().fg(Theme::rgb(Theme::MUTED))),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(*card, buf);
        }
    }
}
