//! About section: heading, monogram avatar, bio column and feature cards,
//! each fading and sliding in once the section is revealed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::paint::{self, cells, shifted};
use super::theme::Theme;
use crate::content::{
    Rgb, ABOUT_BUTTON, ABOUT_HEADLINE, ABOUT_MONOGRAM, ABOUT_PARAGRAPHS, FEATURES,
};
use crate::core::motion::{FadeSlide, Pose, Transition};
use crate::core::sequencer::{SectionId, Sequencer};

const AVATAR: FadeSlide = FadeSlide::new(-6.0, 0.0, Transition::new(800).delayed(200));
const BIO: FadeSlide = FadeSlide::new(6.0, 0.0, Transition::new(800).delayed(400));
/// First feature card; later cards follow 200 ms apart.
const FEATURE: FadeSlide = FadeSlide::new(0.0, 3.0, Transition::new(800).delayed(600));

const CONTENT_WIDTH: u16 = 100;

pub struct AboutSection<'a> {
    pub seq: &'a Sequencer,
}

impl Widget for AboutSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = Theme::ABOUT_BG;
        paint::fill(buf, area, bg);

        let [column] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(area.inner(Margin::new(2, 0)));
        let [_, heading, _, intro, _, features] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(14),
            Constraint::Length(2),
            Constraint::Length(9),
        ])
        .areas(column);

        paint::heading(buf, heading, "About Me", bg, self.pose(&paint::HEADING));

        let [avatar, bio] =
            Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)])
                .spacing(4)
                .areas(intro);
        self.render_avatar(avatar, buf, bg);
        self.render_bio(bio, buf, bg);
        self.render_features(features, buf, bg);
    }
}

impl AboutSection<'_> {
    fn pose(&self, enter: &FadeSlide) -> Pose {
        self.seq.pose(SectionId::About, enter)
    }

    fn render_avatar(&self, area: Rect, buf: &mut Buffer, bg: Rgb) {
        let pose = self.pose(&AVATAR);
        let [disc] = Layout::horizontal([Constraint::Length(26)])
            .flex(Flex::Center)
            .areas(area);
        let [disc] = Layout::vertical([Constraint::Length(12)])
            .flex(Flex::Center)
            .areas(disc);
        let Some(disc) = shifted(disc, cells(pose.dx), 0, buf.area) else {
            return;
        };

        let ring = Theme::fade(Theme::HEADING_FROM, bg, pose.opacity * 0.5);
        let core = Theme::fade(Theme::INDIGO, bg, pose.opacity);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ring));
        let inner = block.inner(disc);
        block.render(disc, buf);
        buf.set_style(inner, Style::default().bg(core));

        let [label] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        Paragraph::new(ABOUT_MONOGRAM)
            .style(
                Style::default()
                    .fg(Theme::fade(Theme::WHITE, bg, pose.opacity))
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .render(label, buf);
    }

    fn render_bio(&self, area: Rect, buf: &mut Buffer, bg: Rgb) {
        let pose = self.pose(&BIO);
        let Some(area) = shifted(area, cells(pose.dx), 0, buf.area) else {
            return;
        };
        let text = Style::default().fg(Theme::fade(Theme::TEXT, bg, pose.opacity));

        let mut lines = vec![
            Line::styled(
                ABOUT_HEADLINE,
                Style::default()
                    .fg(Theme::fade(Theme::WHITE, bg, pose.opacity))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
        ];
        for p in ABOUT_PARAGRAPHS {
            lines.push(Line::styled(*p, text));
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            format!(" {ABOUT_BUTTON} "),
            Style::default()
                .fg(Theme::fade(Theme::WHITE, bg, pose.opacity))
                .bg(Theme::fade(Theme::INDIGO, bg, pose.opacity))
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer, bg: Rgb) {
        let slots = Layout::horizontal(FEATURES.iter().map(|_| Constraint::Fill(1)))
            .spacing(3)
            .split(area);
        for (i, (feature, slot)) in FEATURES.iter().zip(slots.iter()).enumerate() {
            let pose = self.pose(&FEATURE.staggered(i, 200));
            let Some(card) = shifted(*slot, 0, cells(pose.dy), area) else {
                continue;
            };
            let surface = Theme::mix(bg, Theme::CARD_BG, pose.opacity);
            paint::fill(buf, card, surface);
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Theme::fade(Theme::TRACK, bg, pose.opacity)));
            let inner = block.inner(card);
            block.render(card, buf);

            let lines = vec![
                Line::styled(
                    feature.icon,
                    Style::default().fg(Theme::fade(Theme::HEADING_FROM, surface, pose.opacity)),
                ),
                Line::raw(""),
                Line::styled(
                    feature.title,
                    Style::default()
                        .fg(Theme::fade(Theme::WHITE, surface, pose.opacity))
                        .add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled(
                    feature.description,
                    Style::default().fg(Theme::fade(Theme::TEXT, surface, pose.opacity)),
                ),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }
    }
}
