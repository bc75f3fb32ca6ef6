//! Skills section.  The three skill cards form a strip that drifts left and
//! fades in and out as the section crosses the viewport; inside it, rows,
//! bars and tools enter on a staggered timeline after reveal.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::paint::{self, cells, shifted};
use super::theme::Theme;
use crate::content::{
    Rgb, SkillGroup, BACKEND, FRONTEND, SKILLS_TAGLINE, SKILLS_TITLE, SKILL_HIGHLIGHTS, TOOLS,
    TOOLS_ACCENT, TOOLS_TITLE,
};
use crate::core::keyframes::{Breakpoints, Channel, KeyframeError, MotionConfig};
use crate::core::motion::{Ease, Entrance, FadeSlide, Transition};
use crate::core::sequencer::{SectionId, Sequencer};

/// Horizontal drift of the strip across the whole enter-to-exit window.
pub const STRIP_TRAVEL: f64 = 40.0;

const CARD_WIDTH: u16 = 36;
const CARD_GAP: u16 = 3;
pub const STRIP_WIDTH: u16 = CARD_WIDTH * 3 + CARD_GAP * 2;
const STRIP_ROWS: u16 = 21;

const FRONTEND_ROW: FadeSlide = FadeSlide::new(-4.0, 0.0, Transition::new(600));
const BACKEND_ROW: FadeSlide = FadeSlide::new(4.0, 0.0, Transition::new(600).delayed(200));
const FRONTEND_BAR: Entrance =
    Entrance::new(0.0, 0.0, Transition::new(1000).delayed(500).eased(Ease::EaseOut));
const BACKEND_BAR: Entrance =
    Entrance::new(0.0, 0.0, Transition::new(1000).delayed(700).eased(Ease::EaseOut));
const TOOL: FadeSlide = FadeSlide::new(0.0, 1.0, Transition::new(600).delayed(400));
const HIGHLIGHT: FadeSlide = FadeSlide::new(0.0, 2.0, Transition::new(600).delayed(1000));

/// Scroll-linked motion of the strip: drift left over the whole window,
/// visible only through its middle.
pub fn strip_motion(travel: f64) -> Result<MotionConfig, KeyframeError> {
    Ok(MotionConfig::new()
        .with(Channel::TranslateX, Breakpoints::ramp(0.0, -travel)?)
        .with(
            Channel::Opacity,
            Breakpoints::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0])?,
        ))
}

pub struct SkillsSection<'a> {
    pub seq: &'a Sequencer,
}

impl Widget for SkillsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = Theme::SKILLS_BG;
        paint::fill(buf, area, bg);

        let [_, heading, tagline, _, strip, _, highlights] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(STRIP_ROWS),
            Constraint::Length(2),
            Constraint::Length(4),
        ])
        .areas(area);

        let pose = self.seq.pose(SectionId::Skills, &paint::HEADING);
        paint::heading(buf, heading, SKILLS_TITLE, bg, pose);
        if let Some(at) = shifted(tagline, 0, cells(pose.dy), area) {
            Paragraph::new(SKILLS_TAGLINE)
                .style(Style::default().fg(Theme::fade(Theme::MUTED, bg, pose.opacity)))
                .alignment(Alignment::Center)
                .render(at, buf);
        }

        self.render_strip(strip, buf);
        self.render_highlights(highlights, buf);
    }
}

impl SkillsSection<'_> {
    fn strip_sample(&self) -> (f64, f64) {
        let sample = self.seq.section(SectionId::Skills).and_then(|s| s.sample());
        match sample {
            Some(s) => (
                s.get_or(Channel::TranslateX, 0.0),
                s.get_or(Channel::Opacity, 1.0),
            ),
            None => (0.0, 1.0),
        }
    }

    fn render_strip(&self, area: Rect, buf: &mut Buffer) {
        let (translate_x, opacity) = self.strip_sample();
        if opacity <= 0.0 {
            return;
        }

        let mut strip = Buffer::empty(Rect::new(0, 0, STRIP_WIDTH, STRIP_ROWS));
        let strip_area = strip.area;
        paint::fill(&mut strip, strip_area, Theme::SKILLS_BG);
        let [front, back, tools] = Layout::horizontal([Constraint::Length(CARD_WIDTH); 3])
            .spacing(CARD_GAP)
            .areas(strip_area);
        self.render_group(&FRONTEND, FRONTEND_ROW, FRONTEND_BAR, front, &mut strip, opacity);
        self.render_group(&BACKEND, BACKEND_ROW, BACKEND_BAR, back, &mut strip, opacity);
        self.render_tools(tools, &mut strip, opacity);

        let left = (i32::from(area.width) - i32::from(STRIP_WIDTH)) / 2 + cells(translate_x);
        paint::blit(&strip, -left, 0, buf, area);
    }

    /// Card frame and surface colour for a strip card at `opacity`.
    fn card(area: Rect, buf: &mut Buffer, title: &str, accent: Rgb, opacity: f64) -> (Rect, Rgb) {
        let surface = Theme::mix(Theme::SKILLS_BG, Theme::CARD_BG, opacity);
        paint::fill(buf, area, surface);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(
                Style::default().fg(Theme::fade(Theme::TRACK, Theme::SKILLS_BG, opacity)),
            )
            .title(Line::styled(
                format!(" {title} "),
                Style::default()
                    .fg(Theme::fade(accent, surface, opacity))
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area).inner(Margin::new(2, 1));
        block.render(area, buf);
        (inner, surface)
    }

    fn render_group(
        &self,
        group: &SkillGroup,
        row: FadeSlide,
        bar: Entrance,
        area: Rect,
        buf: &mut Buffer,
        opacity: f64,
    ) {
        let (inner, surface) = Self::card(area, buf, group.title, group.accent, opacity);
        let rows = Layout::vertical(group.skills.iter().map(|_| Constraint::Length(3))).split(inner);

        for (i, (skill, slot)) in group.skills.iter().zip(rows.iter()).enumerate() {
            let pose = self.seq.pose(SectionId::Skills, &row.staggered(i, 100));
            let Some(slot) = shifted(*slot, cells(pose.dx), 0, inner) else {
                continue;
            };
            let alpha = opacity * pose.opacity;
            let level = self.seq.entrance(
                SectionId::Skills,
                &bar.staggered(i, 100).ending_at(f64::from(skill.level)),
            );

            let percent = format!("{}%", skill.level);
            let pad = usize::from(slot.width).saturating_sub(skill.name.len() + percent.len());
            let label = Line::from(vec![
                Span::styled(
                    skill.name,
                    Style::default().fg(Theme::fade(Theme::TEXT, surface, alpha)),
                ),
                Span::raw(" ".repeat(pad)),
                Span::styled(
                    percent,
                    Style::default().fg(Theme::fade(Theme::MUTED, surface, alpha)),
                ),
            ]);
            buf.set_line(slot.x, slot.y, &label, slot.width);
            if slot.height > 1 {
                let meter = Rect::new(slot.x, slot.y + 1, slot.width, 1);
                bar_meter(buf, meter, level, (skill.tint.from, skill.tint.to), surface, alpha);
            }
        }
    }

    fn render_tools(&self, area: Rect, buf: &mut Buffer, opacity: f64) {
        let (inner, surface) = Self::card(area, buf, TOOLS_TITLE, TOOLS_ACCENT, opacity);
        let rows = Layout::vertical(TOOLS.iter().map(|_| Constraint::Length(3))).split(inner);
        for (i, (tool, slot)) in TOOLS.iter().zip(rows.iter()).enumerate() {
            let pose = self.seq.pose(SectionId::Skills, &TOOL.staggered(i, 100));
            let Some(slot) = shifted(*slot, 0, cells(pose.dy), inner) else {
                continue;
            };
            let alpha = opacity * pose.opacity;
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", tool.icon),
                    Style::default().bg(Theme::fade(tool.tint.from, surface, alpha)),
                ),
                Span::raw("  "),
                Span::styled(
                    tool.name,
                    Style::default()
                        .fg(Theme::fade(tool.tint.to, surface, alpha))
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            buf.set_line(slot.x, slot.y, &line, slot.width);
        }
    }

    fn render_highlights(&self, area: Rect, buf: &mut Buffer) {
        let bg = Theme::SKILLS_BG;
        let slots = Layout::horizontal(SKILL_HIGHLIGHTS.iter().map(|_| Constraint::Length(22)))
            .flex(Flex::SpaceAround)
            .split(area);
        for (i, (highlight, slot)) in SKILL_HIGHLIGHTS.iter().zip(slots.iter()).enumerate() {
            let pose = self.seq.pose(SectionId::Skills, &HIGHLIGHT.staggered(i, 100));
            let Some(at) = shifted(*slot, 0, cells(pose.dy), area) else {
                continue;
            };
            let gradient = (Theme::HEADING_FROM, Theme::HEADING_TO);
            paint::gradient_text(buf, at, highlight.number, gradient, bg, pose.opacity);
            if at.height > 1 {
                Paragraph::new(highlight.label)
                    .style(Style::default().fg(Theme::fade(Theme::MUTED, bg, pose.opacity)))
                    .alignment(Alignment::Center)
                    .render(Rect::new(at.x, at.y + 1, at.width, 1), buf);
            }
        }
    }
}

/// Horizontal proficiency meter filled to `level` percent.
fn bar_meter(
    buf: &mut Buffer,
    area: Rect,
    level: f64,
    (from, to): (Rgb, Rgb),
    surface: Rgb,
    alpha: f64,
) {
    let width = f64::from(area.width);
    let filled = (width * level.clamp(0.0, 100.0) / 100.0).round() as u16;
    for i in 0..area.width {
        let (symbol, colour) = if i < filled {
            let t = f64::from(i) / (width - 1.0).max(1.0);
            ("━", Theme::fade(Theme::mix(from, to, t), surface, alpha))
        } else {
            ("─", Theme::fade(Theme::TRACK, surface, alpha))
        };
        buf.set_string(area.x + i, area.y, symbol, Style::default().fg(colour));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Span as Region, Viewport};
    use crate::core::motion::Immediate;
    use crate::core::progress::ScrollWindow;
    use crate::core::sequencer::{SectionGeometry, SectionSpec};
    use crate::ui::easing::SmoothDriver;
    use crate::ui::layout::SKILLS_ROWS;
    use crate::ui::paint::buffer_text;
    use std::time::Duration;

    /// Skills at rows 100..142 of a 30-row viewport: the enter-to-exit
    /// window runs from scroll 70 to 142.
    fn mounted(scroll: f64) -> Sequencer {
        let mut seq = Sequencer::new(Box::new(Immediate), Viewport::new(110.0, 30.0, scroll));
        let motion = strip_motion(STRIP_TRAVEL).unwrap();
        seq.mount(
            SectionSpec::new(SectionId::Skills)
                .reveal()
                .track(ScrollWindow::ENTER_TO_EXIT, motion),
            SectionGeometry {
                span: Region::new(100.0, f64::from(SKILLS_ROWS)),
                content_width: 110.0,
            },
            Duration::ZERO,
        );
        seq
    }

    fn render(seq: &Sequencer) -> String {
        let area = Rect::new(0, 0, 110, SKILLS_ROWS);
        let mut buf = Buffer::empty(area);
        SkillsSection { seq }.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn strip_motion_tables() {
        let m = strip_motion(40.0).unwrap();
        let mid = m.sample(0.5);
        assert_eq!(mid.get(Channel::TranslateX), Some(-20.0));
        assert_eq!(mid.get(Channel::Opacity), Some(1.0));
        assert_eq!(m.sample(0.1).get(Channel::Opacity), Some(0.5));
        assert_eq!(m.sample(1.0).get(Channel::Opacity), Some(0.0));
    }

    #[test]
    fn strip_shows_mid_window() {
        let seq = mounted(106.0);
        let state = seq.section(SectionId::Skills).unwrap();
        assert_eq!(state.progress(), 0.5);

        let text = render(&seq);
        assert!(text.contains("Technical Skills"));
        assert!(text.contains("Backend"));
        assert!(text.contains("PostgreSQL"));
        assert!(text.contains("Tools & DevOps"));
        assert!(text.contains("Client Satisfaction"));
    }

    #[test]
    fn strip_hidden_once_scrolled_past() {
        let mut seq = mounted(106.0);
        seq.on_scroll(142.0);
        assert_eq!(seq.section(SectionId::Skills).unwrap().progress(), 1.0);
        let text = render(&seq);
        assert!(!text.contains("Backend"));
        assert!(text.contains("Technical Skills"));
    }

    #[test]
    fn meter_fills_to_level() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let tint = ((0, 0, 0), (255, 255, 255));
        bar_meter(&mut buf, Rect::new(0, 0, 10, 1), 80.0, tint, (0, 0, 0), 1.0);
        let row: String = (0..10u16).map(|x| buf[(x, 0u16)].symbol().to_string()).collect();
        assert_eq!(row, "━━━━━━━━──");
    }

    #[test]
    fn rows_and_tools_settle_after_their_delay_plus_600ms() {
        let driver = SmoothDriver::new();
        let ms = Duration::from_millis;
        for (enter, delay) in [(FRONTEND_ROW, 0), (BACKEND_ROW, 200), (TOOL, 400)] {
            assert!(enter.pose(Some(ms(delay + 500)), &driver).opacity < 1.0);
            assert_eq!(enter.pose(Some(ms(delay + 600)), &driver).opacity, 1.0);
        }
    }
}
