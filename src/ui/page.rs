//! Page compositor.  Each section is drawn into its own off-screen buffer
//! at full size, then the part inside the viewport is copied into the frame
//! at its scrolled position.  The pinned project strip is additionally
//! held at the top of the page and shifted horizontally.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::about::AboutSection;
use super::hero::HeroSection;
use super::layout::PageLayout;
use super::paint::{self, cells};
use super::projects::ProjectsStrip;
use super::skills::SkillsSection;
use super::theme::Theme;
use crate::core::geometry::Span as Region;
use crate::core::pin::{PinFrame, PinPhase};
use crate::core::sequencer::{SectionId, Sequencer};

pub struct Page<'a> {
    pub layout: &'a PageLayout,
    pub seq: &'a Sequencer,
    pub scroll_y: f64,
    pub year: i32,
}

/// Page row at which a section's top is drawn.  A pinned section sticks to
/// the top for `pinned_for` rows of scrolling.
fn section_top(span: Region, scroll_y: f64, pinned_for: f64) -> i32 {
    let held = (scroll_y - span.start).clamp(0.0, pinned_for.max(0.0));
    cells(span.start - scroll_y + held)
}

fn rows(len: f64) -> u16 {
    len.clamp(0.0, f64::from(u16::MAX)) as u16
}

fn is_visible(top: i32, rows: u16, area: Rect) -> bool {
    top < i32::from(area.height) && top + i32::from(rows) > 0
}

/// Render `widget` off-screen at `width × height` and copy it into the page
/// with its top at row `top`, scrolled right by `src_x` columns.
fn place<W: Widget>(
    widget: W,
    (width, height): (u16, u16),
    top: i32,
    src_x: i32,
    area: Rect,
    buf: &mut Buffer,
) {
    if !is_visible(top, height, area) {
        return;
    }
    let mut section = Buffer::empty(Rect::new(0, 0, width, height));
    let section_area = section.area;
    widget.render(section_area, &mut section);
    paint::blit(&section, src_x, -top, buf, area);
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let l = self.layout;
        let (width, scroll) = (area.width, self.scroll_y);

        let counts = self
            .seq
            .section(SectionId::Hero)
            .map(|s| s.counts())
            .unwrap_or(&[]);
        let hero = HeroSection {
            counts,
            clock: self.seq.clock(),
        };
        let top = section_top(l.hero, scroll, 0.0);
        place(hero, (width, rows(l.hero.len)), top, 0, area, buf);

        let about = AboutSection { seq: self.seq };
        let top = section_top(l.about, scroll, 0.0);
        place(about, (width, rows(l.about.len)), top, 0, area, buf);

        let projects = self.seq.section(SectionId::Projects);
        let distance = projects.map_or(0.0, |s| s.pin_distance());
        let translate = projects.map_or(0.0, |s| s.pin_translate());
        let top = section_top(l.projects, scroll, distance);
        let size = (rows(l.projects_width), area.height);
        place(ProjectsStrip, size, top, cells(-translate), area, buf);

        let skills = SkillsSection { seq: self.seq };
        let top = section_top(l.skills, scroll, 0.0);
        place(skills, (width, rows(l.skills.len)), top, 0, area, buf);

        let footer = Footer { year: self.year };
        let top = section_top(l.footer, scroll, 0.0);
        place(footer, (width, rows(l.footer.len)), top, 0, area, buf);
    }
}

pub struct Footer {
    pub year: i32,
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        paint::fill(buf, area, Theme::HERO_BG);
        let [line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        Paragraph::new(format!("© {} Portfolio. All rights reserved.", self.year))
            .style(Theme::footer_style())
            .alignment(Alignment::Center)
            .render(line, buf);
    }
}

/// Bottom bar: key hint or status message on the left, position on the
/// right, plus the strip position while the project strip is pinned.
pub struct StatusBar<'a> {
    pub text: &'a str,
    pub section: SectionId,
    pub percent: u16,
    pub pin: Option<PinFrame>,
    pub motion: bool,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut right = String::new();
        if let Some(pin) = self.pin.filter(|p| p.phase == PinPhase::Pinned) {
            right.push_str(&format!("◀ {:>3.0}% ▶  ", pin.progress * 100.0));
        }
        if !self.motion {
            right.push_str("no motion  ");
        }
        right.push_str(&format!("{} {:>3}% ", self.section.label(), self.percent));

        let right_width = Line::raw(right.as_str()).width() as u16;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)])
                .areas(area);
        buf.set_style(area, Theme::status_bar_style());
        Paragraph::new(Line::from(Span::raw(format!(" {}", self.text))))
            .style(Theme::status_bar_style())
            .render(left_area, buf);
        Paragraph::new(right)
            .style(Theme::status_accent_style())
            .alignment(Alignment::Right)
            .render(right_area, buf);
    }
}
