//! The horizontal project strip.  Rendered at full width (one slide per
//! project, each one viewport wide); the compositor shows a window of it
//! translated by the pinned scroller.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::paint;
use super::theme::Theme;
use crate::content::{Project, PROJECTS};

const CARD_WIDTH: u16 = 84;
const CARD_HEIGHT: u16 = 16;

pub struct ProjectsStrip;

/// Slide rectangles for a strip drawn into `area`.
pub fn slides(area: Rect) -> Vec<Rect> {
    let n = PROJECTS.len().max(1) as u16;
    let width = area.width / n;
    (0..n)
        .map(|i| Rect::new(area.x + i * width, area.y, width, area.height))
        .collect()
}

fn chips(technologies: &[&'static str]) -> Line<'static> {
    let chip = Style::default()
        .fg(Theme::rgb(Theme::CREAM))
        .bg(Theme::rgb(Theme::mix(Theme::PROJECTS_BG, Theme::HERO_BG, 0.35)));
    let mut spans = Vec::with_capacity(technologies.len() * 2);
    for (i, tech) in technologies.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {tech} "), chip));
    }
    Line::from(spans)
}

fn buttons() -> Line<'static> {
    let solid = Style::default()
        .fg(Theme::rgb(Theme::WHITE))
        .bg(Theme::rgb(Theme::ORANGE))
        .add_modifier(Modifier::BOLD);
    let outline = Style::default()
        .fg(Theme::rgb(Theme::ORANGE))
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(" ‹/› Code ", solid),
        Span::raw("   "),
        Span::styled("[ ↗ Live Demo ]", outline),
    ])
}

fn render_card(project: &Project, index: usize, slide: Rect, buf: &mut Buffer) {
    let [card] = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
        .flex(Flex::Center)
        .areas(slide.inner(Margin::new(2, 0)));
    let [card] = Layout::vertical([Constraint::Max(CARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(card);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::rgb(Theme::CREAM)));
    let inner = block.inner(card).inner(Margin::new(2, 1));
    block.render(card, buf);

    let [counter, _, title, _, description, _, tech, _, actions] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(format!("{:02} / {:02}", index + 1, PROJECTS.len()))
        .style(Style::default().fg(Theme::rgb(Theme::ORANGE)))
        .alignment(Alignment::Right)
        .render(counter, buf);
    Paragraph::new(project.title)
        .style(
            Style::default()
                .fg(Theme::rgb(Theme::WHITE))
                .add_modifier(Modifier::BOLD),
        )
        .render(title, buf);
    Paragraph::new(project.description)
        .style(Style::default().fg(Theme::rgb(Theme::CREAM)))
        .wrap(Wrap { trim: true })
        .render(description, buf);
    Paragraph::new(chips(project.technologies))
        .wrap(Wrap { trim: false })
        .render(tech, buf);
    Paragraph::new(buttons()).render(actions, buf);
}

impl Widget for ProjectsStrip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        paint::fill(buf, area, Theme::PROJECTS_BG);
        for (i, (project, slide)) in PROJECTS.iter().zip(slides(area)).enumerate() {
            render_card(project, i, slide, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::paint::buffer_text;

    #[test]
    fn one_slide_per_project() {
        let s = slides(Rect::new(0, 0, 400, 30));
        assert_eq!(s.len(), PROJECTS.len());
        assert_eq!(s[1], Rect::new(100, 0, 100, 30));
    }

    #[test]
    fn each_slide_carries_its_project() {
        let area = Rect::new(0, 0, 400, 30);
        let mut buf = Buffer::empty(area);
        ProjectsStrip.render(area, &mut buf);

        let window = Rect::new(0, 0, 100, 30);
        let mut second = Buffer::empty(window);
        paint::blit(&buf, 100, 0, &mut second, window);
        let text = buffer_text(&second);
        assert!(text.contains("Task Management App"));
        assert!(text.contains("02 / 04"));
        assert!(text.contains("Live Demo"));
        assert!(!text.contains("E-Commerce Platform"));
    }
}
