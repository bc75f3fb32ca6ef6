//! Layout helpers: split the terminal into page + status bar, and stack the
//! page's sections along the document's scroll axis.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::content::PROJECTS;
use crate::core::geometry::{Span, Viewport};
use crate::core::pin::scroll_distance;
use crate::core::sequencer::{SectionGeometry, SectionId};

pub const HERO_MIN_ROWS: u16 = 22;
pub const ABOUT_ROWS: u16 = 34;
pub const SKILLS_ROWS: u16 = 42;
pub const FOOTER_ROWS: u16 = 3;

/// Screen regions plus the document layout for the current terminal size.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Where the page is drawn.
    pub page_area: Rect,
    pub status_area: Rect,
    pub hero: Span,
    pub about: Span,
    /// Includes the spacer consumed while the strip is pinned.
    pub projects: Span,
    pub skills: Span,
    pub footer: Span,
    /// Width of the horizontal project strip (one screen per project).
    pub projects_width: f64,
}

impl PageLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);
        let page_area = chunks[0];
        let width = f64::from(page_area.width);
        let height = f64::from(page_area.height);

        let projects_width = width * PROJECTS.len() as f64;
        let pin_distance = scroll_distance(projects_width, width);

        let hero = Span::new(0.0, height.max(f64::from(HERO_MIN_ROWS)));
        let about = Span::new(hero.end(), f64::from(ABOUT_ROWS));
        let projects = Span::new(about.end(), height + pin_distance);
        let skills = Span::new(projects.end(), f64::from(SKILLS_ROWS));
        let footer = Span::new(skills.end(), f64::from(FOOTER_ROWS));

        Self {
            page_area,
            status_area: chunks[1],
            hero,
            about,
            projects,
            skills,
            footer,
            projects_width,
        }
    }

    pub fn span(&self, id: SectionId) -> Span {
        match id {
            SectionId::Hero => self.hero,
            SectionId::About => self.about,
            SectionId::Projects => self.projects,
            SectionId::Skills => self.skills,
        }
    }

    /// Geometry for every section, as the sequencer consumes it.
    pub fn geometry(&self) -> Vec<(SectionId, SectionGeometry)> {
        SectionId::ALL
            .iter()
            .map(|&id| {
                let content_width = if id == SectionId::Projects {
                    self.projects_width
                } else {
                    f64::from(self.page_area.width)
                };
                (
                    id,
                    SectionGeometry {
                        span: self.span(id),
                        content_width,
                    },
                )
            })
            .collect()
    }

    pub fn geometry_of(&self, id: SectionId) -> SectionGeometry {
        self.geometry()
            .into_iter()
            .find(|(s, _)| *s == id)
            .map(|(_, g)| g)
            .unwrap_or_default()
    }

    pub fn total_height(&self) -> f64 {
        self.footer.end()
    }

    /// Largest scroll offset that still fills the page.
    pub fn max_scroll(&self) -> f64 {
        (self.total_height() - f64::from(self.page_area.height)).max(0.0)
    }

    pub fn viewport(&self, scroll_y: f64) -> Viewport {
        Viewport::new(
            f64::from(self.page_area.width),
            f64::from(self.page_area.height),
            scroll_y,
        )
    }

    /// Section occupying the top of the page at `scroll_y`.
    pub fn section_at(&self, scroll_y: f64) -> SectionId {
        SectionId::ALL
            .iter()
            .rev()
            .copied()
            .find(|&id| self.span(id).start <= scroll_y + 0.5)
            .unwrap_or(SectionId::Hero)
    }
}
