//! Central application state.
//!
//! All mutable state lives here so that rendering is a pure function over
//! `&AppState` and event handling mutates `&mut AppState`.

use std::time::Duration;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::content::hero_counter_targets;
use crate::core::keyframes::KeyframeError;
use crate::core::motion::{Immediate, MotionDriver};
use crate::core::progress::ScrollWindow;
use crate::core::sequencer::{SectionId, SectionSpec, Sequencer};
use crate::ui::easing::SmoothDriver;
use crate::ui::layout::PageLayout;
use crate::ui::skills::{strip_motion, STRIP_TRAVEL};

/// Catch-up time of the page scroll behind its target.
const SCROLL_LAG: Duration = Duration::from_millis(120);
/// Catch-up time of the project strip behind the pinned scroll position.
const PIN_SCRUB: Duration = Duration::from_secs(1);

fn driver(motion: bool) -> Box<dyn MotionDriver> {
    if motion {
        Box::new(SmoothDriver::new())
    } else {
        Box::new(Immediate)
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub layout: PageLayout,
    pub seq: Sequencer,
    /// Where scrolling is heading; `scroll_y` follows it every frame.
    pub scroll_target: f64,
    /// Scroll offset currently drawn, in page rows.
    pub scroll_y: f64,
    pub motion: bool,
    pub should_quit: bool,
    /// Transient message shown in place of the key hint.
    pub status_message: Option<String>,
    /// Year printed in the footer.
    pub year: i32,
    last_frame: Duration,
}

impl AppState {
    /// Lay out the page for a terminal of `area`, mount every section, and
    /// start at `start`.
    pub fn new(
        config: AppConfig,
        area: Rect,
        start: SectionId,
        year: i32,
        now: Duration,
    ) -> Result<Self, KeyframeError> {
        let layout = PageLayout::from_area(area);
        let scroll = layout.span(start).start.min(layout.max_scroll());
        let motion = !config.reduced_motion;
        let mut seq = Sequencer::new(driver(motion), layout.viewport(scroll));

        let sections = [
            SectionSpec::new(SectionId::Hero)
                .reveal()
                .counter(hero_counter_targets(), config.counter_config()),
            SectionSpec::new(SectionId::About).reveal(),
            SectionSpec::new(SectionId::Projects).pin(PIN_SCRUB),
            SectionSpec::new(SectionId::Skills)
                .reveal()
                .track(ScrollWindow::ENTER_TO_EXIT, strip_motion(STRIP_TRAVEL)?),
        ];
        for spec in sections {
            let geometry = layout.geometry_of(spec.id);
            seq.mount(spec, geometry, now);
        }
        tracing::info!(?start, motion, rows = layout.total_height(), "page mounted");

        Ok(Self {
            config,
            layout,
            seq,
            scroll_target: scroll,
            scroll_y: scroll,
            motion,
            should_quit: false,
            status_message: None,
            year,
            last_frame: now,
        })
    }

    /// Re-layout for a new terminal size, keeping the scroll position where
    /// it still fits.
    pub fn resize(&mut self, area: Rect) {
        self.layout = PageLayout::from_area(area);
        let max = self.layout.max_scroll();
        self.scroll_target = self.scroll_target.clamp(0.0, max);
        self.scroll_y = self.scroll_y.clamp(0.0, max);
        self.seq
            .on_resize(self.layout.viewport(self.scroll_y), &self.layout.geometry());
        tracing::debug!(width = area.width, height = area.height, "resized");
    }

    pub fn scroll_by(&mut self, rows: f64) {
        self.scroll_to(self.scroll_target + rows);
    }

    pub fn scroll_to(&mut self, y: f64) {
        if y.is_finite() {
            self.scroll_target = y.clamp(0.0, self.layout.max_scroll());
        }
    }

    pub fn jump_to(&mut self, id: SectionId) {
        self.scroll_to(self.layout.span(id).start);
    }

    /// Next section below the scroll target; stays put on the last one.
    pub fn next_section(&mut self) {
        let current = self.layout.section_at(self.scroll_target);
        if let Some(next) = SectionId::ALL.iter().find(|&&id| id > current) {
            self.jump_to(*next);
        }
    }

    /// Start of the current section, or the previous one when already there.
    pub fn prev_section(&mut self) {
        let current = self.layout.section_at(self.scroll_target);
        if self.scroll_target > self.layout.span(current).start + 0.5 {
            self.jump_to(current);
        } else if let Some(prev) = SectionId::ALL.iter().rev().find(|&&id| id < current) {
            self.jump_to(*prev);
        }
    }

    pub fn toggle_motion(&mut self) {
        self.motion = !self.motion;
        self.seq.set_driver(driver(self.motion));
        let label = if self.motion { "on" } else { "off" };
        self.status_message = Some(format!("Motion {label}"));
        tracing::info!(motion = self.motion, "motion toggled");
    }

    /// Advance smoothing, timers and counters to `now`.
    pub fn on_frame(&mut self, now: Duration) {
        let dt = now.saturating_sub(self.last_frame);
        self.last_frame = self.last_frame.max(now);
        self.seq.advance_clock(now);

        let next = self
            .seq
            .driver()
            .follow(self.scroll_y, self.scroll_target, SCROLL_LAG, dt);
        if next != self.scroll_y {
            self.scroll_y = next;
            self.seq.on_scroll(next);
        }
        self.seq.on_frame(now);
    }

    pub fn teardown(&mut self) {
        self.seq.teardown();
    }

    pub fn current_section(&self) -> SectionId {
        self.layout.section_at(self.scroll_y)
    }

    /// How far down the page the view is, in percent.
    pub fn scroll_percent(&self) -> u16 {
        let max = self.layout.max_scroll();
        if max <= 0.0 {
            return 100;
        }
        (self.scroll_y / max * 100.0).round().clamp(0.0, 100.0) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pin::PinPhase;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn state(start: SectionId, motion: bool) -> AppState {
        let config = AppConfig {
            reduced_motion: !motion,
            ..AppConfig::default()
        };
        AppState::new(config, Rect::new(0, 0, 100, 31), start, 2026, Duration::ZERO).unwrap()
    }

    #[test]
    fn mounts_every_section() {
        let s = state(SectionId::Hero, true);
        for &id in SectionId::ALL {
            assert!(s.seq.section(id).is_some_and(|x| x.is_mounted()), "{id}");
        }
        assert!(s.seq.section(SectionId::Hero).unwrap().is_revealed());
        assert!(!s.seq.section(SectionId::About).unwrap().is_revealed());
    }

    #[test]
    fn projects_has_no_reveal() {
        let mut s = state(SectionId::Hero, false);
        s.jump_to(SectionId::Projects);
        s.on_frame(ms(16));
        assert_eq!(s.seq.section(SectionId::Projects).unwrap().revealed_at(), None);
    }

    #[test]
    fn reveal_on_scroll_is_stamped_with_the_frame_time() {
        let mut s = state(SectionId::Hero, false);
        s.jump_to(SectionId::About);
        s.on_frame(ms(500));
        let about = s.seq.section(SectionId::About).unwrap();
        assert!(about.is_revealed());
        assert_eq!(about.revealed_at(), Some(ms(500)));
    }

    #[test]
    fn start_section_sets_the_scroll() {
        let s = state(SectionId::About, true);
        assert_eq!(s.scroll_y, s.layout.about.start);
        assert_eq!(s.current_section(), SectionId::About);
        assert!(s.seq.section(SectionId::About).unwrap().is_revealed());
    }

    #[test]
    fn scroll_target_is_clamped() {
        let mut s = state(SectionId::Hero, true);
        s.scroll_by(-10.0);
        assert_eq!(s.scroll_target, 0.0);
        s.scroll_by(1e9);
        assert_eq!(s.scroll_target, s.layout.max_scroll());
        s.scroll_to(f64::NAN);
        assert_eq!(s.scroll_target, s.layout.max_scroll());
    }

    #[test]
    fn immediate_scroll_lands_in_one_frame() {
        let mut s = state(SectionId::Hero, false);
        s.jump_to(SectionId::Projects);
        s.on_frame(ms(16));
        assert_eq!(s.scroll_y, s.layout.projects.start);
        assert_eq!(s.current_section(), SectionId::Projects);
    }

    #[test]
    fn smooth_scroll_converges() {
        let mut s = state(SectionId::Hero, true);
        s.scroll_to(30.0);
        s.on_frame(ms(16));
        assert!(s.scroll_y > 0.0 && s.scroll_y < 30.0);
        for i in 2..200 {
            s.on_frame(ms(16 * i));
        }
        assert_eq!(s.scroll_y, 30.0);
    }

    #[test]
    fn pinning_follows_the_page() {
        let mut s = state(SectionId::Hero, false);
        s.scroll_to(s.layout.projects.start + 150.0);
        s.on_frame(ms(16));
        let projects = s.seq.section(SectionId::Projects).unwrap();
        let frame = projects.pin_frame().unwrap();
        assert_eq!(frame.phase, PinPhase::Pinned);
        assert_eq!(frame.translate_x, -150.0);
        assert_eq!(projects.pin_translate(), -150.0);
    }

    #[test]
    fn section_navigation() {
        let mut s = state(SectionId::Hero, false);
        s.next_section();
        assert_eq!(s.scroll_target, s.layout.about.start);
        s.next_section();
        assert_eq!(s.scroll_target, s.layout.projects.start);
        s.scroll_by(5.0);
        s.prev_section();
        assert_eq!(s.scroll_target, s.layout.projects.start);
        s.prev_section();
        assert_eq!(s.scroll_target, s.layout.about.start);
    }

    #[test]
    fn resize_keeps_scroll_in_range() {
        let mut s = state(SectionId::Hero, false);
        s.scroll_to(1e9);
        s.on_frame(ms(16));
        s.resize(Rect::new(0, 0, 60, 31));
        assert!(s.scroll_y <= s.layout.max_scroll());
        let distance = s.seq.section(SectionId::Projects).unwrap().pin_distance();
        assert_eq!(distance, 180.0);
    }

    #[test]
    fn toggling_motion_reports_it() {
        let mut s = state(SectionId::Hero, true);
        s.toggle_motion();
        assert!(!s.motion);
        assert_eq!(s.status_message.as_deref(), Some("Motion off"));
    }

    #[test]
    fn counters_run_on_frames() {
        let mut s = state(SectionId::Hero, true);
        s.on_frame(ms(3000));
        assert_eq!(s.seq.section(SectionId::Hero).unwrap().counts(), &[6, 16]);
    }

    #[test]
    fn teardown_stops_everything() {
        let mut s = state(SectionId::Hero, true);
        s.teardown();
        let before = s.seq.section(SectionId::Hero).unwrap().clone();
        s.on_frame(ms(500));
        assert_eq!(s.seq.section(SectionId::Hero).unwrap(), &before);
    }
}
