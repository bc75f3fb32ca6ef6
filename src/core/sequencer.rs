//! Per-section animation state and event dispatch.
//!
//! The [`Sequencer`] owns every section's observer, tracker, pin and counter
//! exclusively.  Events are dispatched in arrival order to the sections that
//! subscribed to them.  Unmounting a section releases all of its
//! subscriptions; events arriving afterwards leave it untouched.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use super::counter::{CounterAnimator, CounterConfig};
use super::geometry::{Span, Viewport};
use super::keyframes::{MotionConfig, Sample};
use super::motion::{Entrance, FadeSlide, MotionDriver, Pose};
use super::pin::{PinFrame, PinPhase, PinnedScroller};
use super::progress::{ScrollProgressTracker, ScrollWindow};
use super::visibility::VisibilityObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Skills,
}

impl SectionId {
    pub const ALL: &[SectionId] = &[
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Event kinds a section can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    Scroll,
    Resize,
    Frame,
}

/// Layout facts about one section, supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionGeometry {
    /// Document span.  For a pinned section this includes the pin spacer.
    pub span: Span,
    /// Width of the horizontally scrolled content (pinned sections only).
    pub content_width: f64,
}

/// Declarative description of what a section animates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub id: SectionId,
    pub reveal: bool,
    pub track: Option<(ScrollWindow, MotionConfig)>,
    /// Scrub catch-up time for a pinned strip.
    pub pin: Option<Duration>,
    pub counter: Option<(Vec<u32>, CounterConfig)>,
}

impl SectionSpec {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            reveal: false,
            track: None,
            pin: None,
            counter: None,
        }
    }

    pub fn reveal(mut self) -> Self {
        self.reveal = true;
        self
    }

    pub fn track(mut self, window: ScrollWindow, motion: MotionConfig) -> Self {
        self.track = Some((window, motion));
        self
    }

    pub fn pin(mut self, scrub: Duration) -> Self {
        self.pin = Some(scrub);
        self
    }

    pub fn counter(mut self, targets: Vec<u32>, config: CounterConfig) -> Self {
        self.counter = Some((targets, config));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Tracked {
    tracker: ScrollProgressTracker,
    motion: MotionConfig,
    sample: Sample,
}

#[derive(Debug, Clone, PartialEq)]
struct Pinned {
    scroller: PinnedScroller,
    scrub: Duration,
    target: PinFrame,
    /// Smoothed translation actually shown.
    shown_x: f64,
}

/// Everything one section animates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionState {
    id: SectionId,
    geometry: SectionGeometry,
    subscriptions: HashSet<Listener>,
    reveal: Option<VisibilityObserver>,
    revealed_at: Option<Duration>,
    tracked: Option<Tracked>,
    pinned: Option<Pinned>,
    counter: Option<CounterAnimator>,
}

impl SectionState {
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Sections without a reveal observer count as always revealed.
    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_none() || self.revealed_at.is_some()
    }

    pub fn revealed_at(&self) -> Option<Duration> {
        self.revealed_at
    }

    pub fn progress(&self) -> f64 {
        self.tracked.as_ref().map_or(0.0, |t| t.tracker.progress())
    }

    pub fn sample(&self) -> Option<&Sample> {
        self.tracked.as_ref().map(|t| &t.sample)
    }

    /// Unsmoothed pin state for the last scroll position.
    pub fn pin_frame(&self) -> Option<PinFrame> {
        self.pinned.as_ref().map(|p| p.target)
    }

    /// Translation to draw, after scrub smoothing.
    pub fn pin_translate(&self) -> f64 {
        self.pinned.as_ref().map_or(0.0, |p| p.shown_x)
    }

    pub fn pin_distance(&self) -> f64 {
        self.pinned.as_ref().map_or(0.0, |p| p.scroller.distance())
    }

    pub fn counts(&self) -> &[u32] {
        self.counter.as_ref().map(|c| c.values()).unwrap_or(&[])
    }

    fn on_scroll(&mut self, viewport: &Viewport, now: Duration) {
        if let Some(obs) = self.reveal.as_mut() {
            if obs.observe(self.geometry.span, viewport.visible()) {
                self.revealed_at = Some(now);
                tracing::debug!(section = %self.id, "revealed");
            }
        }
        if let Some(t) = self.tracked.as_mut() {
            let p = t.tracker.update(self.geometry.span, viewport);
            t.sample = t.motion.sample(p);
        }
        if let Some(p) = self.pinned.as_mut() {
            let next = p.scroller.frame(viewport.scroll_y);
            if next.phase != p.target.phase {
                tracing::debug!(section = %self.id, phase = ?next.phase, "pin phase");
            }
            p.target = next;
        }
    }

    fn on_resize(&mut self, geometry: SectionGeometry, viewport: &Viewport, now: Duration) {
        self.geometry = geometry;
        if let Some(p) = self.pinned.as_mut() {
            p.scroller
                .relayout(geometry.span.start, geometry.content_width, viewport.width);
            // Stale translations would overshoot the new distance.
            p.shown_x = p.shown_x.max(-p.scroller.distance());
        }
        self.on_scroll(viewport, now);
    }

    fn on_frame(&mut self, now: Duration, dt: Duration, driver: &dyn MotionDriver) {
        if let Some(c) = self.counter.as_mut() {
            c.advance(now);
        }
        if let Some(p) = self.pinned.as_mut() {
            p.shown_x = driver.follow(p.shown_x, p.target.translate_x, p.scrub, dt);
        }
    }

    fn release(&mut self) {
        self.subscriptions.clear();
        if let Some(obs) = self.reveal.as_mut() {
            obs.disconnect();
        }
        if let Some(t) = self.tracked.as_mut() {
            t.tracker.detach();
        }
        if let Some(p) = self.pinned.as_mut() {
            p.scroller.kill();
        }
        if let Some(c) = self.counter.as_mut() {
            c.dispose();
        }
    }
}

/// Owner of all section animation state.
pub struct Sequencer {
    sections: Vec<SectionState>,
    driver: Box<dyn MotionDriver>,
    viewport: Viewport,
    clock: Duration,
    /// Clock at the last frame dispatch.
    last_frame: Duration,
}

impl Sequencer {
    pub fn new(driver: Box<dyn MotionDriver>, viewport: Viewport) -> Self {
        Self {
            sections: Vec::new(),
            driver,
            viewport,
            clock: Duration::ZERO,
            last_frame: Duration::ZERO,
        }
    }

    /// Swap the animation engine (e.g. when motion is toggled).
    pub fn set_driver(&mut self, driver: Box<dyn MotionDriver>) {
        self.driver = driver;
    }

    pub fn driver(&self) -> &dyn MotionDriver {
        self.driver.as_ref()
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Mount (or remount) a section and evaluate it against the current
    /// viewport straight away.
    pub fn mount(&mut self, spec: SectionSpec, geometry: SectionGeometry, now: Duration) {
        self.advance_clock(now);
        let mut subscriptions = HashSet::from([Listener::Scroll, Listener::Resize]);

        let pinned = spec.pin.map(|scrub| Pinned {
            scroller: PinnedScroller::new(
                geometry.span.start,
                geometry.content_width,
                self.viewport.width,
            ),
            scrub,
            target: PinFrame {
                phase: PinPhase::Before,
                translate_x: 0.0,
                progress: 0.0,
            },
            shown_x: 0.0,
        });
        let counter = spec.counter.map(|(targets, config)| {
            let mut c = CounterAnimator::new(targets, config);
            c.start(self.clock);
            c
        });
        if pinned.is_some() || counter.is_some() {
            subscriptions.insert(Listener::Frame);
        }

        let mut state = SectionState {
            id: spec.id,
            geometry,
            subscriptions,
            reveal: spec.reveal.then(VisibilityObserver::new),
            revealed_at: None,
            tracked: spec.track.map(|(window, motion)| Tracked {
                tracker: ScrollProgressTracker::new(window),
                sample: motion.sample(0.0),
                motion,
            }),
            pinned,
            counter,
        };
        state.on_scroll(&self.viewport, self.clock);
        if let Some(p) = state.pinned.as_mut() {
            p.shown_x = p.target.translate_x;
        }
        tracing::debug!(section = %spec.id, "mounted");

        self.sections.retain(|s| s.id != spec.id);
        self.sections.push(state);
    }

    /// Release every subscription the section holds.
    pub fn unmount(&mut self, id: SectionId) {
        if let Some(s) = self.sections.iter_mut().find(|s| s.id == id) {
            if s.is_mounted() {
                s.release();
                tracing::debug!(section = %id, "unmounted");
            }
        }
    }

    pub fn teardown(&mut self) {
        let ids: Vec<SectionId> = self.sections.iter().map(|s| s.id).collect();
        for id in ids {
            self.unmount(id);
        }
        tracing::debug!("sequencer torn down");
    }

    /// Move the clock forward to `now` without dispatching a frame.  Events
    /// handled afterwards (a reveal on scroll, say) are stamped with `now`.
    pub fn advance_clock(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.viewport = self.viewport.scrolled_to(scroll_y);
        let (viewport, now) = (self.viewport, self.clock);
        for s in self.subscribed(Listener::Scroll) {
            s.on_scroll(&viewport, now);
        }
    }

    /// New viewport size and section layout.  Sections missing from
    /// `layout` keep their previous geometry.
    pub fn on_resize(&mut self, viewport: Viewport, layout: &[(SectionId, SectionGeometry)]) {
        self.viewport = viewport;
        let now = self.clock;
        for s in self.subscribed(Listener::Resize) {
            let geometry = layout
                .iter()
                .find(|(id, _)| *id == s.id)
                .map_or(s.geometry, |(_, g)| *g);
            s.on_resize(geometry, &viewport, now);
        }
    }

    /// Advance timers and smoothing to `now` (monotonic).
    pub fn on_frame(&mut self, now: Duration) {
        self.advance_clock(now);
        let now = self.clock;
        let dt = now.saturating_sub(self.last_frame);
        self.last_frame = now;
        let driver = self.driver.as_ref();
        for s in self
            .sections
            .iter_mut()
            .filter(|s| s.subscriptions.contains(&Listener::Frame))
        {
            s.on_frame(now, dt, driver);
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionState> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Evaluate an entrance for `id` at the current clock.
    pub fn entrance(&self, id: SectionId, entrance: &Entrance) -> f64 {
        entrance.value(self.since_reveal(id), self.driver.as_ref())
    }

    /// Evaluate a fade/slide entrance for `id` at the current clock.
    pub fn pose(&self, id: SectionId, enter: &FadeSlide) -> Pose {
        enter.pose(self.since_reveal(id), self.driver.as_ref())
    }

    fn since_reveal(&self, id: SectionId) -> Option<Duration> {
        self.section(id)
            .and_then(SectionState::revealed_at)
            .map(|at| self.clock.saturating_sub(at))
    }

    fn subscribed(&mut self, listener: Listener) -> impl Iterator<Item = &mut SectionState> + '_ {
        self.sections
            .iter_mut()
            .filter(move |s| s.subscriptions.contains(&listener))
    }
}
