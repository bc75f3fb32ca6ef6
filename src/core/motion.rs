//! The animation-engine seam and time-based entrance transitions.
//!
//! Easing curves and scrub smoothing are not implemented here: the core
//! describes *what* should move ([`Transition`], [`Entrance`]) and calls
//! through a [`MotionDriver`] supplied by the presentation layer.
//! [`Immediate`] is the no-animation driver: every transition lands on its
//! end value at once, so content still renders when motion is off.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    EaseOut,
}

/// Injected animation capability.
pub trait MotionDriver {
    /// Map linear time `t` in `[0, 1]` through `ease`.
    fn ease(&self, ease: Ease, t: f64) -> f64;

    /// Move `current` toward `target`, catching up over roughly `lag`, given
    /// `dt` elapsed since the previous call.
    fn follow(&self, current: f64, target: f64, lag: Duration, dt: Duration) -> f64;
}

/// Driver that skips every animation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl MotionDriver for Immediate {
    fn ease(&self, _ease: Ease, _t: f64) -> f64 {
        1.0
    }

    fn follow(&self, _current: f64, target: f64, _lag: Duration, _dt: Duration) -> f64 {
        target
    }
}

/// Timing of one transition, relative to the moment its section revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub delay: Duration,
    pub duration: Duration,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration_ms: u64) -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(duration_ms),
            ease: Ease::Linear,
        }
    }

    pub const fn delayed(self, delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            ..self
        }
    }

    pub const fn eased(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Same transition, pushed back by `step_ms × index` (list staggering).
    pub fn staggered(self, index: usize, step_ms: u64) -> Self {
        Self {
            delay: self.delay + Duration::from_millis(step_ms.saturating_mul(index as u64)),
            ..self
        }
    }

    /// Linear progress in `[0, 1]` at `elapsed` since reveal.
    pub fn linear_progress(&self, elapsed: Duration) -> f64 {
        if elapsed < self.delay {
            return 0.0;
        }
        let run = elapsed - self.delay;
        if self.duration.is_zero() {
            return 1.0;
        }
        (run.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// A value animated from `from` to `to` once its section reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from: f64,
    pub to: f64,
    pub transition: Transition,
}

impl Entrance {
    pub const fn new(from: f64, to: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
        }
    }

    pub fn staggered(self, index: usize, step_ms: u64) -> Self {
        Self {
            transition: self.transition.staggered(index, step_ms),
            ..self
        }
    }

    /// Retarget the end value, keeping the timing.
    pub fn ending_at(self, to: f64) -> Self {
        Self { to, ..self }
    }

    /// Value at `since_reveal`; `None` means the section has not revealed.
    pub fn value(&self, since_reveal: Option<Duration>, driver: &dyn MotionDriver) -> f64 {
        let Some(elapsed) = since_reveal else {
            return self.from;
        };
        let t = self.transition.linear_progress(elapsed);
        let eased = driver.ease(self.transition.ease, t);
        self.from + (self.to - self.from) * eased
    }
}

/// Where a fading, sliding element currently sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Fade in from transparent while sliding home from `(dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSlide {
    pub dx: f64,
    pub dy: f64,
    pub transition: Transition,
}

impl FadeSlide {
    pub const fn new(dx: f64, dy: f64, transition: Transition) -> Self {
        Self { dx, dy, transition }
    }

    pub fn staggered(self, index: usize, step_ms: u64) -> Self {
        Self {
            transition: self.transition.staggered(index, step_ms),
            ..self
        }
    }

    pub fn pose(&self, since_reveal: Option<Duration>, driver: &dyn MotionDriver) -> Pose {
        let channel = |from: f64, to: f64| {
            Entrance::new(from, to, self.transition).value(since_reveal, driver)
        };
        Pose {
            opacity: channel(0.0, 1.0),
            dx: channel(self.dx, 0.0),
            dy: channel(self.dy, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear test driver.
    struct Linear;

    impl MotionDriver for Linear {
        fn ease(&self, _ease: Ease, t: f64) -> f64 {
            t
        }

        fn follow(&self, _current: f64, target: f64, _lag: Duration, _dt: Duration) -> f64 {
            target
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn delay_then_linear_run() {
        let t = Transition::new(800).delayed(200);
        assert_eq!(t.linear_progress(ms(0)), 0.0);
        assert_eq!(t.linear_progress(ms(200)), 0.0);
        assert_eq!(t.linear_progress(ms(600)), 0.5);
        assert_eq!(t.linear_progress(ms(1000)), 1.0);
        assert_eq!(t.linear_progress(ms(5000)), 1.0);
    }

    #[test]
    fn zero_duration_jumps_after_delay() {
        let t = Transition::new(0).delayed(100);
        assert_eq!(t.linear_progress(ms(99)), 0.0);
        assert_eq!(t.linear_progress(ms(100)), 1.0);
    }

    #[test]
    fn stagger_adds_to_existing_delay() {
        let t = Transition::new(600).delayed(200).staggered(3, 100);
        assert_eq!(t.delay, ms(500));
    }

    #[test]
    fn unrevealed_entrance_holds_start_value() {
        let e = Entrance::new(0.0, 1.0, Transition::new(800));
        assert_eq!(e.value(None, &Linear), 0.0);
        assert_eq!(e.value(Some(ms(400)), &Linear), 0.5);
        assert_eq!(e.ending_at(90.0).value(Some(ms(800)), &Linear), 90.0);
    }

    #[test]
    fn fade_slide_moves_all_channels_together() {
        let enter = FadeSlide::new(-6.0, 3.0, Transition::new(800)).staggered(2, 100);
        let hidden = enter.pose(None, &Linear);
        assert_eq!(hidden, Pose { opacity: 0.0, dx: -6.0, dy: 3.0 });

        let half = enter.pose(Some(ms(600)), &Linear);
        assert_eq!(half, Pose { opacity: 0.5, dx: -3.0, dy: 1.5 });

        assert_eq!(
            enter.pose(Some(ms(5000)), &Linear),
            Pose {
                opacity: 1.0,
                dx: 0.0,
                dy: 0.0,
            }
        );
    }

    #[test]
    fn immediate_driver_skips_to_end() {
        let e = Entrance::new(3.0, 0.0, Transition::new(800).delayed(1000));
        assert_eq!(e.value(Some(Duration::ZERO), &Immediate), 0.0);
        assert_eq!(e.value(None, &Immediate), 3.0);
        assert_eq!(Immediate.follow(0.0, -40.0, ms(1000), ms(16)), -40.0);
    }
}
