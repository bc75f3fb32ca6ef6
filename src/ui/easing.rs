//! Terminal motion driver: easing curves plus exponential catch-up.
//!
//! `follow` decays the distance to the target by a fixed fraction per unit
//! of time, so a strip that lags behind the scroll position slides in with
//! visible deceleration.  Once the remaining distance is below a fraction
//! of a cell it snaps, so the animation settles instead of creeping.

use std::time::Duration;

use crate::core::motion::{Ease, MotionDriver};

/// Residual distance (in cells) below which `follow` snaps to the target.
const SNAP: f64 = 0.4;

/// How many time constants fit in one `lag`: after `lag` has elapsed only
/// `e^-4` (≈2%) of the original distance remains.
const CONSTANTS_PER_LAG: f64 = 4.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothDriver;

impl SmoothDriver {
    pub fn new() -> Self {
        Self
    }
}

impl MotionDriver for SmoothDriver {
    fn ease(&self, ease: Ease, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match ease {
            Ease::Linear => t,
            // Cubic ease-out: fast start, slow finish.
            Ease::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    fn follow(&self, current: f64, target: f64, lag: Duration, dt: Duration) -> f64 {
        if !current.is_finite() || lag.is_zero() {
            return target;
        }
        let decay = (-CONSTANTS_PER_LAG * dt.as_secs_f64() / lag.as_secs_f64()).exp();
        let next = target + (current - target) * decay;
        if (next - target).abs() < SNAP {
            target
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn curves_hit_endpoints() {
        let d = SmoothDriver::new();
        for ease in [Ease::Linear, Ease::EaseOut] {
            assert_eq!(d.ease(ease, 0.0), 0.0);
            assert_eq!(d.ease(ease, 1.0), 1.0);
        }
        assert!(d.ease(Ease::EaseOut, 0.5) > 0.5);
        assert_eq!(d.ease(Ease::Linear, 2.0), 1.0);
    }

    #[test]
    fn follow_decelerates_and_settles() {
        let d = SmoothDriver::new();
        let lag = ms(1000);
        let mut x = 0.0;
        let mut last_step = f64::INFINITY;
        for _ in 0..10 {
            let next = d.follow(x, -100.0, lag, ms(33));
            let step = (next - x).abs();
            assert!(step <= last_step);
            assert!(next < x && next >= -100.0);
            last_step = step;
            x = next;
        }
        for _ in 0..200 {
            x = d.follow(x, -100.0, lag, ms(33));
        }
        assert_eq!(x, -100.0);
    }

    #[test]
    fn zero_lag_snaps() {
        let d = SmoothDriver::new();
        assert_eq!(d.follow(0.0, 50.0, Duration::ZERO, ms(16)), 50.0);
    }
}
