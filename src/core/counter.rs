//! Looping count-up animation for headline statistics.
//!
//! `Idle → Counting(0..max_ticks) → Holding(dwell) → Idle → …` until
//! [`CounterAnimator::dispose`].  Time is injected: the owner calls
//! [`CounterAnimator::advance`] with a monotonic "now", and every deadline
//! that has passed fires in order.  The animator owns exactly one pending
//! deadline at a time.

use std::time::Duration;

/// Steps processed in one `advance` before the deadline resyncs to `now`.
const MAX_CATCH_UP: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    pub interval: Duration,
    pub max_ticks: u32,
    pub dwell: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(30),
            max_ticks: 100,
            dwell: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Counting { tick: u32 },
    Holding,
    Disposed,
}

/// Displayed value for `target` after `tick` of `max_ticks` steps.
///
/// All targets reach their value on the final tick together.
pub fn value_at(target: u32, tick: u32, max_ticks: u32) -> u32 {
    if max_ticks == 0 {
        return target;
    }
    let scaled = u64::from(tick) * u64::from(target) / u64::from(max_ticks);
    scaled.min(u64::from(target)) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimator {
    config: CounterConfig,
    targets: Vec<u32>,
    values: Vec<u32>,
    phase: CounterPhase,
    /// The single owned timer: when the next step fires.
    deadline: Option<Duration>,
    loops: u64,
}

impl CounterAnimator {
    pub fn new(targets: Vec<u32>, config: CounterConfig) -> Self {
        let values = vec![0; targets.len()];
        Self {
            config: CounterConfig {
                interval: config.interval.max(Duration::from_millis(1)),
                ..config
            },
            targets,
            values,
            phase: CounterPhase::Idle,
            deadline: None,
            loops: 0,
        }
    }

    /// Begin counting from `now`.  Only valid from `Idle`.
    pub fn start(&mut self, now: Duration) {
        if self.phase != CounterPhase::Idle {
            return;
        }
        self.phase = CounterPhase::Counting { tick: 0 };
        self.deadline = Some(now + self.config.interval);
    }

    /// Fire every deadline at or before `now`.  Returns `true` when the
    /// displayed values changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let before = self.values.clone();
        let mut steps = 0;
        while let Some(deadline) = self.deadline {
            if deadline > now {
                break;
            }
            if steps == MAX_CATCH_UP {
                self.deadline = Some(now);
                tracing::debug!("counter stalled; resyncing deadline");
                break;
            }
            self.fire(deadline);
            steps += 1;
        }
        self.values != before
    }

    fn fire(&mut self, at: Duration) {
        match self.phase {
            CounterPhase::Counting { tick } => {
                let tick = tick + 1;
                for (value, &target) in self.values.iter_mut().zip(&self.targets) {
                    *value = value_at(target, tick, self.config.max_ticks);
                }
                if tick >= self.config.max_ticks {
                    self.phase = CounterPhase::Holding;
                    self.deadline = Some(at + self.config.dwell);
                } else {
                    self.phase = CounterPhase::Counting { tick };
                    self.deadline = Some(at + self.config.interval);
                }
            }
            CounterPhase::Holding => {
                self.values.iter_mut().for_each(|v| *v = 0);
                self.phase = CounterPhase::Idle;
                self.deadline = None;
                self.loops += 1;
                tracing::debug!(loops = self.loops, "counter loop restart");
                self.start(at);
            }
            CounterPhase::Idle | CounterPhase::Disposed => {
                self.deadline = None;
            }
        }
    }

    /// Cancel the pending deadline and stop for good.
    pub fn dispose(&mut self) {
        self.phase = CounterPhase::Disposed;
        self.deadline = None;
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }
}
