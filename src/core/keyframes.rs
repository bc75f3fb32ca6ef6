//! Piecewise-linear interpolation over breakpoint tables.
//!
//! A [`Breakpoints`] table maps a progress value to an output.  A
//! [`MotionConfig`] bundles several tables, one per visual [`Channel`], so a
//! single progress value can drive position and opacity independently.
//! Tables are validated once at construction; sampling never fails.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KeyframeError {
    #[error("a breakpoint table needs at least one point")]
    Empty,
    #[error("{inputs} inputs but {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("input {index} is not greater than the one before it")]
    Unordered { index: usize },
    #[error("breakpoint {index} is not a finite number")]
    NonFinite { index: usize },
}

/// Ordered `(input, output)` pairs with strictly increasing inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    points: Vec<(f64, f64)>,
}

impl Breakpoints {
    /// Build from parallel input/output slices.
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, KeyframeError> {
        if inputs.len() != outputs.len() {
            return Err(KeyframeError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        Self::from_pairs(inputs.iter().copied().zip(outputs.iter().copied()))
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, KeyframeError> {
        let points: Vec<(f64, f64)> = pairs.into_iter().collect();
        if points.is_empty() {
            return Err(KeyframeError::Empty);
        }
        for (index, &(input, output)) in points.iter().enumerate() {
            if !input.is_finite() || !output.is_finite() {
                return Err(KeyframeError::NonFinite { index });
            }
            if index > 0 && input <= points[index - 1].0 {
                return Err(KeyframeError::Unordered { index });
            }
        }
        Ok(Self { points })
    }

    /// A two-point linear ramp over `[0, 1]`.
    pub fn ramp(from: f64, to: f64) -> Result<Self, KeyframeError> {
        Self::new(&[0.0, 1.0], &[from, to])
    }

    /// Interpolated output at `progress`, clamped to the first/last output
    /// outside the input range.  NaN maps to the first output.
    pub fn sample(&self, progress: f64) -> f64 {
        let (first_in, first_out) = self.points[0];
        let (last_in, last_out) = self.points[self.points.len() - 1];
        if progress.is_nan() || progress <= first_in {
            return first_out;
        }
        if progress >= last_in {
            return last_out;
        }
        // First point strictly greater than `progress`; guaranteed in 1..len.
        let hi = self.points.partition_point(|&(input, _)| input <= progress);
        let (x0, y0) = self.points[hi - 1];
        let (x1, y1) = self.points[hi];
        let t = (progress - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}

/// A visual property a presentation layer can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    TranslateX,
    Opacity,
}

/// One breakpoint table per channel, all driven by the same progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionConfig {
    channels: Vec<(Channel, Breakpoints)>,
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the table for `channel`.
    pub fn with(mut self, channel: Channel, table: Breakpoints) -> Self {
        self.channels.retain(|(c, _)| *c != channel);
        self.channels.push((channel, table));
        self
    }

    pub fn sample(&self, progress: f64) -> Sample {
        Sample {
            values: self
                .channels
                .iter()
                .map(|(c, t)| (*c, t.sample(progress)))
                .collect(),
        }
    }
}

/// Output of [`MotionConfig::sample`]: the numbers a renderer binds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    values: Vec<(Channel, f64)>,
}

impl Sample {
    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.values
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, v)| *v)
    }

    pub fn get_or(&self, channel: Channel, default: f64) -> f64 {
        self.get(channel).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fade_in_out() -> Breakpoints {
        Breakpoints::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap()
    }

    #[test]
    fn interpolates_between_neighbours() {
        let t = fade_in_out();
        assert_eq!(t.sample(0.0), 0.0);
        assert!((t.sample(0.1) - 0.5).abs() < 1e-12);
        assert_eq!(t.sample(0.5), 1.0);
        assert!((t.sample(0.9) - 0.5).abs() < 1e-12);
        assert_eq!(t.sample(1.0), 0.0);
    }

    #[test]
    fn clamps_outside_the_table() {
        let t = Breakpoints::new(&[0.25, 0.75], &[10.0, 20.0]).unwrap();
        assert_eq!(t.sample(-3.0), 10.0);
        assert_eq!(t.sample(0.0), 10.0);
        assert_eq!(t.sample(0.9), 20.0);
        assert_eq!(t.sample(42.0), 20.0);
        assert_eq!(t.sample(f64::NAN), 10.0);
    }

    #[test]
    fn single_point_table_is_constant() {
        let t = Breakpoints::new(&[0.5], &[7.0]).unwrap();
        assert_eq!(t.sample(0.0), 7.0);
        assert_eq!(t.sample(1.0), 7.0);
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(Breakpoints::new(&[], &[]), Err(KeyframeError::Empty));
        assert_eq!(
            Breakpoints::new(&[0.0, 1.0], &[1.0]),
            Err(KeyframeError::LengthMismatch { inputs: 2, outputs: 1 })
        );
        assert_eq!(
            Breakpoints::new(&[0.0, 0.5, 0.5], &[0.0, 1.0, 2.0]),
            Err(KeyframeError::Unordered { index: 2 })
        );
        assert_eq!(
            Breakpoints::new(&[0.0, f64::NAN], &[0.0, 1.0]),
            Err(KeyframeError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn channels_are_independent() {
        let config = MotionConfig::new()
            .with(Channel::TranslateX, Breakpoints::ramp(0.0, -800.0).unwrap())
            .with(Channel::Opacity, fade_in_out());

        let s = config.sample(0.5);
        assert_eq!(s.get(Channel::TranslateX), Some(-400.0));
        assert_eq!(s.get(Channel::Opacity), Some(1.0));

        let slide_only = MotionConfig::new().with(Channel::TranslateX, fade_in_out());
        let s = slide_only.sample(0.5);
        assert_eq!(s.get(Channel::Opacity), None);
        assert_eq!(s.get_or(Channel::Opacity, 3.0), 3.0);
    }

    #[test]
    fn with_replaces_existing_channel() {
        let config = MotionConfig::new()
            .with(Channel::Opacity, Breakpoints::ramp(0.0, 1.0).unwrap())
            .with(Channel::Opacity, Breakpoints::ramp(1.0, 0.0).unwrap());
        assert_eq!(config.sample(0.0).get(Channel::Opacity), Some(1.0));
    }

    proptest! {
        #[test]
        fn output_stays_within_breakpoint_outputs(
            mut inputs in prop::collection::vec(-10.0f64..10.0, 1..8),
            outputs_seed in prop::collection::vec(-1000.0f64..1000.0, 8),
            p in -20.0f64..20.0,
        ) {
            inputs.sort_by(|a, b| a.total_cmp(b));
            inputs.dedup();
            let outputs = &outputs_seed[..inputs.len()];
            let table = Breakpoints::new(&inputs, outputs).unwrap();
            let lo = outputs.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = outputs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let v = table.sample(p);
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "{v} outside [{lo}, {hi}]");
        }
    }
}
