//! One axis of the β grid.

use crate::error::{Error, Result};
use crate::Vector;

/// Upper bound on the number of samples `linspace` will build for one axis.
pub const MAX_AXIS_SAMPLES: usize = 100_000;

/// An ordered, strictly ascending sequence of β samples along one grid axis.
#[derive(Clone, Debug, PartialEq)]
pub struct BetaRange {
    samples: Vector,
}

impl BetaRange {
    /// Accepts any non-empty, finite, strictly ascending sequence.
    pub fn new(samples: Vector) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InvalidRange("range must contain at least one sample".to_string()));
        }

        if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidRange(format!(
                "range samples must be finite, got {}",
                bad
            )));
        }

        if let Some(i) = (1..samples.len()).find(|&i| samples[i] <= samples[i - 1]) {
            return Err(Error::InvalidRange(format!(
                "range samples must be strictly ascending, sample {} ({}) follows {}",
                i,
                samples[i],
                samples[i - 1]
            )));
        }

        Ok(Self { samples })
    }

    /// Evenly spaced samples `start + i·step` that stay within `[start, stop]`.
    ///
    /// A tiny tolerance on the interval count absorbs floating-point drift
    /// (so `stop` itself is kept when it lies on the step grid), and every
    /// sample is clamped to `stop`.
    pub fn linspace(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(Error::InvalidRange(
                "linspace bounds and step must be finite".to_string(),
            ));
        }
        if step <= 0.0 {
            return Err(Error::InvalidRange(format!(
                "step must be positive, got {}",
                step
            )));
        }
        if start > stop {
            return Err(Error::InvalidRange(format!(
                "start ({}) must not exceed stop ({})",
                start, stop
            )));
        }

        let intervals = ((stop - start) / step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_AXIS_SAMPLES as f64 {
            return Err(Error::InvalidRange(format!(
                "linspace({}, {}, {}) would exceed {} samples",
                start, stop, step, MAX_AXIS_SAMPLES
            )));
        }

        let count = (intervals as usize).checked_add(1).ok_or_else(|| {
            Error::InvalidRange("linspace sample count overflowed".to_string())
        })?;
        let samples = Vector::from_shape_fn(count, |i| (start + i as f64 * step).min(stop));
        Self::new(samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &Vector {
        &self.samples
    }

    pub fn first(&self) -> f64 {
        self.samples[0]
    }

    pub fn last(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Index of the sample within `tolerance` of `value`, if any.
    pub fn position(&self, value: f64, tolerance: f64) -> Option<usize> {
        self.samples.iter().position(|&s| (s - value).abs() <= tolerance)
    }
}

impl TryFrom<Vec<f64>> for BetaRange {
    type Error = Error;

    fn try_from(samples: Vec<f64>) -> Result<Self> {
        Self::new(Vector::from(samples))
    }
}

impl TryFrom<&[f64]> for BetaRange {
    type Error = Error;

    fn try_from(samples: &[f64]) -> Result<Self> {
        Self::new(Vector::from(samples.to_vec()))
    }
}

/// 41 samples spanning `[-10, 10]` at a step of 0.5.
impl Default for BetaRange {
    fn default() -> Self {
        Self {
            samples: Vector::from_shape_fn(41, |i| -10.0 + i as f64 * 0.5),
        }
    }
}
