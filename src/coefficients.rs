use crate::error::{Error, Result};

/// The true generating coefficients of the synthetic data.
pub const GROUND_TRUTH: CoefficientPair = CoefficientPair { beta1: 3.0, beta2: 2.0 };

/// A candidate pair of linear-model weights `(β1, β2)`.
///
/// Any real values are accepted when the pair is used as a plain metric
/// input. Values coming from the UI go through [`SliderBounds::snap`] first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoefficientPair {
    pub beta1: f64,
    pub beta2: f64,
}

impl CoefficientPair {
    pub fn new(beta1: f64, beta2: f64) -> Self {
        Self { beta1, beta2 }
    }
}

impl From<(f64, f64)> for CoefficientPair {
    fn from((beta1, beta2): (f64, f64)) -> Self {
        Self { beta1, beta2 }
    }
}

impl Default for CoefficientPair {
    fn default() -> Self {
        GROUND_TRUTH
    }
}

/// Range and granularity of a coefficient slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(Error::InvalidParameter(
                "slider bounds must be finite".to_string(),
            ));
        }
        if min >= max {
            return Err(Error::InvalidParameter(format!(
                "slider min ({}) must be below max ({})",
                min, max
            )));
        }
        if step <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "slider step must be positive, got {}",
                step
            )));
        }
        Ok(Self { min, max, step })
    }

    /// Clamps `value` into `[min, max]` and rounds it to the nearest step
    /// counted from `min`.
    pub fn snap(&self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "slider value must be finite, got {}",
                value
            )));
        }

        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        Ok(snapped.clamp(self.min, self.max))
    }

    pub fn snap_pair(&self, beta1: f64, beta2: f64) -> Result<CoefficientPair> {
        Ok(CoefficientPair::new(self.snap(beta1)?, self.snap(beta2)?))
    }
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
            step: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_is_ground_truth() {
        let pair = CoefficientPair::default();
        assert_eq!(pair, CoefficientPair::new(3.0, 2.0));
    }

    #[test]
    fn test_snap_clamps_to_bounds() {
        let bounds = SliderBounds::default();
        assert_eq!(bounds.snap(42.0).unwrap(), 10.0);
        assert_eq!(bounds.snap(-17.5).unwrap(), -10.0);
    }

    #[test]
    fn test_snap_rounds_to_step() {
        let bounds = SliderBounds::default();

        let snapped = bounds.snap(2.34).unwrap();
        assert!((snapped - 2.3).abs() < 1e-12);

        let snapped = bounds.snap(-0.06).unwrap();
        assert!((snapped + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_snap_rejects_nan() {
        let bounds = SliderBounds::default();
        assert!(matches!(bounds.snap(f64::NAN), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(SliderBounds::new(1.0, -1.0, 0.1).is_err());
        assert!(SliderBounds::new(-1.0, 1.0, 0.0).is_err());
        assert!(SliderBounds::new(f64::NEG_INFINITY, 1.0, 0.1).is_err());
    }

    #[test]
    fn test_snap_pair() {
        let bounds = SliderBounds::default();
        let pair = bounds.snap_pair(3.04, 11.0).unwrap();
        assert!((pair.beta1 - 3.0).abs() < 1e-12);
        assert_eq!(pair.beta2, 10.0);
    }
}
