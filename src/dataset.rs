//! Synthetic datasets for the two-predictor linear model.
//!
//! A [`Dataset`] holds finite, equal-length columns; [`DataGenerator`]
//! draws them from the ground-truth relationship with uniform noise.

use crate::coefficients::{CoefficientPair, GROUND_TRUTH};
use crate::error::{Error, Result};
use crate::Vector;
use ndarray::Zip;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

/// Predictors are drawn uniformly from `[-PREDICTOR_BOUND, PREDICTOR_BOUND]`.
pub const PREDICTOR_BOUND: f64 = 10.0;

/// Largest accepted noise width; wider intervals overflow the sampler.
pub const MAX_NOISE_SCALE: f64 = 1e100;

/// Two predictor columns and one response column of equal length.
///
/// A dataset is never patched in place. Regenerating produces a new value
/// that replaces the old one wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    x1: Vector,
    x2: Vector,
    y: Vector,
}

impl Dataset {
    pub fn new(x1: Vector, x2: Vector, y: Vector) -> Result<Self> {
        if x1.len() != x2.len() || x1.len() != y.len() {
            return Err(Error::LengthMismatch {
                x1: x1.len(),
                x2: x2.len(),
                y: y.len(),
            });
        }

        for (name, column) in [("x1", &x1), ("x2", &x2), ("y", &y)] {
            if let Some(bad) = column.iter().find(|v| !v.is_finite()) {
                return Err(Error::InvalidParameter(format!(
                    "column {} must contain only finite values, got {}",
                    name, bad
                )));
            }
        }

        Ok(Self { x1, x2, y })
    }

    pub fn n_samples(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn x1(&self) -> &Vector {
        &self.x1
    }

    pub fn x2(&self) -> &Vector {
        &self.x2
    }

    pub fn y(&self) -> &Vector {
        &self.y
    }

    /// Predictions `β1·x1 + β2·x2` for every sample.
    pub fn predict(&self, beta: &CoefficientPair) -> Result<Vector> {
        if self.is_empty() {
            return Err(Error::EmptyDataset);
        }
        crate::metrics::check_coefficients(beta)?;

        let predictions = Zip::from(&self.x1)
            .and(&self.x2)
            .map_collect(|&x1, &x2| beta.beta1 * x1 + beta.beta2 * x2);

        if predictions.iter().any(|p| !p.is_finite()) {
            return Err(Error::NonFiniteResult(format!(
                "prediction overflowed at ({}, {})",
                beta.beta1, beta.beta2
            )));
        }
        Ok(predictions)
    }
}

/// Synthetic data generator for the ground-truth relationship
/// `y = 3·x1 + 2·x2 + noise`.
///
/// `noise_scale` is the full width of the symmetric noise interval, so the
/// default of 10 draws noise from `[-5, 5]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DataGenerator {
    n_samples: usize,
    noise_scale: f64,
}

impl DataGenerator {
    pub fn new() -> Self {
        Self {
            n_samples: 100,
            noise_scale: 10.0,
        }
    }

    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Dataset> {
        if self.n_samples == 0 {
            return Err(Error::InvalidParameter(
                "n_samples must be > 0, got 0".to_string(),
            ));
        }

        if !(0.0..=MAX_NOISE_SCALE).contains(&self.noise_scale) {
            return Err(Error::InvalidParameter(format!(
                "noise_scale must lie in [0, {}], got {}",
                MAX_NOISE_SCALE, self.noise_scale
            )));
        }

        log::debug!(
            "generating dataset: n_samples={} noise_scale={}",
            self.n_samples,
            self.noise_scale
        );

        let x1 = Vector::random_using(
            self.n_samples,
            Uniform::new_inclusive(-PREDICTOR_BOUND, PREDICTOR_BOUND),
            rng,
        );
        let x2 = Vector::random_using(
            self.n_samples,
            Uniform::new_inclusive(-PREDICTOR_BOUND, PREDICTOR_BOUND),
            rng,
        );

        let half = self.noise_scale / 2.0;
        let noise = Vector::random_using(self.n_samples, Uniform::new_inclusive(-half, half), rng);

        let y = Zip::from(&x1)
            .and(&x2)
            .and(&noise)
            .map_collect(|&a, &b, &e| GROUND_TRUTH.beta1 * a + GROUND_TRUTH.beta2 * b + e);

        Dataset::new(x1, x2, y)
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws a fresh dataset of `n` samples with noise of total width `noise_scale`.
pub fn generate<R: Rng + ?Sized>(n: usize, noise_scale: f64, rng: &mut R) -> Result<Dataset> {
    DataGenerator::new()
        .n_samples(n)
        .noise_scale(noise_scale)
        .generate(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new(array![1.0, 0.0], array![0.0, 1.0], array![3.0, 2.0]).unwrap();
        assert_eq!(dataset.n_samples(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_dataset_length_mismatch() {
        let result = Dataset::new(array![1.0, 2.0], array![1.0], array![1.0, 2.0]);
        assert_eq!(
            result.unwrap_err(),
            Error::LengthMismatch { x1: 2, x2: 1, y: 2 }
        );
    }

    #[test]
    fn test_predict() {
        let dataset = Dataset::new(array![1.0, 2.0], array![3.0, -1.0], array![0.0, 0.0]).unwrap();
        let predictions = dataset.predict(&CoefficientPair::new(2.0, 0.5)).unwrap();
        assert_eq!(predictions, array![3.5, 3.5]);
    }

    #[test]
    fn test_dataset_rejects_non_finite_columns() {
        let result = Dataset::new(array![f64::NAN, 1.0], array![0.0, 1.0], array![3.0, 2.0]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));

        let result = Dataset::new(array![1.0, 0.0], array![0.0, f64::INFINITY], array![3.0, 2.0]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));

        let result = Dataset::new(array![1.0, 0.0], array![0.0, 1.0], array![3.0, f64::NEG_INFINITY]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_predict_rejects_non_finite() {
        let dataset = Dataset::new(array![1.0, 0.0], array![0.0, 1.0], array![3.0, 2.0]).unwrap();

        let result = dataset.predict(&CoefficientPair::new(f64::NAN, 1.0));
        assert!(matches!(result, Err(Error::InvalidParameter(_))));

        let big = Dataset::new(array![1e308, 0.0], array![1e308, 1.0], array![0.0, 0.0]).unwrap();
        let result = big.predict(&CoefficientPair::new(10.0, 10.0));
        assert!(matches!(result, Err(Error::NonFiniteResult(_))));
    }

    #[test]
    fn test_predict_empty() {
        let dataset = Dataset::new(Vector::zeros(0), Vector::zeros(0), Vector::zeros(0)).unwrap();
        assert_eq!(
            dataset.predict(&GROUND_TRUTH).unwrap_err(),
            Error::EmptyDataset
        );
    }

    #[test]
    fn test_generate_shapes_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = generate(250, 10.0, &mut rng).unwrap();

        assert_eq!(dataset.x1().len(), 250);
        assert_eq!(dataset.x2().len(), 250);
        assert_eq!(dataset.y().len(), 250);

        for (&a, &b) in dataset.x1().iter().zip(dataset.x2().iter()) {
            assert!((-10.0..=10.0).contains(&a));
            assert!((-10.0..=10.0).contains(&b));
        }

        // noise stays inside [-5, 5]
        let truth = dataset.predict(&GROUND_TRUTH).unwrap();
        for (&y, &t) in dataset.y().iter().zip(truth.iter()) {
            assert!((y - t).abs() <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn test_generate_without_noise_is_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        let dataset = DataGenerator::new().noise_scale(0.0).generate(&mut rng).unwrap();

        assert_eq!(dataset.n_samples(), 100);
        let truth = dataset.predict(&GROUND_TRUTH).unwrap();
        for (&y, &t) in dataset.y().iter().zip(truth.iter()) {
            assert!((y - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let a = generate(20, 10.0, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(20, 10.0, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            generate(0, 10.0, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            generate(10, -1.0, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            generate(10, f64::NAN, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            generate(10, f64::MAX, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
    }
}
