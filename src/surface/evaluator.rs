use super::{BetaRange, ErrorSurface};
use crate::coefficients::CoefficientPair;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::metrics::{rmse, rmse_unchecked};
use crate::Matrix;
use ndarray::Zip;

/// Full error surface plus the error at the currently selected pair.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceEvaluation {
    pub surface: ErrorSurface,
    pub point_error: f64,
}

/// Brute-force sweep of the RMSE over every `(β1, β2)` grid combination.
///
/// Each cell is an independent read-only evaluation over the dataset, so the
/// parallel sweep needs no cross-cell synchronisation. The matrix is only
/// handed out once every cell has been filled.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceEvaluator {
    parallel: bool,
}

impl SurfaceEvaluator {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn evaluate(
        &self,
        dataset: &Dataset,
        beta1_range: &BetaRange,
        beta2_range: &BetaRange,
        selected: &CoefficientPair,
    ) -> Result<SurfaceEvaluation> {
        let surface = self.sweep(dataset, beta1_range, beta2_range)?;
        let point_error = rmse(dataset, selected)?;

        Ok(SurfaceEvaluation {
            surface,
            point_error,
        })
    }

    /// Fills the `len(β1) × len(β2)` matrix of RMSE values.
    ///
    /// `BetaRange` is never empty, so only the dataset is checked here.
    pub fn sweep(
        &self,
        dataset: &Dataset,
        beta1_range: &BetaRange,
        beta2_range: &BetaRange,
    ) -> Result<ErrorSurface> {
        if dataset.is_empty() {
            return Err(Error::EmptyDataset);
        }

        log::debug!(
            "sweeping error surface: {}x{} cells over {} samples (parallel={})",
            beta1_range.len(),
            beta2_range.len(),
            dataset.n_samples(),
            self.parallel
        );

        let beta1 = beta1_range.samples();
        let beta2 = beta2_range.samples();
        let mut values = Matrix::zeros((beta1.len(), beta2.len()));

        let cell = |(i, j): (usize, usize), value: &mut f64| {
            *value = rmse_unchecked(dataset, beta1[i], beta2[j]);
        };

        if self.parallel {
            Zip::indexed(&mut values).par_for_each(cell);
        } else {
            Zip::indexed(&mut values).for_each(cell);
        }

        if let Some(((i, j), _)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::NonFiniteResult(format!(
                "surface overflowed at ({}, {})",
                beta1[i], beta2[j]
            )));
        }

        Ok(ErrorSurface::new(beta1_range.clone(), beta2_range.clone(), values))
    }
}

impl Default for SurfaceEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates the surface over raw β sample sequences with the default
/// evaluator. Each sequence must be non-empty, finite and strictly ascending.
pub fn evaluate(
    dataset: &Dataset,
    beta1_samples: &[f64],
    beta2_samples: &[f64],
    selected: &CoefficientPair,
) -> Result<SurfaceEvaluation> {
    let beta1_range = BetaRange::try_from(beta1_samples)?;
    let beta2_range = BetaRange::try_from(beta2_samples)?;
    SurfaceEvaluator::new().evaluate(dataset, &beta1_range, &beta2_range, selected)
}
