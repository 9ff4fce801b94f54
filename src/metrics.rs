//! Residual error metrics for a candidate coefficient pair.
//!
//! Inputs and results are both checked, so a metric is never returned as
//! NaN or infinity.

use crate::coefficients::CoefficientPair;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use ndarray::Zip;

/// Root-mean-squared error of the predictions implied by `beta`.
///
/// Squared residuals are summed sequentially in sample order, divided by
/// the sample count and square-rooted. The grid sweep calls the same
/// kernel, so surface cells and point errors agree exactly.
pub fn rmse(dataset: &Dataset, beta: &CoefficientPair) -> Result<f64> {
    Ok(mean_squared_error(dataset, beta)?.sqrt())
}

pub fn mean_squared_error(dataset: &Dataset, beta: &CoefficientPair) -> Result<f64> {
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }
    check_coefficients(beta)?;

    let mse = sum_squared_residuals(dataset, beta.beta1, beta.beta2) / dataset.n_samples() as f64;
    if !mse.is_finite() {
        return Err(Error::NonFiniteResult(format!(
            "mean squared error overflowed at ({}, {})",
            beta.beta1, beta.beta2
        )));
    }
    Ok(mse)
}

pub(crate) fn check_coefficients(beta: &CoefficientPair) -> Result<()> {
    if !(beta.beta1.is_finite() && beta.beta2.is_finite()) {
        return Err(Error::InvalidParameter(format!(
            "coefficients must be finite, got ({}, {})",
            beta.beta1, beta.beta2
        )));
    }
    Ok(())
}

/// Callers must have rejected empty datasets already, and must check the
/// returned value for finiteness.
pub(crate) fn rmse_unchecked(dataset: &Dataset, beta1: f64, beta2: f64) -> f64 {
    (sum_squared_residuals(dataset, beta1, beta2) / dataset.n_samples() as f64).sqrt()
}

fn sum_squared_residuals(dataset: &Dataset, beta1: f64, beta2: f64) -> f64 {
    Zip::from(dataset.x1())
        .and(dataset.x2())
        .and(dataset.y())
        .fold(0.0, |acc, &x1, &x2, &y| {
            let residual = y - (beta1 * x1 + beta2 * x2);
            acc + residual * residual
        })
}
