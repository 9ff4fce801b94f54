//! Error-surface evaluation over a 2-D coefficient grid.
//!
//! This module provides:
//! - `BetaRange`: an ascending sequence of β samples for one grid axis
//! - `SurfaceEvaluator`: the brute-force RMSE sweep over every grid cell
//! - `ErrorSurface`: the resulting matrix, indexed `[β1 sample, β2 sample]`
//!
//! The sweep is deliberately exhaustive. It maps the whole landscape rather
//! than searching for its minimum.
//!
//! # Examples
//! ```rust
//! use loss_landscape::{BetaRange, CoefficientPair, Dataset, SurfaceEvaluator};
//! use ndarray::array;
//!
//! let dataset = Dataset::new(array![1.0, 0.0], array![0.0, 1.0], array![3.0, 2.0]).unwrap();
//! let axis = BetaRange::try_from(vec![-1.0, 0.0, 1.0]).unwrap();
//!
//! let evaluation = SurfaceEvaluator::new()
//!     .evaluate(&dataset, &axis, &axis, &CoefficientPair::new(0.0, 0.0))
//!     .unwrap();
//!
//! assert_eq!(evaluation.surface.shape(), (3, 3));
//! println!("error at (0, 0): {:.4}", evaluation.point_error);
//! ```

mod evaluator;
mod grid;

pub use evaluator::{evaluate, SurfaceEvaluation, SurfaceEvaluator};
pub use grid::BetaRange;

use crate::coefficients::CoefficientPair;
use crate::Matrix;

/// Tolerance used when matching a coefficient pair to a grid sample.
pub const GRID_TOLERANCE: f64 = 1e-9;

/// RMSE values over the Cartesian product of two β axes.
///
/// Built wholesale from one dataset; never patched cell by cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorSurface {
    beta1: BetaRange,
    beta2: BetaRange,
    values: Matrix,
}

impl ErrorSurface {
    pub(crate) fn new(beta1: BetaRange, beta2: BetaRange, values: Matrix) -> Self {
        debug_assert_eq!(values.dim(), (beta1.len(), beta2.len()));
        Self {
            beta1,
            beta2,
            values,
        }
    }

    pub fn beta1(&self) -> &BetaRange {
        &self.beta1
    }

    pub fn beta2(&self) -> &BetaRange {
        &self.beta2
    }

    pub fn values(&self) -> &Matrix {
        &self.values
    }

    /// `(len(β1 samples), len(β2 samples))`
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get((i, j)).copied()
    }

    /// Grid cell whose samples coincide with `pair`, if the pair lies on the grid.
    pub fn cell_of(&self, pair: &CoefficientPair) -> Option<(usize, usize)> {
        let i = self.beta1.position(pair.beta1, GRID_TOLERANCE)?;
        let j = self.beta2.position(pair.beta2, GRID_TOLERANCE)?;
        Some((i, j))
    }

    /// Lowest-error cell as `(i, j, value)`. Ties resolve to the first cell in
    /// row-major order.
    pub fn min_cell(&self) -> (usize, usize, f64) {
        let mut best = (0, 0, f64::INFINITY);
        for ((i, j), &value) in self.values.indexed_iter() {
            if value < best.2 {
                best = (i, j, value);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn small_surface() -> ErrorSurface {
        ErrorSurface::new(
            BetaRange::try_from(vec![0.0, 1.0]).unwrap(),
            BetaRange::try_from(vec![-1.0, 0.0, 1.0]).unwrap(),
            array![[4.0, 3.0, 2.0], [1.0, 0.5, 0.5]],
        )
    }

    #[test]
    fn test_accessors() {
        let surface = small_surface();
        assert_eq!(surface.shape(), (2, 3));
        assert_eq!(surface.value(1, 2), Some(0.5));
        assert_eq!(surface.value(2, 0), None);
    }

    #[test]
    fn test_cell_of() {
        let surface = small_surface();
        assert_eq!(surface.cell_of(&CoefficientPair::new(1.0, -1.0)), Some((1, 0)));
        assert_eq!(surface.cell_of(&CoefficientPair::new(0.5, 0.0)), None);
    }

    #[test]
    fn test_min_cell_prefers_first() {
        let surface = small_surface();
        assert_eq!(surface.min_cell(), (1, 1, 0.5));
    }
}
