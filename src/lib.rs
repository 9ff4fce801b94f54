//! Numeric engine for exploring how two linear-model coefficients affect
//! fit quality on a synthetic noisy dataset.
//!
//! The crate generates data from `y = 3·x1 + 2·x2 + noise`, scores candidate
//! coefficient pairs by RMSE, sweeps that score over a 2-D grid to build an
//! error surface, and projects predicted-vs-actual points. Plotting, sliders
//! and camera handling belong to the caller; [`Session`] just holds their
//! state between recomputations.
//!
//! # Examples
//! ```rust
//! use loss_landscape::{Session, SessionConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = Session::start(SessionConfig::default(), &mut rng).unwrap();
//!
//! // cheap path: only the point error is refreshed
//! let error = session.set_selected(2.5, 1.0).unwrap();
//! println!("RMSE at (2.5, 1.0): {:.3}", error);
//!
//! // expensive path: new data, full surface
//! session.regenerate(&mut rng).unwrap();
//! assert_eq!(session.surface().shape(), (41, 41));
//! ```

pub use ndarray::{Array1, Array2};

pub mod coefficients;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod projection;
pub mod session;
pub mod surface;

pub use coefficients::{CoefficientPair, SliderBounds, GROUND_TRUTH};
pub use dataset::{DataGenerator, Dataset};
pub use error::{Error, Result};
pub use projection::{FitPoint, ReferenceLine, REFERENCE_LINE};
pub use session::{CameraOrientation, Session, SessionConfig, Vec3};
pub use surface::{BetaRange, ErrorSurface, SurfaceEvaluation, SurfaceEvaluator};

pub use dataset::generate as regenerate_dataset;
pub use metrics::rmse as recompute_point_error;
pub use projection::project as project_fit;
pub use surface::evaluate as recompute_surface;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn external_interface_round() {
        let dataset = Dataset::new(array![1.0, 0.0], array![0.0, 1.0], array![3.0, 2.0]).unwrap();
        let axis = [-1.0, 0.0, 1.0];
        let selected = CoefficientPair::new(1.0, -1.0);

        let evaluation = recompute_surface(&dataset, &axis, &axis, &selected).unwrap();
        let point = recompute_point_error(&dataset, &selected).unwrap();
        let points = project_fit(&dataset, &selected).unwrap();

        assert_eq!(evaluation.point_error, point);
        assert_eq!(evaluation.surface.value(2, 0), Some(point));
        assert_eq!(points.len(), dataset.n_samples());
    }
}
