//! Explicit session state for an interactive exploration.
//!
//! A [`Session`] owns the current dataset, selected coefficients, camera
//! orientation and the last computed error surface. All mutation goes
//! through `&mut self`, so a regeneration and a parameter update can never
//! interleave.

use crate::coefficients::{CoefficientPair, SliderBounds, GROUND_TRUTH};
use crate::dataset::{DataGenerator, Dataset};
use crate::error::Result;
use crate::metrics::rmse;
use crate::projection::{project, FitPoint};
use crate::surface::{BetaRange, ErrorSurface, SurfaceEvaluator};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Orientation of the 3-D surface view, owned by the rendering layer.
///
/// The session stores it so it survives surface recomputation, but nothing
/// in the numeric core reads or modifies it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraOrientation {
    pub eye: Vec3,
    pub up: Vec3,
    pub center: Vec3,
}

impl Default for CameraOrientation {
    fn default() -> Self {
        Self {
            eye: Vec3::new(1.25, 1.25, 1.25),
            up: Vec3::new(0.0, 0.0, 1.0),
            center: Vec3::new(0.0, 0.0, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub generator: DataGenerator,
    pub beta1_range: BetaRange,
    pub beta2_range: BetaRange,
    pub slider: SliderBounds,
    pub initial: CoefficientPair,
    pub evaluator: SurfaceEvaluator,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            generator: DataGenerator::new(),
            beta1_range: BetaRange::default(),
            beta2_range: BetaRange::default(),
            slider: SliderBounds::default(),
            initial: GROUND_TRUTH,
            evaluator: SurfaceEvaluator::new(),
        }
    }

    pub fn generator(mut self, generator: DataGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn beta_ranges(mut self, beta1_range: BetaRange, beta2_range: BetaRange) -> Self {
        self.beta1_range = beta1_range;
        self.beta2_range = beta2_range;
        self
    }

    pub fn slider(mut self, slider: SliderBounds) -> Self {
        self.slider = slider;
        self
    }

    pub fn initial(mut self, initial: CoefficientPair) -> Self {
        self.initial = initial;
        self
    }

    pub fn evaluator(mut self, evaluator: SurfaceEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    dataset: Dataset,
    selected: CoefficientPair,
    camera: CameraOrientation,
    surface: ErrorSurface,
    point_error: f64,
}

impl Session {
    /// Generates the first dataset and its full error surface.
    pub fn start<R: Rng + ?Sized>(config: SessionConfig, rng: &mut R) -> Result<Self> {
        let selected = config.slider.snap_pair(config.initial.beta1, config.initial.beta2)?;
        let dataset = config.generator.generate(rng)?;
        let evaluation =
            config
                .evaluator
                .evaluate(&dataset, &config.beta1_range, &config.beta2_range, &selected)?;

        log::info!(
            "session started: {} samples, {}x{} surface, selected=({}, {})",
            dataset.n_samples(),
            evaluation.surface.shape().0,
            evaluation.surface.shape().1,
            selected.beta1,
            selected.beta2
        );

        Ok(Self {
            config,
            dataset,
            selected,
            camera: CameraOrientation::default(),
            surface: evaluation.surface,
            point_error: evaluation.point_error,
        })
    }

    /// Replaces the dataset and recomputes the whole surface.
    ///
    /// The new state is built aside and swapped in only once everything has
    /// succeeded, so on error the previous dataset and surface are kept.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let dataset = self.config.generator.generate(rng)?;
        let evaluation = self.config.evaluator.evaluate(
            &dataset,
            &self.config.beta1_range,
            &self.config.beta2_range,
            &self.selected,
        )?;

        log::info!("dataset regenerated: {} samples", dataset.n_samples());

        self.dataset = dataset;
        self.surface = evaluation.surface;
        self.point_error = evaluation.point_error;
        Ok(())
    }

    /// Forces a full sweep against the held dataset.
    pub fn recompute_surface(&mut self) -> Result<&ErrorSurface> {
        self.surface = self.config.evaluator.sweep(
            &self.dataset,
            &self.config.beta1_range,
            &self.config.beta2_range,
        )?;
        Ok(&self.surface)
    }

    /// Snaps both values to the slider grid and refreshes the point error.
    /// The surface is left untouched.
    pub fn set_selected(&mut self, beta1: f64, beta2: f64) -> Result<f64> {
        let selected = self.config.slider.snap_pair(beta1, beta2)?;
        let point_error = rmse(&self.dataset, &selected)?;

        log::trace!(
            "selected=({}, {}) point_error={}",
            selected.beta1,
            selected.beta2,
            point_error
        );

        self.selected = selected;
        self.point_error = point_error;
        Ok(point_error)
    }

    pub fn set_beta1(&mut self, beta1: f64) -> Result<f64> {
        self.set_selected(beta1, self.selected.beta2)
    }

    pub fn set_beta2(&mut self, beta2: f64) -> Result<f64> {
        self.set_selected(self.selected.beta1, beta2)
    }

    pub fn projection(&self) -> Result<Vec<FitPoint>> {
        project(&self.dataset, &self.selected)
    }

    pub fn set_camera(&mut self, camera: CameraOrientation) {
        self.camera = camera;
    }

    pub fn camera(&self) -> &CameraOrientation {
        &self.camera
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selected(&self) -> CoefficientPair {
        self.selected
    }

    pub fn surface(&self) -> &ErrorSurface {
        &self.surface
    }

    pub fn point_error(&self) -> f64 {
        self.point_error
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
