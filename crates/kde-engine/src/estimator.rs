//! Single-interval density estimator.

use crate::config::EngineConfig;
use crate::executor::RowExecutor;
use crate::field::{compute_field, render_shared_scale, DensityField};
use crate::params::DensityParams;
use kde_common::{GridSpec, KdeResult, PointSet};
use kde_renderer::{ColorBuffer, ColorScale};
use std::time::Instant;
use tracing::{debug, info};

/// Computes one density map from a point set.
///
/// Construction validates everything; [`DensityEstimator::run`] consumes the
/// estimator, so each instance computes exactly once.
#[derive(Debug)]
pub struct DensityEstimator {
    points: PointSet,
    params: DensityParams,
    spec: GridSpec,
    config: EngineConfig,
}

impl DensityEstimator {
    /// Create an estimator with the default engine configuration.
    pub fn new(points: PointSet, params: DensityParams) -> KdeResult<Self> {
        Self::with_config(points, params, EngineConfig::default())
    }

    /// Create an estimator with an explicit engine configuration.
    pub fn with_config(points: PointSet, params: DensityParams, config: EngineConfig) -> KdeResult<Self> {
        config.validate()?;
        let spec = params.grid_spec()?;

        debug!(
            rows = spec.rows,
            cols = spec.cols,
            points = points.len(),
            kernel = %params.kernel,
            gradient = %params.gradient,
            threads = config.threads,
            "Density estimator ready"
        );

        Ok(Self {
            points,
            params,
            spec,
            config,
        })
    }

    /// Build an estimator from untyped inputs.
    ///
    /// `extent` is `[left, lower, right, upper]`; kernel and gradient are
    /// numeric ids.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        xs: Vec<f64>,
        ys: Vec<f64>,
        extent: &[f64],
        bandwidth: f64,
        cellsize: f64,
        kernel_id: i32,
        gradient_id: i32,
        opaque: f64,
    ) -> KdeResult<Self> {
        let points = PointSet::new(xs, ys)?;
        let params = DensityParams::from_raw(extent, bandwidth, cellsize, kernel_id, gradient_id, opaque)?;
        Self::new(points, params)
    }

    pub fn grid_spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn params(&self) -> &DensityParams {
        &self.params
    }

    /// Compute the grid, its statistics and a buffer at its own scale.
    pub fn run(self) -> KdeResult<DensityMap> {
        let start = Instant::now();
        let executor = RowExecutor::from_config(&self.config)?;

        let field = compute_field(&self.points, &self.params, &self.spec, &executor)?;
        let (scale, mut buffers) = render_shared_scale(std::slice::from_ref(&field), &self.params)?;
        let buffer = buffers.pop().unwrap_or_default();

        info!(
            rows = self.spec.rows,
            cols = self.spec.cols,
            points = self.points.len(),
            gradient_min = scale.min,
            gradient_max = scale.max,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Density map computed"
        );

        Ok(DensityMap {
            field,
            buffer,
            params: self.params,
        })
    }
}

/// Output of a single-interval density computation.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMap {
    pub field: DensityField,
    /// Buffer rendered against the field's own min/max.
    pub buffer: ColorBuffer,
    params: DensityParams,
}

impl DensityMap {
    pub fn rows(&self) -> usize {
        self.field.rows()
    }

    pub fn cols(&self) -> usize {
        self.field.cols()
    }

    pub fn gradient_min(&self) -> f64 {
        self.field.gradient_min()
    }

    pub fn gradient_max(&self) -> f64 {
        self.field.gradient_max()
    }

    /// Re-render the grid against an explicit scale.
    pub fn create_rgba_buffer(&self, gradient_min: f64, gradient_max: f64) -> KdeResult<ColorBuffer> {
        self.field
            .render(ColorScale::new(gradient_min, gradient_max), &self.params)
    }
}
