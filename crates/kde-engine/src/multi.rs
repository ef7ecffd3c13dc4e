//! Multi-interval density estimator with a globally shared color scale.
//!
//! Each interval selects a subset of a shared point pool by id. Fields are
//! computed independently (first pass), their local ranges are merged into one
//! scale, and every field is rendered against it (second pass), so equal
//! densities get equal colors across intervals.

use crate::config::EngineConfig;
use crate::executor::{map_bounded, RowExecutor};
use crate::field::{compute_field, render_shared_scale, DensityField};
use crate::params::DensityParams;
use kde_common::{GridSpec, KdeError, KdeResult, PointSet};
use kde_renderer::{ColorBuffer, ColorScale};
use std::time::Instant;
use tracing::{debug, info};

/// Computes one density map per interval over a shared geometry.
#[derive(Debug)]
pub struct MultiIntervalEstimator {
    intervals: Vec<PointSet>,
    params: DensityParams,
    spec: GridSpec,
    config: EngineConfig,
}

impl MultiIntervalEstimator {
    /// Create an estimator with the default engine configuration.
    pub fn new(pool: &PointSet, intervals: &[Vec<i64>], params: DensityParams) -> KdeResult<Self> {
        Self::with_config(pool, intervals, params, EngineConfig::default())
    }

    /// Create an estimator with an explicit engine configuration.
    ///
    /// Every interval id must name a point of `pool`.
    pub fn with_config(
        pool: &PointSet,
        intervals: &[Vec<i64>],
        params: DensityParams,
        config: EngineConfig,
    ) -> KdeResult<Self> {
        config.validate()?;
        let spec = params.grid_spec()?;

        if intervals.is_empty() {
            return Err(KdeError::InvalidInput(
                "at least one interval is required".to_string(),
            ));
        }

        let intervals = intervals
            .iter()
            .enumerate()
            .map(|(i, ids)| {
                pool.select(ids).map_err(|e| match e {
                    KdeError::InvalidInput(msg) => KdeError::InvalidInput(format!("interval {}: {}", i, msg)),
                    other => other,
                })
            })
            .collect::<KdeResult<Vec<_>>>()?;

        debug!(
            rows = spec.rows,
            cols = spec.cols,
            pool = pool.len(),
            intervals = intervals.len(),
            kernel = %params.kernel,
            gradient = %params.gradient,
            "Multi-interval estimator ready"
        );

        Ok(Self {
            intervals,
            params,
            spec,
            config,
        })
    }

    pub fn grid_spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Compute every interval and render all of them on the global scale.
    pub fn run(self) -> KdeResult<MultiDensityMap> {
        let start = Instant::now();
        let workers = self.config.interval_workers(self.intervals.len());
        let executor = RowExecutor::from_config(&self.config)?;

        let fields = map_bounded(
            &self.intervals,
            workers,
            self.config.sequential_fallback,
            |i, points| {
                let field = compute_field(points, &self.params, &self.spec, &executor)?;
                debug!(
                    interval = i,
                    points = points.len(),
                    local_min = field.gradient_min(),
                    local_max = field.gradient_max(),
                    "Interval computed"
                );
                Ok(field)
            },
        )?;

        let (scale, buffers) = render_shared_scale(&fields, &self.params)?;

        info!(
            rows = self.spec.rows,
            cols = self.spec.cols,
            intervals = fields.len(),
            interval_workers = workers,
            gradient_min = scale.min,
            gradient_max = scale.max,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Multi-interval density maps computed"
        );

        Ok(MultiDensityMap {
            spec: self.spec,
            fields,
            buffers,
            scale,
        })
    }
}

/// Output of a multi-interval computation: one field and buffer per interval.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiDensityMap {
    pub spec: GridSpec,
    pub fields: Vec<DensityField>,
    /// Buffers rendered against the shared scale, in interval order.
    pub buffers: Vec<ColorBuffer>,
    scale: ColorScale,
}

impl MultiDensityMap {
    pub fn rows(&self) -> usize {
        self.spec.rows
    }

    pub fn cols(&self) -> usize {
        self.spec.cols
    }

    /// Global minimum across all intervals.
    pub fn gradient_min(&self) -> f64 {
        self.scale.min
    }

    /// Global maximum across all intervals.
    pub fn gradient_max(&self) -> f64 {
        self.scale.max
    }

    pub fn scale(&self) -> ColorScale {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
