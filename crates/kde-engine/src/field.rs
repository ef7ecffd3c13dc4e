//! Density field computation and shared-scale rendering.

use crate::executor::RowExecutor;
use crate::params::DensityParams;
use kde_common::{GridSpec, KdeError, KdeResult, PointSet};
use kde_renderer::{create_rgba_buffer, ColorBuffer, ColorScale};

/// A computed density grid with its own value range.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityField {
    pub spec: GridSpec,
    /// Row-major cell values, row 0 at the top.
    pub values: Vec<f64>,
    /// Local minimum and maximum of `values`.
    pub scale: ColorScale,
}

impl DensityField {
    pub fn rows(&self) -> usize {
        self.spec.rows
    }

    pub fn cols(&self) -> usize {
        self.spec.cols
    }

    pub fn gradient_min(&self) -> f64 {
        self.scale.min
    }

    pub fn gradient_max(&self) -> f64 {
        self.scale.max
    }

    /// Value of cell `(row, col)`.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[self.spec.flat_index(row, col)]
    }

    /// Render against an explicit scale.
    pub fn render(&self, scale: ColorScale, params: &DensityParams) -> KdeResult<ColorBuffer> {
        create_rgba_buffer(
            &self.values,
            self.spec.rows,
            self.spec.cols,
            scale,
            params.gradient,
            params.opaque,
        )
    }
}

/// Compute the density of `points` over the grid described by `spec`.
///
/// Every cell sums the kernel weight of every point, in point order, so the
/// result does not depend on how rows are split across workers.
///
/// Fails with `ResourceExhausted` if the grid cannot be allocated.
pub fn compute_field(
    points: &PointSet,
    params: &DensityParams,
    spec: &GridSpec,
    executor: &RowExecutor,
) -> KdeResult<DensityField> {
    let mut values = Vec::new();
    values.try_reserve_exact(spec.len()).map_err(|e| {
        KdeError::ResourceExhausted(format!(
            "cannot allocate {} x {} density grid: {}",
            spec.rows, spec.cols, e
        ))
    })?;
    values.resize(spec.len(), 0.0);

    if !points.is_empty() {
        let kernel = params.kernel;
        let bandwidth = params.bandwidth;
        let xs = points.xs();
        let ys = points.ys();

        executor.fill_rows(&mut values, spec.cols, |row, cells| {
            let cy = spec.cell_center_y(row);
            for (col, cell) in cells.iter_mut().enumerate() {
                let cx = spec.cell_center_x(col);
                for (px, py) in xs.iter().zip(ys) {
                    let dx = cx - px;
                    let dy = cy - py;
                    let z = (dx * dx + dy * dy).sqrt() / bandwidth;
                    *cell += kernel.weight(z);
                }
            }
        });
    }

    let scale = ColorScale::from_values(&values);

    Ok(DensityField {
        spec: *spec,
        values,
        scale,
    })
}

/// Render every field against the union of their local scales.
///
/// Returns the shared scale and one buffer per field, in field order.
pub fn render_shared_scale(
    fields: &[DensityField],
    params: &DensityParams,
) -> KdeResult<(ColorScale, Vec<ColorBuffer>)> {
    let scale = ColorScale::union(fields.iter().map(|f| f.scale))
        .unwrap_or_else(|| ColorScale::new(0.0, 0.0));

    let buffers = fields
        .iter()
        .map(|f| f.render(scale, params))
        .collect::<KdeResult<Vec<_>>>()?;

    Ok((scale, buffers))
}
