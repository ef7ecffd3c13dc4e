//! Value-to-color quantization of density grids into planar RGBA buffers.
//!
//! A value `v` is normalized against an explicit scale as
//! `t = clamp((v - min) / (max - min), 0, 1)`. The gradient index is
//! `round(255 * t)` and the alpha is `round(opaque * 255 * t)`, so cells at the
//! bottom of the scale are fully transparent. A degenerate scale
//! (`min == max`) maps every cell to index 0 with `t = 0`.

use crate::gradient::{Color, GradientType, GRADIENT_SIZE};
use crate::png::create_png;
use kde_common::{KdeError, KdeResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Minimum cells to benefit from parallel quantization
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

/// Value range mapped onto the gradient table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scan values for their minimum and maximum.
    ///
    /// An empty slice yields a `0..0` scale.
    pub fn from_values(values: &[f64]) -> Self {
        let mut iter = values.iter().copied();
        let Some(first) = iter.next() else {
            return Self::new(0.0, 0.0);
        };

        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self::new(min, max)
    }

    /// Smallest scale covering every given scale, or `None` for no input.
    pub fn union<I>(scales: I) -> Option<Self>
    where
        I: IntoIterator<Item = ColorScale>,
    {
        scales.into_iter().reduce(|acc, s| Self {
            min: acc.min.min(s.min),
            max: acc.max.max(s.max),
        })
    }

    /// Whether every value maps to the same color.
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }

    /// Normalize a value to `[0, 1]` against this scale.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Gradient table index for a value.
    #[inline]
    pub fn index(&self, value: f64) -> u8 {
        quantize(self.normalize(value))
    }
}

#[inline]
fn quantize(t: f64) -> u8 {
    let max_index = (GRADIENT_SIZE - 1) as f64;
    (max_index * t).round().clamp(0.0, max_index) as u8
}

/// Planar RGBA output: four parallel channels, one byte per cell, row-major
/// with row 0 at the top of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorBuffer {
    pub rows: usize,
    pub cols: usize,
    pub r: Vec<u8>,
    pub g: Vec<u8>,
    pub b: Vec<u8>,
    pub a: Vec<u8>,
}

impl ColorBuffer {
    fn from_colors(colors: &[Color], rows: usize, cols: usize) -> Self {
        let mut buffer = Self {
            rows,
            cols,
            r: Vec::with_capacity(colors.len()),
            g: Vec::with_capacity(colors.len()),
            b: Vec::with_capacity(colors.len()),
            a: Vec::with_capacity(colors.len()),
        };

        for color in colors {
            buffer.r.push(color.r);
            buffer.g.push(color.g);
            buffer.b.push(color.b);
            buffer.a.push(color.a);
        }

        buffer
    }

    /// Number of cells per channel.
    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// Color of cell `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> Color {
        let i = row * self.cols + col;
        Color::new(self.r[i], self.g[i], self.b[i], self.a[i])
    }

    /// Interleave the four channels into RGBA8 pixels.
    pub fn to_rgba_pixels(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.len() * 4);
        for i in 0..self.len() {
            pixels.extend_from_slice(&[self.r[i], self.g[i], self.b[i], self.a[i]]);
        }
        pixels
    }

    /// Encode the buffer as an RGBA PNG image.
    pub fn to_png(&self) -> KdeResult<Vec<u8>> {
        create_png(&self.to_rgba_pixels(), self.cols, self.rows)
    }
}

/// Render grid values into a color buffer using an explicit scale.
///
/// # Arguments
/// - `values`: grid values (row-major, `rows * cols` long)
/// - `rows`, `cols`: grid dimensions
/// - `scale`: value range mapped onto the gradient, possibly shared with other grids
/// - `gradient`: color ramp to sample
/// - `opaque`: global alpha multiplier in `[0, 1]`
///
/// Fails with `InvalidInput` if `values` is not `rows * cols` long.
pub fn create_rgba_buffer(
    values: &[f64],
    rows: usize,
    cols: usize,
    scale: ColorScale,
    gradient: GradientType,
    opaque: f64,
) -> KdeResult<ColorBuffer> {
    if rows.checked_mul(cols) != Some(values.len()) {
        return Err(KdeError::InvalidInput(format!(
            "expected {} x {} grid values, got {}",
            rows,
            cols,
            values.len()
        )));
    }

    let table = gradient.table();
    let alpha_scale = opaque.clamp(0.0, 1.0) * 255.0;

    let shade = |v: &f64| {
        let t = scale.normalize(*v);
        let alpha = (alpha_scale * t).round().clamp(0.0, 255.0) as u8;
        table.color(quantize(t), alpha)
    };

    let colors: Vec<Color> = if values.len() >= PARALLEL_THRESHOLD {
        values.par_iter().map(shade).collect()
    } else {
        values.iter().map(shade).collect()
    };

    Ok(ColorBuffer::from_colors(&colors, rows, cols))
}
