//! Grid geometry derived from an extent and a cell size.
//!
//! # Origin contract
//!
//! Row 0 is the top row, adjacent to `grid_upper`; column 0 is the left-most
//! column. Cell `(row, col)` has its center at
//! `(grid_left + (col + 0.5) * cellsize, grid_upper - (row + 0.5) * cellsize)`.
//! Flat buffers are row-major in this order, which is image scanline order.
//!
//! The grid frame starts at the extent's left/lower corner and may overhang the
//! right and upper edges by less than one cell when the extent is not an exact
//! multiple of the cell size.

use crate::{Extent, KdeError, KdeResult};
use serde::{Deserialize, Serialize};

/// Geometry of a regular density grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Edge length of a square cell in data units
    pub cellsize: f64,
    pub grid_left: f64,
    pub grid_lower: f64,
    pub grid_right: f64,
    pub grid_upper: f64,
}

/// Largest cell count whose `f64` grid stays within allocation limits.
pub const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

impl GridSpec {
    /// Derive grid dimensions from an extent and cell size.
    ///
    /// `cols = ceil(width / cellsize)` and `rows = ceil(height / cellsize)`,
    /// both at least 1.
    pub fn new(extent: &Extent, cellsize: f64) -> KdeResult<Self> {
        extent.validate()?;

        if !cellsize.is_finite() || cellsize <= 0.0 {
            return Err(KdeError::invalid_parameter(
                "cellsize",
                format!("must be a finite value > 0, got {}", cellsize),
            ));
        }

        let cols_f = (extent.width() / cellsize).ceil().max(1.0);
        let rows_f = (extent.height() / cellsize).ceil().max(1.0);
        let too_large = || {
            KdeError::invalid_parameter(
                "cellsize",
                format!(
                    "grid of {} x {} cells is too large for cellsize {}",
                    cols_f, rows_f, cellsize
                ),
            )
        };

        if !cols_f.is_finite() || !rows_f.is_finite() || cols_f * rows_f > MAX_CELLS as f64 {
            return Err(too_large());
        }

        let cols = cols_f as usize;
        let rows = rows_f as usize;
        if cols.checked_mul(rows).map_or(true, |cells| cells > MAX_CELLS) {
            return Err(too_large());
        }

        Ok(Self {
            cols,
            rows,
            cellsize,
            grid_left: extent.left,
            grid_lower: extent.lower,
            grid_right: extent.left + cols as f64 * cellsize,
            grid_upper: extent.lower + rows as f64 * cellsize,
        })
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// A validated grid always has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// X coordinate of the center of column `col`.
    #[inline]
    pub fn cell_center_x(&self, col: usize) -> f64 {
        self.grid_left + (col as f64 + 0.5) * self.cellsize
    }

    /// Y coordinate of the center of row `row` (row 0 is the top).
    #[inline]
    pub fn cell_center_y(&self, row: usize) -> f64 {
        self.grid_upper - (row as f64 + 0.5) * self.cellsize
    }

    /// Center of cell `(row, col)`.
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        (self.cell_center_x(col), self.cell_center_y(row))
    }

    /// Row-major index of cell `(row, col)`.
    #[inline]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Find the cell containing a coordinate, if it lies on the grid.
    ///
    /// Cells are closed on their left and upper edges.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col_f = ((x - self.grid_left) / self.cellsize).floor();
        let row_f = ((self.grid_upper - y) / self.cellsize).floor();

        if col_f < 0.0 || row_f < 0.0 || col_f >= self.cols as f64 || row_f >= self.rows as f64 {
            return None;
        }

        Some((row_f as usize, col_f as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_dimensions() {
        let spec = GridSpec::new(&Extent::new(0.0, 0.0, 10.0, 10.0), 1.0).unwrap();
        assert_eq!(spec.cols, 10);
        assert_eq!(spec.rows, 10);
        assert_eq!(spec.len(), 100);
        assert_eq!(spec.grid_right, 10.0);
        assert_eq!(spec.grid_upper, 10.0);
    }

    #[test]
    fn test_dimensions_round_up() {
        let spec = GridSpec::new(&Extent::new(0.0, 0.0, 10.5, 3.2), 2.0).unwrap();
        assert_eq!(spec.cols, 6);
        assert_eq!(spec.rows, 2);
        assert_eq!(spec.grid_right, 12.0);
        assert_eq!(spec.grid_upper, 4.0);
    }

    #[test]
    fn test_top_left_origin() {
        let spec = GridSpec::new(&Extent::new(0.0, 0.0, 4.0, 4.0), 1.0).unwrap();
        assert_eq!(spec.cell_center(0, 0), (0.5, 3.5));
        assert_eq!(spec.cell_center(3, 3), (3.5, 0.5));
        assert_eq!(spec.cell_at(0.1, 3.9), Some((0, 0)));
        assert_eq!(spec.cell_at(3.9, 0.1), Some((3, 3)));
        assert_eq!(spec.cell_at(-0.1, 2.0), None);
    }

    #[test]
    fn test_invalid_cellsize() {
        let extent = Extent::new(0.0, 0.0, 1.0, 1.0);
        assert!(GridSpec::new(&extent, 0.0).is_err());
        assert!(GridSpec::new(&extent, -1.0).is_err());
        assert!(GridSpec::new(&extent, f64::NAN).is_err());
    }

    #[test]
    fn test_unaddressable_grid_rejected() {
        // 1e10 x 1e10 cells of f64 exceed isize::MAX bytes
        let extent = Extent::new(0.0, 0.0, 1e6, 1e6);
        let result = GridSpec::new(&extent, 1e-4);
        assert!(matches!(result, Err(KdeError::InvalidParameter { .. })));

        // 1e9 x 1e9 cells stay addressable and are left to the allocator
        assert!(GridSpec::new(&extent, 1e-3).is_ok());
    }
}
