//! Rectangular extent in data coordinates.

use crate::{KdeError, KdeResult};
use serde::{Deserialize, Serialize};

/// Rectangular bound of a density grid: (left, lower, right, upper).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub left: f64,
    pub lower: f64,
    pub right: f64,
    pub upper: f64,
}

impl Extent {
    /// Create a new extent from its four edges.
    ///
    /// No validation happens here; call [`Extent::validate`] before use.
    pub fn new(left: f64, lower: f64, right: f64, upper: f64) -> Self {
        Self {
            left,
            lower,
            right,
            upper,
        }
    }

    /// Build an extent from a `[left, lower, right, upper]` slice.
    pub fn from_slice(values: &[f64]) -> KdeResult<Self> {
        match values {
            [left, lower, right, upper] => {
                let extent = Self::new(*left, *lower, *right, *upper);
                extent.validate()?;
                Ok(extent)
            }
            _ => Err(KdeError::InvalidExtent(format!(
                "expected 4 values (left, lower, right, upper), got {}",
                values.len()
            ))),
        }
    }

    /// Parse a "left,lower,right,upper" string.
    pub fn parse(s: &str) -> KdeResult<Self> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| KdeError::InvalidExtent(format!("invalid number: {}", part)))
            })
            .collect::<KdeResult<Vec<f64>>>()?;

        Self::from_slice(&values)
    }

    /// Check that all edges are finite and the extent has positive area.
    pub fn validate(&self) -> KdeResult<()> {
        let edges = [self.left, self.lower, self.right, self.upper];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(KdeError::InvalidExtent(format!(
                "edges must be finite: {:?}",
                edges
            )));
        }

        if self.right <= self.left {
            return Err(KdeError::InvalidExtent(format!(
                "right ({}) must be greater than left ({})",
                self.right, self.left
            )));
        }

        if self.upper <= self.lower {
            return Err(KdeError::InvalidExtent(format!(
                "upper ({}) must be greater than lower ({})",
                self.upper, self.lower
            )));
        }

        Ok(())
    }

    /// Width of the extent in coordinate units.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the extent in coordinate units.
    pub fn height(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a point is contained within this extent.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.lower && y <= self.upper
    }
}

impl std::str::FromStr for Extent {
    type Err = KdeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
