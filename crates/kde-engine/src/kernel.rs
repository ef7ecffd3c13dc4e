//! Kernel functions of normalized distance `z = distance / bandwidth`.
//!
//! | kernel     | formula                 | support  |
//! |------------|-------------------------|----------|
//! | triangular | `1 - abs(z)`            | `z <= 1` |
//! | uniform    | `abs(z)`                | `z <= 1` |
//! | quadratic  | `15/16 * (1 - z^2)^2`   | `z <= 1` |
//! | gaussian   | `sqrt(2π) * exp(-z²/2)` | all `z`  |
//!
//! The gaussian multiplies by `sqrt(2π)` instead of dividing; downstream color
//! scales depend on these magnitudes, so the formula is kept as is.

use kde_common::{KdeError, KdeResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Closed set of density kernels.
///
/// Numeric ids follow declaration order, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KernelType {
    Triangular,
    Uniform,
    #[default]
    Quadratic,
    Gaussian,
}

impl KernelType {
    /// Every kernel, in id order.
    pub const ALL: [KernelType; 4] = [
        KernelType::Triangular,
        KernelType::Uniform,
        KernelType::Quadratic,
        KernelType::Gaussian,
    ];

    /// Resolve a numeric kernel id.
    pub fn from_id(id: i32) -> KdeResult<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| KdeError::unknown_enum("kernel", id))
    }

    pub fn id(&self) -> i32 {
        *self as i32
    }

    pub fn name(&self) -> &'static str {
        match self {
            KernelType::Triangular => "triangular",
            KernelType::Uniform => "uniform",
            KernelType::Quadratic => "quadratic",
            KernelType::Gaussian => "gaussian",
        }
    }

    /// Whether the kernel is zero outside `|z| <= 1`.
    pub fn is_compact(&self) -> bool {
        !matches!(self, KernelType::Gaussian)
    }

    /// Raw kernel formula, not clamped to the kernel's support.
    #[inline]
    pub fn evaluate(&self, z: f64) -> f64 {
        match self {
            KernelType::Triangular => 1.0 - z.abs(),
            KernelType::Uniform => z.abs(),
            KernelType::Quadratic => {
                let u = 1.0 - z * z;
                (15.0 / 16.0) * u * u
            }
            KernelType::Gaussian => (2.0 * PI).sqrt() * (-0.5 * z * z).exp(),
        }
    }

    /// Contribution of a point at normalized distance `z`.
    ///
    /// Compact kernels contribute exactly zero beyond `|z| > 1`.
    #[inline]
    pub fn weight(&self, z: f64) -> f64 {
        if self.is_compact() && z.abs() > 1.0 {
            0.0
        } else {
            self.evaluate(z)
        }
    }
}

impl std::str::FromStr for KernelType {
    type Err = KdeError;

    /// Parse a kernel name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == lower)
            .ok_or_else(|| KdeError::unknown_enum("kernel", s))
    }
}

impl std::fmt::Display for KernelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_formulas_at_center() {
        assert_eq!(KernelType::Triangular.evaluate(0.0), 1.0);
        assert_eq!(KernelType::Uniform.evaluate(0.0), 0.0);
        assert_eq!(KernelType::Quadratic.evaluate(0.0), 0.9375);
        assert_approx_eq!(KernelType::Gaussian.evaluate(0.0), 2.5066282746310002, 1e-12);
    }

    #[test]
    fn test_formulas_are_symmetric() {
        for kernel in KernelType::ALL {
            assert_eq!(kernel.evaluate(0.3), kernel.evaluate(-0.3), "{}", kernel);
        }
    }

    #[test]
    fn test_raw_formulas_are_unclamped() {
        assert_approx_eq!(KernelType::Triangular.evaluate(1.5), -0.5, 1e-12);
        assert_approx_eq!(KernelType::Quadratic.evaluate(2.0), 15.0 / 16.0 * 9.0, 1e-12);
    }

    #[test]
    fn test_weight_clamps_compact_support() {
        for kernel in [KernelType::Triangular, KernelType::Uniform, KernelType::Quadratic] {
            assert_eq!(kernel.weight(1.0001), 0.0);
            assert_eq!(kernel.weight(5.0), 0.0);
            assert_eq!(kernel.weight(0.5), kernel.evaluate(0.5));
        }
        assert!(KernelType::Gaussian.weight(5.0) > 0.0);
    }

    #[test]
    fn test_ids_and_names() {
        assert_eq!(KernelType::from_id(0).unwrap(), KernelType::Triangular);
        assert_eq!(KernelType::from_id(3).unwrap(), KernelType::Gaussian);
        assert!(KernelType::from_id(4).is_err());
        assert!(KernelType::from_id(-1).is_err());
        assert_eq!("Gaussian".parse::<KernelType>().unwrap(), KernelType::Gaussian);
        assert!("epanechnikov".parse::<KernelType>().is_err());
    }
}
