//! Parameters shared by every density computation.

use crate::kernel::KernelType;
use kde_common::{Extent, GridSpec, KdeError, KdeResult};
use kde_renderer::GradientType;
use serde::{Deserialize, Serialize};

/// Geometry, kernel and color parameters of a density map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityParams {
    pub extent: Extent,
    /// Kernel spread in data units.
    pub bandwidth: f64,
    /// Grid resolution in data units.
    pub cellsize: f64,
    pub kernel: KernelType,
    pub gradient: GradientType,
    /// Global alpha multiplier in `[0, 1]`.
    pub opaque: f64,
}

impl DensityParams {
    pub fn new(
        extent: Extent,
        bandwidth: f64,
        cellsize: f64,
        kernel: KernelType,
        gradient: GradientType,
        opaque: f64,
    ) -> Self {
        Self {
            extent,
            bandwidth,
            cellsize,
            kernel,
            gradient,
            opaque,
        }
    }

    /// Build parameters from untyped values: a `[left, lower, right, upper]`
    /// extent and numeric kernel/gradient ids.
    pub fn from_raw(
        extent: &[f64],
        bandwidth: f64,
        cellsize: f64,
        kernel_id: i32,
        gradient_id: i32,
        opaque: f64,
    ) -> KdeResult<Self> {
        let params = Self::new(
            Extent::from_slice(extent)?,
            bandwidth,
            cellsize,
            KernelType::from_id(kernel_id)?,
            GradientType::from_id(gradient_id)?,
            opaque,
        );
        params.validate()?;
        Ok(params)
    }

    /// Validate the parameters and derive the grid geometry.
    pub fn grid_spec(&self) -> KdeResult<GridSpec> {
        self.validate()?;
        GridSpec::new(&self.extent, self.cellsize)
    }

    /// Validate the parameters.
    pub fn validate(&self) -> KdeResult<()> {
        self.extent.validate()?;

        if !self.bandwidth.is_finite() || self.bandwidth <= 0.0 {
            return Err(KdeError::invalid_parameter(
                "bandwidth",
                format!("must be a finite value > 0, got {}", self.bandwidth),
            ));
        }

        if !self.cellsize.is_finite() || self.cellsize <= 0.0 {
            return Err(KdeError::invalid_parameter(
                "cellsize",
                format!("must be a finite value > 0, got {}", self.cellsize),
            ));
        }

        if !(0.0..=1.0).contains(&self.opaque) {
            return Err(KdeError::invalid_parameter(
                "opaque",
                format!("must be within [0, 1], got {}", self.opaque),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DensityParams {
        DensityParams::new(
            Extent::new(0.0, 0.0, 10.0, 10.0),
            2.0,
            1.0,
            KernelType::Quadratic,
            GradientType::Classic,
            1.0,
        )
    }

    #[test]
    fn test_valid_params() {
        assert!(params().validate().is_ok());
        let spec = params().grid_spec().unwrap();
        assert_eq!((spec.rows, spec.cols), (10, 10));
    }

    #[test]
    fn test_invalid_bandwidth() {
        for bandwidth in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let p = DensityParams { bandwidth, ..params() };
            assert!(
                matches!(p.validate(), Err(KdeError::InvalidParameter { ref param, .. }) if param == "bandwidth"),
                "bandwidth {} accepted",
                bandwidth
            );
        }
    }

    #[test]
    fn test_invalid_opaque() {
        assert!(DensityParams { opaque: 1.5, ..params() }.validate().is_err());
        assert!(DensityParams { opaque: -0.1, ..params() }.validate().is_err());
        assert!(DensityParams { opaque: f64::NAN, ..params() }.validate().is_err());
        assert!(DensityParams { opaque: 0.0, ..params() }.validate().is_ok());
    }

    #[test]
    fn test_from_raw() {
        let p = DensityParams::from_raw(&[0.0, 0.0, 10.0, 10.0], 2.0, 1.0, 2, 0, 1.0).unwrap();
        assert_eq!(p, params());

        assert!(matches!(
            DensityParams::from_raw(&[0.0, 0.0, 10.0, 10.0], 2.0, 1.0, 9, 0, 1.0),
            Err(KdeError::UnknownEnum { kind: "kernel", .. })
        ));
        assert!(matches!(
            DensityParams::from_raw(&[0.0, 0.0, 10.0, 10.0], 2.0, 1.0, 0, 6, 1.0),
            Err(KdeError::UnknownEnum { kind: "gradient", .. })
        ));
        assert!(matches!(
            DensityParams::from_raw(&[10.0, 0.0, 0.0, 10.0], 2.0, 1.0, 0, 0, 1.0),
            Err(KdeError::InvalidExtent(_))
        ));
    }
}
