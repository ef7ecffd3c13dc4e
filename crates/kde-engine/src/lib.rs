//! Kernel density estimation over regular grids.
//!
//! The engine turns a point set into a dense grid of kernel-weighted sums and
//! then into planar RGBA color buffers.
//!
//! # Architecture
//!
//! ```text
//! PointSet + DensityParams
//!      │
//!      ▼
//! compute_field()            one row band per worker, exclusive &mut slices
//!      │
//!      ├─► DensityField      grid values + local min/max
//!      │
//!      ▼
//! render_shared_scale()      union of local scales, one buffer per field
//!      │
//!      ▼
//! ColorBuffer (R, G, B, A)
//! ```
//!
//! [`DensityEstimator`] renders one field at its own scale.
//! [`MultiIntervalEstimator`] computes one field per interval, optionally in
//! parallel, and renders all of them against the global scale.
//!
//! # Example
//!
//! ```
//! use kde_common::{Extent, PointSet};
//! use kde_engine::{DensityEstimator, DensityParams, KernelType};
//! use kde_renderer::GradientType;
//!
//! let points = PointSet::new(vec![5.0], vec![5.0])?;
//! let params = DensityParams::new(
//!     Extent::new(0.0, 0.0, 10.0, 10.0),
//!     2.0,
//!     1.0,
//!     KernelType::Quadratic,
//!     GradientType::Classic,
//!     1.0,
//! );
//!
//! let map = DensityEstimator::new(points, params)?.run()?;
//! assert_eq!((map.rows(), map.cols()), (10, 10));
//! assert_eq!(map.buffer.a.len(), 100);
//! # Ok::<(), kde_common::KdeError>(())
//! ```

pub mod config;
pub mod estimator;
pub mod executor;
pub mod field;
pub mod kernel;
pub mod multi;
pub mod params;

pub use config::EngineConfig;
pub use estimator::{DensityEstimator, DensityMap};
pub use executor::RowExecutor;
pub use field::{compute_field, render_shared_scale, DensityField};
pub use kernel::KernelType;
pub use multi::{MultiDensityMap, MultiIntervalEstimator};
pub use params::DensityParams;

pub use kde_common::{Extent, GridSpec, KdeError, KdeResult, PointSet};
pub use kde_renderer::{ColorBuffer, ColorScale, GradientType};
