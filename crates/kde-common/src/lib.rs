//! Common types shared across the density-map crates.

pub mod error;
pub mod extent;
pub mod grid;
pub mod point;

pub use error::{KdeError, KdeResult};
pub use extent::Extent;
pub use grid::GridSpec;
pub use point::PointSet;
