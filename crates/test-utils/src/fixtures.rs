//! Common extents and scenario fixtures for density map tests.

use kde_common::Extent;

/// 10 x 10 unit square anchored at the origin.
pub fn unit_extent() -> Extent {
    Extent::new(0.0, 0.0, 10.0, 10.0)
}

/// A city-sized geographic extent (degrees), roughly Chicago.
pub fn city_extent() -> Extent {
    Extent::new(-87.95, 41.64, -87.52, 42.02)
}

/// An extent whose size is not a multiple of common cell sizes.
pub fn ragged_extent() -> Extent {
    Extent::new(-3.0, 2.0, 4.5, 7.25)
}
