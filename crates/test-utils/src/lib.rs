//! Shared test utilities for the density-map workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Seeded point cloud generators
//! - Common extents and parameter fixtures
//! - Approximate float assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert that two grids have the same shape and bit-identical values.
#[macro_export]
macro_rules! assert_grids_identical {
    ($left:expr, $right:expr) => {{
        let left: &[f64] = &$left;
        let right: &[f64] = &$right;
        assert_eq!(left.len(), right.len(), "grid lengths differ");
        for (i, (a, b)) in left.iter().zip(right.iter()).enumerate() {
            if a.to_bits() != b.to_bits() {
                panic!("grids differ at cell {}: {:?} != {:?}", i, a, b);
            }
        }
    }};
}
