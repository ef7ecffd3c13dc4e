//! Point cloud generators for density map tests and benchmarks.
//!
//! All random generators take an explicit seed so that test data is
//! reproducible across runs.

use kde_common::{Extent, PointSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A set containing one point.
pub fn single_point(x: f64, y: f64) -> PointSet {
    PointSet::new(vec![x], vec![y]).expect("single finite point")
}

/// `n` points uniformly distributed over `extent`.
///
/// # Example
///
/// ```
/// use kde_common::Extent;
/// use test_utils::random_points;
///
/// let extent = Extent::new(0.0, 0.0, 10.0, 10.0);
/// let points = random_points(100, &extent, 7);
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|(x, y)| extent.contains_point(x, y)));
/// ```
pub fn random_points(n: usize, extent: &Extent, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);

    for _ in 0..n {
        xs.push(rng.gen_range(extent.left..=extent.right));
        ys.push(rng.gen_range(extent.lower..=extent.upper));
    }

    PointSet::new(xs, ys).expect("generated points are finite")
}

/// `per_cluster` points scattered around each center within `spread`.
///
/// Points keep their generation order, cluster by cluster, which makes the
/// output convenient for building intervals (one interval per cluster).
pub fn clustered_points(centers: &[(f64, f64)], per_cluster: usize, spread: f64, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs = Vec::with_capacity(centers.len() * per_cluster);
    let mut ys = Vec::with_capacity(centers.len() * per_cluster);

    for &(cx, cy) in centers {
        for _ in 0..per_cluster {
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let radius = rng.gen_range(0.0..=spread);
            xs.push(cx + radius * angle.cos());
            ys.push(cy + radius * angle.sin());
        }
    }

    PointSet::new(xs, ys).expect("generated points are finite")
}
