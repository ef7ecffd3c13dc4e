//! Tests for the single-interval density estimator.

use kde_engine::{
    DensityEstimator, DensityParams, EngineConfig, Extent, GradientType, KdeError, KernelType, PointSet,
};
use test_utils::{
    assert_grids_identical, city_extent, random_points, ragged_extent, single_point, unit_extent,
};

fn params(kernel: KernelType, bandwidth: f64) -> DensityParams {
    DensityParams::new(unit_extent(), bandwidth, 1.0, kernel, GradientType::Classic, 1.0)
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

// ============================================================================
// Construction tests
// ============================================================================

#[test]
fn test_construction_rejects_bad_geometry() {
    let bad_extent = DensityParams {
        extent: Extent::new(5.0, 0.0, 5.0, 10.0),
        ..params(KernelType::Gaussian, 1.0)
    };
    assert!(matches!(
        DensityEstimator::new(PointSet::empty(), bad_extent),
        Err(KdeError::InvalidExtent(_))
    ));

    let bad_cellsize = DensityParams {
        cellsize: 0.0,
        ..params(KernelType::Gaussian, 1.0)
    };
    assert!(matches!(
        DensityEstimator::new(PointSet::empty(), bad_cellsize),
        Err(KdeError::InvalidParameter { .. })
    ));

    let bad_bandwidth = params(KernelType::Gaussian, -2.0);
    assert!(matches!(
        DensityEstimator::new(PointSet::empty(), bad_bandwidth),
        Err(KdeError::InvalidParameter { .. })
    ));
}

#[test]
fn test_from_raw_validates_everything() {
    let ok = DensityEstimator::from_raw(
        vec![1.0, 2.0],
        vec![1.0, 2.0],
        &[0.0, 0.0, 10.0, 10.0],
        2.0,
        1.0,
        3,
        5,
        0.5,
    );
    assert!(ok.is_ok());

    let mismatched = DensityEstimator::from_raw(
        vec![1.0, 2.0],
        vec![1.0],
        &[0.0, 0.0, 10.0, 10.0],
        2.0,
        1.0,
        0,
        0,
        1.0,
    );
    assert!(matches!(mismatched, Err(KdeError::InvalidInput(_))));

    let bad_kernel =
        DensityEstimator::from_raw(vec![], vec![], &[0.0, 0.0, 10.0, 10.0], 2.0, 1.0, 4, 0, 1.0);
    assert!(matches!(bad_kernel, Err(KdeError::UnknownEnum { kind: "kernel", .. })));

    let bad_gradient =
        DensityEstimator::from_raw(vec![], vec![], &[0.0, 0.0, 10.0, 10.0], 2.0, 1.0, 0, -1, 1.0);
    assert!(matches!(bad_gradient, Err(KdeError::UnknownEnum { kind: "gradient", .. })));
}

#[test]
fn test_zero_threads_rejected() {
    let config = EngineConfig::default().with_threads(0);
    let result = DensityEstimator::with_config(PointSet::empty(), params(KernelType::Uniform, 1.0), config);
    assert!(matches!(result, Err(KdeError::InvalidParameter { .. })));
}

#[test]
fn test_unaddressable_grid_rejected_at_construction() {
    let p = DensityParams {
        extent: Extent::new(0.0, 0.0, 1e6, 1e6),
        cellsize: 1e-4,
        ..params(KernelType::Quadratic, 1.0)
    };
    assert!(matches!(
        DensityEstimator::new(PointSet::empty(), p),
        Err(KdeError::InvalidParameter { .. })
    ));
}

#[test]
fn test_unallocatable_grid_fails_the_call_only() {
    // ~1e18 cells: addressable, but far beyond any real address space
    let p = DensityParams {
        extent: Extent::new(0.0, 0.0, 1e6, 1e6),
        cellsize: 1e-3,
        ..params(KernelType::Quadratic, 1.0)
    };
    let estimator = DensityEstimator::new(PointSet::empty(), p).unwrap();
    assert!(matches!(estimator.run(), Err(KdeError::ResourceExhausted(_))));

    // The process keeps working afterwards
    let map = DensityEstimator::new(single_point(5.0, 5.0), params(KernelType::Quadratic, 2.0))
        .unwrap()
        .run()
        .unwrap();
    assert!(map.gradient_max() > 0.0);
}

// ============================================================================
// Computation tests
// ============================================================================

#[test]
fn test_dimensions_and_channel_lengths() {
    let p = DensityParams::new(ragged_extent(), 1.0, 0.5, KernelType::Gaussian, GradientType::Fire, 1.0);
    let map = DensityEstimator::new(random_points(25, &ragged_extent(), 3), p)
        .unwrap()
        .run()
        .unwrap();

    // width 7.5 / 0.5 = 15, height 5.25 / 0.5 = 10.5 -> 11
    assert_eq!(map.cols(), 15);
    assert_eq!(map.rows(), 11);

    let cells = map.rows() * map.cols();
    assert_eq!(map.field.values.len(), cells);
    for channel in [&map.buffer.r, &map.buffer.g, &map.buffer.b, &map.buffer.a] {
        assert_eq!(channel.len(), cells);
    }
}

#[test]
fn test_geographic_extent_covers_points() {
    let extent = city_extent();
    let p = DensityParams::new(extent, 0.02, 0.01, KernelType::Quadratic, GradientType::Rdyibu, 0.7);
    let map = DensityEstimator::new(random_points(40, &extent, 11), p)
        .unwrap()
        .run()
        .unwrap();

    let spec = map.field.spec;
    assert!(spec.grid_right >= extent.right);
    assert!(spec.grid_upper >= extent.upper);
    assert!(map.gradient_max() > 0.0);
    assert!(map.buffer.a.iter().any(|a| *a > 0));
}

#[test]
fn test_empty_point_set_is_all_zero() {
    for kernel in KernelType::ALL {
        let map = DensityEstimator::new(PointSet::empty(), params(kernel, 2.0))
            .unwrap()
            .run()
            .unwrap();

        assert!(map.field.values.iter().all(|v| *v == 0.0));
        assert_eq!(map.gradient_min(), 0.0);
        assert_eq!(map.gradient_max(), 0.0);
        assert!(map.buffer.a.iter().all(|a| *a == 0));
    }
}

#[test]
fn test_quadratic_single_point_example() {
    let map = DensityEstimator::new(single_point(5.0, 5.0), params(KernelType::Quadratic, 2.0))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!((map.rows(), map.cols()), (10, 10));

    let (row, col) = map.field.spec.cell_at(5.0, 5.0).unwrap();
    assert_eq!(map.field.value(row, col), map.gradient_max());

    for row in 0..map.rows() {
        for col in 0..map.cols() {
            let center = map.field.spec.cell_center(row, col);
            if distance(center, (5.0, 5.0)) > 2.0 {
                assert_eq!(map.field.value(row, col), 0.0, "cell ({}, {})", row, col);
            }
        }
    }
}

#[test]
fn test_compact_kernels_vanish_beyond_bandwidth() {
    for kernel in [KernelType::Triangular, KernelType::Uniform, KernelType::Quadratic] {
        let map = DensityEstimator::new(single_point(3.2, 6.7), params(kernel, 1.5))
            .unwrap()
            .run()
            .unwrap();

        for row in 0..map.rows() {
            for col in 0..map.cols() {
                let center = map.field.spec.cell_center(row, col);
                if distance(center, (3.2, 6.7)) > 1.5 {
                    assert_eq!(map.field.value(row, col), 0.0, "{} at ({}, {})", kernel, row, col);
                }
            }
        }
    }
}

#[test]
fn test_gaussian_has_unbounded_support() {
    let map = DensityEstimator::new(single_point(0.5, 9.5), params(KernelType::Gaussian, 1.0))
        .unwrap()
        .run()
        .unwrap();

    assert!(map.field.values.iter().all(|v| *v > 0.0));
    assert_eq!(map.field.value(0, 0), map.gradient_max());
}

#[test]
fn test_values_non_negative_and_finite() {
    for kernel in KernelType::ALL {
        let map = DensityEstimator::new(random_points(40, &unit_extent(), 11), params(kernel, 2.5))
            .unwrap()
            .run()
            .unwrap();

        assert!(map.field.values.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(map.gradient_min() <= map.gradient_max());
    }
}

#[test]
fn test_min_max_map_to_table_ends() {
    let gradient = GradientType::Rdyibu;
    let p = DensityParams {
        gradient,
        ..params(KernelType::Triangular, 3.0)
    };
    let map = DensityEstimator::new(random_points(10, &unit_extent(), 5), p)
        .unwrap()
        .run()
        .unwrap();
    let table = gradient.table();

    let values = &map.field.values;
    let min_idx = values.iter().position(|v| *v == map.gradient_min()).unwrap();
    let max_idx = values.iter().position(|v| *v == map.gradient_max()).unwrap();

    assert_eq!(
        (map.buffer.r[min_idx], map.buffer.g[min_idx], map.buffer.b[min_idx]),
        (table.r[0], table.g[0], table.b[0])
    );
    assert_eq!(
        (map.buffer.r[max_idx], map.buffer.g[max_idx], map.buffer.b[max_idx]),
        (table.r[255], table.g[255], table.b[255])
    );
    assert_eq!(map.buffer.a[max_idx], 255);
}

#[test]
fn test_explicit_scale_rerender() {
    let map = DensityEstimator::new(single_point(5.0, 5.0), params(KernelType::Quadratic, 2.0))
        .unwrap()
        .run()
        .unwrap();

    let own = map.create_rgba_buffer(map.gradient_min(), map.gradient_max()).unwrap();
    assert_eq!(own, map.buffer);

    // Doubling the max halves every normalized value
    let wider = map.create_rgba_buffer(0.0, map.gradient_max() * 2.0).unwrap();
    let peak = map.field.values.iter().position(|v| *v == map.gradient_max()).unwrap();
    assert_eq!(wider.a[peak], 128);
}

// ============================================================================
// Determinism tests
// ============================================================================

#[test]
fn test_repeated_runs_are_bit_identical() {
    let points = random_points(60, &unit_extent(), 99);
    let run = || {
        DensityEstimator::new(points.clone(), params(KernelType::Gaussian, 1.7))
            .unwrap()
            .run()
            .unwrap()
    };

    let a = run();
    let b = run();
    assert_grids_identical!(a.field.values, b.field.values);
    assert_eq!(a.buffer, b.buffer);
}

#[test]
fn test_thread_count_does_not_change_result() {
    let points = random_points(60, &unit_extent(), 7);
    let baseline = DensityEstimator::with_config(
        points.clone(),
        params(KernelType::Quadratic, 2.2),
        EngineConfig::default().with_threads(1),
    )
    .unwrap()
    .run()
    .unwrap();

    for threads in [2, 3, 4, 7, 16] {
        let map = DensityEstimator::with_config(
            points.clone(),
            params(KernelType::Quadratic, 2.2),
            EngineConfig::default().with_threads(threads),
        )
        .unwrap()
        .run()
        .unwrap();

        assert_grids_identical!(map.field.values, baseline.field.values);
        assert_eq!(map.buffer, baseline.buffer);
    }
}
