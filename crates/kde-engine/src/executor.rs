//! Bounded worker pools for row-partitioned grid fills and interval fan-out.
//!
//! Row fills hand each worker an exclusive `&mut` band of whole rows taken
//! with `chunks_mut`, so workers never write the same cell and no locking is
//! needed. Every fill blocks until all bands are done.
//!
//! A `RowExecutor` owns one pool for its whole lifetime. Estimators build a
//! single executor per run and share it across every interval, so the number
//! of row threads never exceeds `threads` however many fields are computed.

use crate::config::EngineConfig;
use kde_common::{KdeError, KdeResult};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::warn;

/// Fills row-major grids with one band of rows per worker.
#[derive(Debug)]
pub struct RowExecutor {
    threads: usize,
    pool: Option<ThreadPool>,
}

impl RowExecutor {
    /// Start an executor with `threads` row workers.
    ///
    /// With a single thread no pool is created and rows are filled on the
    /// calling thread.
    pub fn new(threads: usize, sequential_fallback: bool) -> KdeResult<Self> {
        Self::with_builder(threads, sequential_fallback, build_pool)
    }

    pub fn from_config(config: &EngineConfig) -> KdeResult<Self> {
        Self::new(config.threads, config.sequential_fallback)
    }

    pub(crate) fn with_builder<B>(threads: usize, sequential_fallback: bool, build: B) -> KdeResult<Self>
    where
        B: FnOnce(usize, &'static str) -> KdeResult<ThreadPool>,
    {
        let threads = threads.max(1);
        let pool = if threads > 1 {
            start_pool(threads, "kde-row", sequential_fallback, build)?
        } else {
            None
        };

        Ok(Self { threads, pool })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Whether rows are filled by a worker pool rather than the calling thread.
    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// Rows assigned to each band for a grid of `rows` rows.
    pub fn band_rows(&self, rows: usize) -> usize {
        rows.div_ceil(self.threads).max(1)
    }

    /// Call `fill_row(row, cells)` for every row of `grid`.
    ///
    /// `grid` holds `cols` values per row. Returns once every row is filled.
    pub fn fill_rows<F>(&self, grid: &mut [f64], cols: usize, fill_row: F)
    where
        F: Fn(usize, &mut [f64]) + Sync,
    {
        if grid.is_empty() || cols == 0 {
            return;
        }

        let rows = grid.len() / cols;
        let pool = match &self.pool {
            Some(pool) if rows > 1 => pool,
            _ => {
                fill_band(grid, 0, cols, &fill_row);
                return;
            }
        };

        let band_rows = self.band_rows(rows);
        let fill_row = &fill_row;
        pool.scope(|scope| {
            for (band, cells) in grid.chunks_mut(band_rows * cols).enumerate() {
                scope.spawn(move |_| fill_band(cells, band * band_rows, cols, fill_row));
            }
        });
    }
}

fn fill_band<F>(cells: &mut [f64], first_row: usize, cols: usize, fill_row: &F)
where
    F: Fn(usize, &mut [f64]),
{
    for (offset, row) in cells.chunks_mut(cols).enumerate() {
        fill_row(first_row + offset, row);
    }
}

/// Build a dedicated pool, mapping creation failure to `ResourceExhausted`.
pub(crate) fn build_pool(workers: usize, name: &'static str) -> KdeResult<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(move |i| format!("{}-{}", name, i))
        .build()
        .map_err(|e| {
            KdeError::ResourceExhausted(format!("failed to start {} {} workers: {}", workers, name, e))
        })
}

/// Build a pool with `build`. `None` means the caller runs sequentially.
fn start_pool<B>(
    workers: usize,
    name: &'static str,
    sequential_fallback: bool,
    build: B,
) -> KdeResult<Option<ThreadPool>>
where
    B: FnOnce(usize, &'static str) -> KdeResult<ThreadPool>,
{
    match build(workers, name) {
        Ok(pool) => Ok(Some(pool)),
        Err(err) if sequential_fallback => {
            warn!(error = %err, workers, pool = name, "Worker pool unavailable, running on calling thread");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Run `f` over `items` on at most `workers` threads, keeping input order.
///
/// Fails if any call fails; no partial output is returned.
pub(crate) fn map_bounded<T, R, F>(
    items: &[T],
    workers: usize,
    sequential_fallback: bool,
    f: F,
) -> KdeResult<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> KdeResult<R> + Sync + Send,
{
    map_bounded_with(items, workers, sequential_fallback, build_pool, f)
}

fn map_bounded_with<T, R, F, B>(
    items: &[T],
    workers: usize,
    sequential_fallback: bool,
    build: B,
    f: F,
) -> KdeResult<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> KdeResult<R> + Sync + Send,
    B: FnOnce(usize, &'static str) -> KdeResult<ThreadPool>,
{
    let sequential = |f: &F| -> KdeResult<Vec<R>> {
        items.iter().enumerate().map(|(i, item)| f(i, item)).collect()
    };

    if workers <= 1 || items.len() <= 1 {
        return sequential(&f);
    }

    match start_pool(workers, "kde-interval", sequential_fallback, build)? {
        Some(pool) => pool.install(|| {
            items
                .par_iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect()
        }),
        None => sequential(&f),
    }
}
