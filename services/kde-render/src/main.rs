//! Density map renderer.
//!
//! Loads a point cloud (or generates a synthetic one), computes kernel
//! density maps and writes each map as an RGBA PNG file.

mod points;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use kde_engine::{
    ColorBuffer, DensityEstimator, DensityParams, EngineConfig, Extent, GradientType, KernelType,
    MultiIntervalEstimator,
};

#[derive(Parser, Debug)]
#[command(name = "kde-render")]
#[command(about = "Render kernel density maps of point clouds to PNG")]
struct Args {
    /// Grid extent as "left,lower,right,upper"
    #[arg(long, default_value = "0,0,100,100", allow_hyphen_values = true)]
    extent: Extent,

    /// Kernel bandwidth in data units
    #[arg(short, long, default_value_t = 10.0)]
    bandwidth: f64,

    /// Cell size in data units
    #[arg(short, long, default_value_t = 0.5)]
    cellsize: f64,

    /// Kernel: triangular, uniform, quadratic or gaussian
    #[arg(short, long, default_value = "quadratic")]
    kernel: KernelType,

    /// Gradient: classic, fire, omg, pbj, pjaitch or rdyibu
    #[arg(short, long, default_value = "classic")]
    gradient: GradientType,

    /// Global alpha multiplier in [0, 1]
    #[arg(long, default_value_t = 0.8)]
    opaque: f64,

    /// CSV file with x,y[,id] rows (default: synthetic clusters)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of synthetic clusters
    #[arg(long, default_value_t = 5)]
    clusters: usize,

    /// Points per synthetic cluster
    #[arg(long, default_value_t = 200)]
    per_cluster: usize,

    /// Spread of each synthetic cluster in data units
    #[arg(long, default_value_t = 8.0)]
    spread: f64,

    /// Seed for synthetic point generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Split the points into this many intervals sharing one color scale
    #[arg(long, default_value_t = 1)]
    intervals: usize,

    /// Row workers per map (overrides KDE_THREADS)
    #[arg(long, env = "KDE_THREADS")]
    threads: Option<usize>,

    /// Maximum intervals computed concurrently (overrides KDE_INTERVAL_WORKERS)
    #[arg(long, env = "KDE_INTERVAL_WORKERS")]
    interval_workers: Option<usize>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// File name prefix of the written images
    #[arg(long, default_value = "density")]
    prefix: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

/// Printed to stdout once all images are written.
#[derive(Debug, Serialize)]
struct RenderSummary {
    rows: usize,
    cols: usize,
    points: usize,
    gradient_min: f64,
    gradient_max: f64,
    images: Vec<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_level, args.json)?;

    let mut config = EngineConfig::from_env();
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if let Some(workers) = args.interval_workers {
        config.max_interval_workers = workers;
    }
    config.validate()?;

    let params = DensityParams::new(
        args.extent,
        args.bandwidth,
        args.cellsize,
        args.kernel,
        args.gradient,
        args.opaque,
    );
    params.validate()?;

    let points = match &args.input {
        Some(path) => points::load_csv(path)?,
        None => points::synthetic(&args.extent, args.clusters, args.per_cluster, args.spread, args.seed)?,
    };

    info!(
        points = points.len(),
        kernel = %args.kernel,
        gradient = %args.gradient,
        threads = config.threads,
        intervals = args.intervals,
        "Rendering density maps"
    );

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let summary = if args.intervals <= 1 {
        let map = DensityEstimator::with_config(points.clone(), params, config)?.run()?;
        let path = write_png(&args.output, &args.prefix, None, &map.buffer)?;

        RenderSummary {
            rows: map.rows(),
            cols: map.cols(),
            points: points.len(),
            gradient_min: map.gradient_min(),
            gradient_max: map.gradient_max(),
            images: vec![path],
        }
    } else {
        let intervals = points::split_intervals(&points, args.intervals);
        let maps = MultiIntervalEstimator::with_config(&points, &intervals, params, config)?.run()?;

        let images = maps
            .buffers
            .iter()
            .enumerate()
            .map(|(i, buffer)| write_png(&args.output, &args.prefix, Some(i), buffer))
            .collect::<Result<Vec<_>>>()?;

        RenderSummary {
            rows: maps.rows(),
            cols: maps.cols(),
            points: points.len(),
            gradient_min: maps.gradient_min(),
            gradient_max: maps.gradient_max(),
            images,
        }
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}

fn write_png(dir: &Path, prefix: &str, interval: Option<usize>, buffer: &ColorBuffer) -> Result<PathBuf> {
    let name = match interval {
        Some(i) => format!("{}_{:03}.png", prefix, i),
        None => format!("{}.png", prefix),
    };
    let path = dir.join(name);

    let png = buffer.to_png()?;
    fs::write(&path, &png).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = png.len(), "Wrote image");

    Ok(path)
}
