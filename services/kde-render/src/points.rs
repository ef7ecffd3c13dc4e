//! Point sources for the renderer: CSV files or synthetic clouds.

use anyhow::{bail, Context, Result};
use kde_common::{Extent, PointSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// Load points from a CSV file with `x,y` or `x,y,id` rows.
///
/// Blank lines and lines starting with `#` are skipped, as is a header
/// row (the first remaining line) whose first field is not numeric.
pub fn load_csv(path: &Path) -> Result<PointSet> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut ids = Vec::new();
    let mut first_row = true;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if std::mem::take(&mut first_row) && fields[0].parse::<f64>().is_err() {
            continue;
        }

        match fields.as_slice() {
            [x, y] | [x, y, _] => {
                xs.push(parse_field(x, line_no)?);
                ys.push(parse_field(y, line_no)?);
            }
            _ => bail!("line {}: expected 2 or 3 fields, got {}", line_no + 1, fields.len()),
        }

        if let [_, _, id] = fields.as_slice() {
            let id = id
                .parse::<i64>()
                .with_context(|| format!("line {}: invalid id '{}'", line_no + 1, id))?;
            ids.push(id);
        }
    }

    let points = if ids.is_empty() {
        PointSet::new(xs, ys)?
    } else if ids.len() == xs.len() {
        PointSet::with_ids(xs, ys, ids)?
    } else {
        bail!("either every row or no row must carry an id");
    };

    Ok(points)
}

fn parse_field(field: &str, line_no: usize) -> Result<f64> {
    field
        .parse::<f64>()
        .with_context(|| format!("line {}: invalid number '{}'", line_no + 1, field))
}

/// Generate `clusters` gaussian-ish blobs of `per_cluster` points inside
/// `extent`. Points are emitted cluster by cluster.
pub fn synthetic(extent: &Extent, clusters: usize, per_cluster: usize, spread: f64, seed: u64) -> Result<PointSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs = Vec::with_capacity(clusters * per_cluster);
    let mut ys = Vec::with_capacity(clusters * per_cluster);

    for _ in 0..clusters {
        let cx = rng.gen_range(extent.left..=extent.right);
        let cy = rng.gen_range(extent.lower..=extent.upper);

        for _ in 0..per_cluster {
            // Sum of uniforms, roughly normal around the center
            let dx: f64 = (0..3).map(|_| rng.gen_range(-1.0..=1.0)).sum::<f64>() / 3.0;
            let dy: f64 = (0..3).map(|_| rng.gen_range(-1.0..=1.0)).sum::<f64>() / 3.0;
            xs.push(cx + dx * spread);
            ys.push(cy + dy * spread);
        }
    }

    Ok(PointSet::new(xs, ys)?)
}

/// Split the point positions into `count` consecutive, near-equal intervals
/// of point ids.
pub fn split_intervals(points: &PointSet, count: usize) -> Vec<Vec<i64>> {
    let count = count.max(1);
    let n = points.len();
    let base = n / count;
    let extra = n % count;

    let mut intervals = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let size = base + usize::from(i < extra);
        intervals.push((start..start + size).map(|p| points.id(p)).collect());
        start += size;
    }
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_csv_with_header_and_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y,id").unwrap();
        writeln!(file, "1.0,2.0,10").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "3.5, 4.5, 20").unwrap();

        let points = load_csv(file.path()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.id(1), 20);
        assert_eq!(points.ys(), &[2.0, 4.5]);
    }

    #[test]
    fn test_load_csv_header_after_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# exported points").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "x,y").unwrap();
        writeln!(file, "1.0,2.0").unwrap();

        let points = load_csv(file.path()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points.xs(), &[1.0]);
    }

    #[test]
    fn test_load_csv_only_first_row_may_be_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y\n1.0,2.0\nx,y").unwrap();
        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn test_load_csv_without_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0\n1,1\n2,2").unwrap();

        let points = load_csv(file.path()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points.id(2), 2);
    }

    #[test]
    fn test_load_csv_mixed_ids_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0,1\n1,1").unwrap();
        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn test_load_csv_bad_number() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0\nabc,1").unwrap();
        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn test_synthetic_is_seeded() {
        let extent = Extent::new(0.0, 0.0, 100.0, 100.0);
        let a = synthetic(&extent, 3, 10, 5.0, 9).unwrap();
        let b = synthetic(&extent, 3, 10, 5.0, 9).unwrap();
        assert_eq!(a.len(), 30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_intervals_covers_all_points() {
        let points = PointSet::new(vec![0.0; 7], vec![0.0; 7]).unwrap();
        let intervals = split_intervals(&points, 3);

        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0], vec![0, 1, 2]);
        assert_eq!(intervals[1], vec![3, 4]);
        assert_eq!(intervals[2], vec![5, 6]);
    }

    #[test]
    fn test_split_more_intervals_than_points() {
        let points = PointSet::new(vec![1.0], vec![1.0]).unwrap();
        let intervals = split_intervals(&points, 3);
        assert_eq!(intervals.iter().map(Vec::len).sum::<usize>(), 1);
        assert!(intervals[1].is_empty());
    }
}
