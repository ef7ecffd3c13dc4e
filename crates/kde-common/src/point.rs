//! Point sets with optional interval-membership ids.

use crate::{KdeError, KdeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A set of 2D points stored as parallel coordinate vectors.
///
/// Points may carry explicit integer ids. Without explicit ids a point's id is
/// its position in the set, so interval id lists index straight into the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
    ids: Option<Vec<i64>>,
}

impl PointSet {
    /// Create a point set from parallel x and y sequences.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> KdeResult<Self> {
        if xs.len() != ys.len() {
            return Err(KdeError::InvalidInput(format!(
                "coordinate sequences differ in length: {} x values, {} y values",
                xs.len(),
                ys.len()
            )));
        }

        if let Some(i) = xs
            .iter()
            .zip(&ys)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(KdeError::InvalidInput(format!(
                "point {} has non-finite coordinates ({}, {})",
                i, xs[i], ys[i]
            )));
        }

        Ok(Self { xs, ys, ids: None })
    }

    /// Create a point set whose points carry explicit, unique ids.
    pub fn with_ids(xs: Vec<f64>, ys: Vec<f64>, ids: Vec<i64>) -> KdeResult<Self> {
        let mut set = Self::new(xs, ys)?;

        if ids.len() != set.len() {
            return Err(KdeError::InvalidInput(format!(
                "expected {} point ids, got {}",
                set.len(),
                ids.len()
            )));
        }

        let mut seen = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if let Some(first) = seen.insert(*id, i) {
                return Err(KdeError::InvalidInput(format!(
                    "duplicate point id {} at positions {} and {}",
                    id, first, i
                )));
            }
        }

        set.ids = Some(ids);
        Ok(set)
    }

    /// Create an empty point set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Id of the point at `index`.
    pub fn id(&self, index: usize) -> i64 {
        match &self.ids {
            Some(ids) => ids[index],
            None => index as i64,
        }
    }

    /// Iterate over `(x, y)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Select the points named by `ids`, in the order given.
    ///
    /// Fails if any id does not resolve to a point of this set.
    pub fn select(&self, ids: &[i64]) -> KdeResult<PointSet> {
        let lookup: Option<HashMap<i64, usize>> = self
            .ids
            .as_ref()
            .map(|own| own.iter().enumerate().map(|(i, id)| (*id, i)).collect());

        let mut xs = Vec::with_capacity(ids.len());
        let mut ys = Vec::with_capacity(ids.len());
        let mut selected_ids = Vec::with_capacity(ids.len());

        for &id in ids {
            let index = match &lookup {
                Some(map) => map.get(&id).copied(),
                None => usize::try_from(id).ok().filter(|i| *i < self.len()),
            }
            .ok_or_else(|| {
                KdeError::InvalidInput(format!(
                    "point id {} does not exist in a pool of {} points",
                    id,
                    self.len()
                ))
            })?;

            xs.push(self.xs[index]);
            ys.push(self.ys[index]);
            selected_ids.push(id);
        }

        Ok(PointSet {
            xs,
            ys,
            ids: Some(selected_ids),
        })
    }
}
