//! Jenks natural breaks, approximated with 1-D k-means
//!
//! The clustering is deterministic: seeds are the extreme values, further
//! seeds are picked farthest-first, then Lloyd iterations run until the
//! assignment is stable. Exact cluster edges may differ from other k-means
//! implementations on the same data.

use crate::quantile::bucket_boundaries;
use crate::traits::Classifier;
use geostyle_core::{Boundaries, Error, Result};
use ordered_float::OrderedFloat;
use tracing::trace;

/// Default cap on Lloyd iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// A cluster of values, described by its extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    pub min: f64,
    pub max: f64,
    pub len: usize,
}

/// One-dimensional k-means
#[derive(Debug, Clone, Copy)]
pub struct KMeans1d {
    max_iterations: usize,
}

impl Default for KMeans1d {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

fn nearest(centers: &[f64], value: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &c) in centers.iter().enumerate() {
        let d = (value - c).abs();
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}

impl KMeans1d {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    fn seed(values: &[f64], k: usize) -> Vec<f64> {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut centers = vec![min];
        if k > 1 {
            centers.push(max);
        }
        while centers.len() < k {
            let mut farthest = None;
            let mut farthest_distance = 0.0;
            for &v in values {
                let d = (v - centers[nearest(&centers, v)]).abs();
                if d > farthest_distance {
                    farthest = Some(v);
                    farthest_distance = d;
                }
            }
            match farthest {
                Some(v) => centers.push(v),
                // Fewer distinct values than clusters
                None => break,
            }
        }
        centers
    }

    /// Partition `values` into at most `k` clusters, ordered by extent
    ///
    /// `k` is capped at the number of values and empty clusters are dropped,
    /// so fewer than `k` clusters may come back.
    pub fn cluster(&self, values: &[f64], k: usize) -> Vec<Cluster> {
        if values.is_empty() || k == 0 {
            return Vec::new();
        }
        let k = k.min(values.len());
        let mut centers = Self::seed(values, k);
        let mut assignment: Vec<usize> = values.iter().map(|&v| nearest(&centers, v)).collect();

        for iteration in 0..self.max_iterations {
            let mut sums = vec![0.0; centers.len()];
            let mut counts = vec![0usize; centers.len()];
            for (&v, &a) in values.iter().zip(&assignment) {
                sums[a] += v;
                counts[a] += 1;
            }
            for (c, (sum, count)) in centers.iter_mut().zip(sums.into_iter().zip(counts)) {
                if count > 0 {
                    *c = sum / count as f64;
                }
            }

            let mut changed = false;
            for (&v, a) in values.iter().zip(assignment.iter_mut()) {
                let n = nearest(&centers, v);
                if n != *a {
                    *a = n;
                    changed = true;
                }
            }
            if !changed {
                trace!(iteration, k, "k-means converged");
                break;
            }
        }

        let mut clusters: Vec<Option<Cluster>> = vec![None; centers.len()];
        for (&v, &a) in values.iter().zip(&assignment) {
            clusters[a] = Some(match clusters[a] {
                Some(c) => Cluster {
                    min: c.min.min(v),
                    max: c.max.max(v),
                    len: c.len + 1,
                },
                None => Cluster { min: v, max: v, len: 1 },
            });
        }
        let mut clusters: Vec<Cluster> = clusters.into_iter().flatten().collect();
        clusters.sort_by_key(|c| (OrderedFloat(c.min), OrderedFloat(c.max)));
        clusters
    }
}

/// Natural breaks classification
#[derive(Debug, Clone, Copy, Default)]
pub struct Jenks {
    kmeans: KMeans1d,
}

impl Jenks {
    pub fn new(kmeans: KMeans1d) -> Self {
        Self { kmeans }
    }
}

impl Classifier for Jenks {
    fn classify_sorted(&self, sorted: &[f64], class_count: usize) -> Result<Option<Boundaries>> {
        if class_count == 0 {
            return Err(Error::InvalidParameter(
                "class count must be at least 1".to_string(),
            ));
        }
        let clusters = self.kmeans.cluster(sorted, class_count);
        bucket_boundaries(clusters.into_iter().map(|c| (c.min, c.max)))
    }
}
