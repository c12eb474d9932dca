// src/centrality/closeness.rs
//! Closeness centrality: reciprocal of the total distance to all vertices.

use crate::graph::{compute_distances, Graph};
use crate::types::{CentralityVector, Distance};

/// Scores every vertex in index order.
///
/// Unreachable vertices are summed at the sentinel's numeric value, so any
/// vertex that cannot reach the whole graph scores close to zero. A vertex
/// whose distance sum is zero (only a single-vertex graph) scores
/// `f64::INFINITY`, normalized or not. Use
/// [`CentralityEngine`](super::CentralityEngine) to fail on that case instead.
#[must_use]
pub fn compute_closeness(graph: &Graph, normalize: bool) -> CentralityVector {
    (0..graph.size())
        .map(|source| {
            let distances = compute_distances(graph, source);
            score(&distances, normalize).unwrap_or(f64::INFINITY)
        })
        .collect()
}

/// Reduces one distance vector, `None` when the distance sum is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(distances: &[Distance], normalize: bool) -> Option<f64> {
    let sum = sum_of_distances(distances);
    if sum == 0.0 {
        return None;
    }

    let closeness = 1.0 / sum;
    if normalize {
        Some(closeness * (distances.len() - 1) as f64)
    } else {
        Some(closeness)
    }
}

/// Sum of every entry, the source's own zero included.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sum_of_distances(distances: &[Distance]) -> f64 {
    distances.iter().map(|&d| d as f64).sum()
}
