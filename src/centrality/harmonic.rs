// src/centrality/harmonic.rs
//! Harmonic centrality (Boldi & Vigna): sum of reciprocal distances.

use crate::types::{is_reachable, Distance};

/// Sum of `1 / d(source, u)` over every reachable `u != source`.
///
/// Normalizing divides by `n - 1`; a single-vertex graph scores `0.0` either way.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(distances: &[Distance], source: usize, normalize: bool) -> f64 {
    let total: f64 = distances
        .iter()
        .enumerate()
        .filter(|&(u, &d)| u != source && is_reachable(d) && d > 0)
        .map(|(_, &d)| 1.0 / d as f64)
        .sum();

    let others = distances.len().saturating_sub(1);
    if normalize && others > 0 {
        total / others as f64
    } else {
        total
    }
}
