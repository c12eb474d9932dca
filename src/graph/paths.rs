// src/graph/paths.rs
//! Single-source shortest paths over a dense adjacency matrix.

use crate::error::{ClosenessError, Result};
use crate::graph::Graph;
use crate::types::{Distance, DistanceVector, UNREACHABLE};

/// Computes the shortest distance from `source` to every vertex.
///
/// Label-setting search: `size()` rounds, each settling the unvisited vertex
/// with the smallest tentative distance (lowest index wins ties) and relaxing
/// its outgoing edges. Vertices with no path keep [`UNREACHABLE`].
///
/// # Panics
/// Panics if `source >= graph.size()`. Use [`try_compute_distances`] for a
/// checked call.
#[must_use]
pub fn compute_distances(graph: &Graph, source: usize) -> DistanceVector {
    let size = graph.size();
    let mut distance = vec![UNREACHABLE; size];
    let mut visited = vec![false; size];
    distance[source] = 0;

    for _ in 0..size {
        let Some(settled) = closest_unvisited(&distance, &visited) else {
            break;
        };
        visited[settled] = true;

        if distance[settled] == UNREACHABLE {
            continue;
        }
        relax_from(graph, settled, &visited, &mut distance);
    }

    distance
}

/// Checked variant of [`compute_distances`].
///
/// # Errors
/// Returns [`ClosenessError::InvalidSource`] if `source` is not a vertex.
pub fn try_compute_distances(graph: &Graph, source: usize) -> Result<DistanceVector> {
    if source >= graph.size() {
        return Err(ClosenessError::InvalidSource {
            source_vertex: source,
            size: graph.size(),
        });
    }
    Ok(compute_distances(graph, source))
}

/// First unvisited vertex, in index order, holding the minimum tentative distance.
fn closest_unvisited(distance: &[Distance], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (v, &d) in distance.iter().enumerate() {
        if visited[v] {
            continue;
        }
        match best {
            Some(b) if distance[b] <= d => {}
            _ => best = Some(v),
        }
    }
    best
}

fn relax_from(graph: &Graph, settled: usize, visited: &[bool], distance: &mut [Distance]) {
    let base = distance[settled];
    for v in 0..graph.size() {
        if visited[v] {
            continue;
        }
        let Some(weight) = graph.edge(settled, v) else {
            continue;
        };
        let candidate = base + Distance::from(weight.get());
        if candidate < distance[v] {
            distance[v] = candidate;
        }
    }
}
