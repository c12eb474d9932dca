// src/types.rs
//! Common data structures shared by the solver, the centrality measures and I/O.

/// Edge weight as stored in the adjacency matrix. `0` means "no edge".
pub type Weight = u32;

/// Total path length from a source vertex.
pub type Distance = u64;

/// Placeholder distance for vertices with no finite path from the source.
///
/// `2^31 - 1`. It is summed at face value, so it must stay small enough that
/// `1 / (sum)` survives 16 fractional digits. [`Graph::from_rows`] rejects
/// matrices whose longest possible path could reach it.
///
/// [`Graph::from_rows`]: crate::graph::Graph::from_rows
pub const UNREACHABLE: Distance = 0x7FFF_FFFF;

/// Shortest-path distances from one source, indexed by vertex.
pub type DistanceVector = Vec<Distance>;

/// One centrality score per vertex, indexed by vertex.
pub type CentralityVector = Vec<f64>;

/// Returns true if `d` is a finite distance.
#[must_use]
pub const fn is_reachable(d: Distance) -> bool {
    d != UNREACHABLE
}
