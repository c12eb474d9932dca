// src/graph/matrix.rs
//! Dense adjacency matrix.

use std::num::NonZeroU32;

use crate::types::{Distance, Weight, UNREACHABLE};

/// Immutable square adjacency matrix, stored row-major.
///
/// Entry `(i, j)` is the weight of the directed edge `i -> j`. A stored `0`
/// means there is no edge; zero-cost edges cannot be expressed, which is why
/// [`Graph::edge`] hands out `NonZeroU32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    size: usize,
    weights: Vec<Weight>,
}

/// Why a set of rows could not become a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    Empty,
    /// Row `row` (0-based) has `found` entries instead of `expected`.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Square in width but with the wrong number of rows.
    NotSquare { rows: usize, columns: usize },
    /// A simple path of `size - 1` heaviest edges could reach [`UNREACHABLE`].
    TooHeavy { size: usize, max_weight: Weight },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "matrix has no rows"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} entries, expected {expected}"),
            Self::NotSquare { rows, columns } => {
                write!(f, "matrix has {rows} rows but {columns} columns")
            }
            Self::TooHeavy { size, max_weight } => write!(
                f,
                "{size} vertices with edge weight {max_weight} can exceed the distance limit {UNREACHABLE}"
            ),
        }
    }
}

impl Graph {
    /// Builds a graph from rows of weights, checking that the matrix is square.
    ///
    /// # Errors
    /// Returns [`ShapeError`] if there are no rows, rows differ in length, the
    /// row count does not match the row length, or the longest possible
    /// shortest path could collide with [`UNREACHABLE`].
    pub fn from_rows(rows: &[Vec<Weight>]) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::Empty);
        };
        let size = first.len();

        let mut weights = Vec::with_capacity(size * size);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != size {
                return Err(ShapeError::Ragged {
                    row,
                    expected: size,
                    found: entries.len(),
                });
            }
            weights.extend_from_slice(entries);
        }

        if rows.len() != size {
            return Err(ShapeError::NotSquare {
                rows: rows.len(),
                columns: size,
            });
        }

        let max_weight = weights.iter().copied().max().unwrap_or(0);
        let hops = size.saturating_sub(1) as Distance;
        let longest = hops.saturating_mul(Distance::from(max_weight));
        if longest >= UNREACHABLE {
            return Err(ShapeError::TooHeavy { size, max_weight });
        }

        Ok(Self { size, weights })
    }

    /// Number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the edge `from -> to`, or `None` when there is no edge.
    ///
    /// # Panics
    /// Panics if either index is `>= size()`.
    #[must_use]
    pub fn edge(&self, from: usize, to: usize) -> Option<NonZeroU32> {
        NonZeroU32::new(self.row(from)[to])
    }

    /// Raw weights leaving `from`, `0` for absent edges.
    ///
    /// # Panics
    /// Panics if `from >= size()`.
    #[must_use]
    pub fn row(&self, from: usize) -> &[Weight] {
        let start = from * self.size;
        &self.weights[start..start + self.size]
    }

    /// Number of edges (non-zero entries), self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0).count()
    }
}
