// src/centrality/mod.rs
//! Per-vertex centrality built on single-source shortest paths.

pub mod closeness;
pub mod harmonic;

use std::time::Instant;

use clap::ValueEnum;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::error::{ClosenessError, Result};
use crate::graph::{compute_distances, Graph};
use crate::types::CentralityVector;

pub use closeness::compute_closeness;

/// Which reduction turns a distance vector into a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// `1 / sum of distances`, unreachable vertices counted at the sentinel value.
    #[default]
    Closeness,
    /// Sum of `1 / distance` over reachable vertices.
    Harmonic,
}

impl Measure {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Closeness => "closeness",
            Self::Harmonic => "harmonic",
        }
    }
}

/// What to emit for a vertex whose distance sum is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Emit `f64::INFINITY`.
    #[default]
    Infinity,
    /// Fail the run with [`ClosenessError::DegenerateCloseness`].
    Error,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CentralityOptions {
    pub measure: Measure,
    pub normalize: bool,
    pub degenerate: DegeneratePolicy,
    pub parallel: bool,
}

/// Runs one shortest-path search per vertex and reduces each to a score.
pub struct CentralityEngine {
    options: CentralityOptions,
}

impl CentralityEngine {
    #[must_use]
    pub fn new(options: CentralityOptions) -> Self {
        Self { options }
    }

    /// Scores every vertex, index `v` of the result belonging to vertex `v`.
    ///
    /// With `parallel` set, sources are spread over the rayon pool; the result
    /// is identical to the sequential run.
    ///
    /// # Errors
    /// Returns [`ClosenessError::DegenerateCloseness`] for the lowest such
    /// vertex when the policy is [`DegeneratePolicy::Error`].
    pub fn compute(&self, graph: &Graph) -> Result<CentralityVector> {
        let start = Instant::now();
        let size = graph.size();

        let scores: Vec<Option<f64>> = if self.options.parallel {
            (0..size)
                .into_par_iter()
                .map(|source| self.score_vertex(graph, source))
                .collect()
        } else {
            (0..size)
                .map(|source| self.score_vertex(graph, source))
                .collect()
        };

        let result = self.resolve_degenerate(scores)?;

        tracing::debug!(
            vertices = size,
            measure = self.options.measure.name(),
            normalize = self.options.normalize,
            parallel = self.options.parallel,
            elapsed = ?start.elapsed(),
            "centrality computed"
        );
        Ok(result)
    }

    /// `None` marks a degenerate vertex.
    fn score_vertex(&self, graph: &Graph, source: usize) -> Option<f64> {
        let distances = compute_distances(graph, source);
        match self.options.measure {
            Measure::Closeness => closeness::score(&distances, self.options.normalize),
            Measure::Harmonic => Some(harmonic::score(
                &distances,
                source,
                self.options.normalize,
            )),
        }
    }

    fn resolve_degenerate(&self, scores: Vec<Option<f64>>) -> Result<CentralityVector> {
        scores
            .into_iter()
            .enumerate()
            .map(|(vertex, score)| match (score, self.options.degenerate) {
                (Some(s), _) => Ok(s),
                (None, DegeneratePolicy::Infinity) => {
                    tracing::warn!(vertex, "zero distance sum, emitting infinity");
                    Ok(f64::INFINITY)
                }
                (None, DegeneratePolicy::Error) => {
                    Err(ClosenessError::DegenerateCloseness { vertex })
                }
            })
            .collect()
    }
}
