// src/lib.rs
//! Closeness centrality over dense weighted adjacency matrices.
//!
//! [`graph::compute_distances`] runs a single-source shortest-path search;
//! [`centrality::compute_closeness`] and [`centrality::CentralityEngine`]
//! reduce those distances to one score per vertex.

pub mod centrality;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod io;
pub mod logging;
pub mod reporting;
pub mod types;

pub use centrality::{compute_closeness, CentralityEngine, CentralityOptions};
pub use error::{ClosenessError, Result};
pub use graph::{compute_distances, Graph};
