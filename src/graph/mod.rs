// src/graph/mod.rs
pub mod matrix;
pub mod paths;

pub use matrix::{Graph, ShapeError};
pub use paths::{compute_distances, try_compute_distances};
