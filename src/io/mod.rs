// src/io/mod.rs
//! Matrix loading and result writing around the centrality core.

pub mod loader;
pub mod writer;

pub use loader::{load_matrix, parse_matrix};
pub use writer::{format_results, output_path, read_results, write_results};
