// src/io/loader.rs
//! Reads `.adjmat` files: one row per line, one decimal digit per entry.

use std::fs;
use std::path::Path;

use crate::error::{ClosenessError, Result};
use crate::graph::{Graph, ShapeError};
use crate::types::Weight;

/// Loads and validates a matrix file.
///
/// # Errors
/// Returns [`ClosenessError::InputUnavailable`] if the file cannot be read and
/// [`ClosenessError::MalformedMatrix`] if its contents are not a square digit matrix.
pub fn load_matrix(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path).map_err(|source| ClosenessError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = parse_matrix(&content, path)?;
    tracing::info!(
        path = %path.display(),
        vertices = graph.size(),
        edges = graph.edge_count(),
        "matrix loaded"
    );
    Ok(graph)
}

/// Parses matrix text. `origin` is only used in error messages.
///
/// The width of the first line fixes `N`; exactly `N` rows of `N` digits must
/// follow. Trailing blank lines are ignored.
///
/// # Errors
/// Returns [`ClosenessError::MalformedMatrix`] on empty input, non-digit
/// characters, ragged rows or a non-square shape.
pub fn parse_matrix(content: &str, origin: &Path) -> Result<Graph> {
    let lines: Vec<&str> = content.lines().collect();
    let used = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |last| last + 1);

    let mut rows: Vec<Vec<Weight>> = Vec::with_capacity(used);
    for (idx, line) in lines.iter().take(used).enumerate() {
        let row = parse_row(line).map_err(|reason| malformed(origin, idx + 1, reason))?;
        rows.push(row);
    }

    Graph::from_rows(&rows).map_err(|e| {
        let line = match e {
            ShapeError::Empty => 1,
            ShapeError::Ragged { row, .. } => row + 1,
            ShapeError::NotSquare { rows, .. } => rows,
            ShapeError::TooHeavy { .. } => 1,
        };
        malformed(origin, line, e.to_string())
    })
}

fn parse_row(line: &str) -> std::result::Result<Vec<Weight>, String> {
    line.chars()
        .enumerate()
        .map(|(col, c)| {
            c.to_digit(10)
                .ok_or_else(|| format!("column {}: '{c}' is not a digit", col + 1))
        })
        .collect()
}

fn malformed(origin: &Path, line: usize, reason: String) -> ClosenessError {
    ClosenessError::MalformedMatrix {
        path: origin.to_path_buf(),
        line,
        reason,
    }
}
