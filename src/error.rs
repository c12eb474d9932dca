// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClosenessError {
    #[error("cannot read matrix file {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed matrix in {path} (line {line}): {reason}")]
    MalformedMatrix {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("vertex {vertex} has a zero distance sum; closeness is undefined")]
    DegenerateCloseness { vertex: usize },

    #[error("cannot write results to {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("source vertex {source_vertex} is out of range for a graph of {size} vertices")]
    InvalidSource { source_vertex: usize, size: usize },
}

impl ClosenessError {
    /// True for failures caused by the input matrix rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InputUnavailable { .. } | Self::MalformedMatrix { .. } | Self::InvalidSource { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClosenessError>;
