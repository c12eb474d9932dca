// src/io/writer.rs
//! Result files: one score per line, fixed-point with 16 fractional digits.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ClosenessError, Result};

/// Fractional digits written per score.
pub const PRECISION: usize = 16;

/// Renders scores, newline-separated, with no newline after the last one.
///
/// Infinite scores render as `inf`.
#[must_use]
pub fn format_results(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|s| format!("{s:.prec$}", prec = PRECISION))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes scores to `path`, creating missing parent directories.
///
/// # Errors
/// Returns [`ClosenessError::OutputUnwritable`] if the directory or file
/// cannot be written.
pub fn write_results(path: &Path, scores: &[f64]) -> Result<()> {
    let unwritable = |source| ClosenessError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(unwritable)?;
    }
    fs::write(path, format_results(scores)).map_err(unwritable)?;

    tracing::info!(path = %path.display(), values = scores.len(), "results written");
    Ok(())
}

/// Reads a result file back into scores.
///
/// # Errors
/// Returns [`ClosenessError::InputUnavailable`] if the file cannot be read or
/// a line is not a number.
pub fn read_results(path: &Path) -> Result<Vec<f64>> {
    let unavailable = |source| ClosenessError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(unavailable)?;
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            l.trim().parse::<f64>().map_err(|e| {
                unavailable(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("'{l}': {e}"),
                ))
            })
        })
        .collect()
}

/// Derives the output path by swapping `input_suffix` for `output_suffix`.
///
/// When the file name does not end in `input_suffix`, `output_suffix` is appended.
#[must_use]
pub fn output_path(input: &Path, input_suffix: &str, output_suffix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(input_suffix).unwrap_or(&name);
    input.with_file_name(format!("{stem}{output_suffix}"))
}
