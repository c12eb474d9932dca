// src/reporting.rs
//! Run summaries for the terminal and for scripts.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::centrality::Measure;

/// A vertex and its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedVertex {
    pub vertex: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub vertices: usize,
    pub edges: usize,
    pub measure: Measure,
    pub normalized: bool,
    pub most_central: Option<RankedVertex>,
    pub least_central: Option<RankedVertex>,
    pub duration_ms: u128,
}

/// Highest and lowest scoring vertices; the lowest index wins ties.
#[must_use]
pub fn extremes(scores: &[f64]) -> Option<(RankedVertex, RankedVertex)> {
    let mut ranked = scores
        .iter()
        .enumerate()
        .map(|(vertex, &score)| RankedVertex { vertex, score });
    let first = ranked.next()?;

    Some(ranked.fold((first, first), |(max, min), v| {
        (
            if v.score > max.score { v } else { max },
            if v.score < min.score { v } else { min },
        )
    }))
}

/// Prints a short human-readable summary to stdout.
pub fn print_summary(summary: &RunSummary) {
    println!(
        "{} {} vertices, {} edges ({}{}) in {}ms",
        "Computed".green().bold(),
        summary.vertices,
        summary.edges,
        summary.measure.name(),
        if summary.normalized { ", normalized" } else { "" },
        summary.duration_ms
    );

    if let Some(top) = summary.most_central {
        println!("  {} vertex {} ({:.6})", "most central: ".cyan(), top.vertex, top.score);
    }
    if let Some(low) = summary.least_central {
        println!("  {} vertex {} ({:.6})", "least central:".cyan(), low.vertex, low.score);
    }
    println!("{} {}", "Saved to".dimmed(), summary.output.display());
}

/// Prints the summary as a JSON object to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(summary: &RunSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
