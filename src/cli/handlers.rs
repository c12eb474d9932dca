// src/cli/handlers.rs
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::centrality::CentralityEngine;
use crate::cli::args::Cli;
use crate::config::Config;
use crate::exit::ClosenessExit;
use crate::io;
use crate::reporting::{self, RunSummary};

/// Resolves the effective config: file (explicit or `./closeness.toml`), then arguments.
///
/// # Errors
/// Returns error if the config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path, true),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    Ok(cli.apply_to(config))
}

/// Where results go: `--output`, or the input path with its suffix swapped.
#[must_use]
pub fn resolve_output(cli: &Cli, config: &Config) -> PathBuf {
    cli.output.clone().unwrap_or_else(|| {
        io::output_path(&cli.input, &config.input_suffix, config.result_suffix())
    })
}

/// Loads the matrix, scores every vertex, writes the results and reports.
///
/// # Errors
/// Returns error if the matrix cannot be loaded, a vertex is degenerate under
/// the `error` policy, or the results cannot be written.
pub fn handle_compute(cli: &Cli) -> Result<ClosenessExit> {
    let start = Instant::now();
    let config = resolve_config(cli)?;
    let output = resolve_output(cli, &config);

    let graph = io::load_matrix(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    let engine = CentralityEngine::new(config.centrality_options());
    let scores = engine.compute(&graph)?;

    io::write_results(&output, &scores)?;

    let (most, least) = reporting::extremes(&scores).unzip();
    let summary = RunSummary {
        input: cli.input.clone(),
        output,
        vertices: graph.size(),
        edges: graph.edge_count(),
        measure: config.measure,
        normalized: config.normalize,
        most_central: most,
        least_central: least,
        duration_ms: start.elapsed().as_millis(),
    };

    if cli.json {
        reporting::print_json(&summary)?;
    } else {
        reporting::print_summary(&summary);
    }
    Ok(ClosenessExit::Success)
}
