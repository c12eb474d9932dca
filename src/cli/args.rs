// src/cli/args.rs
use clap::builder::BoolValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::centrality::{DegeneratePolicy, Measure};
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "closeness",
    version,
    about = "Closeness centrality for dense adjacency matrices"
)]
pub struct Cli {
    /// Matrix file: one row per line, one digit (0 = no edge) per entry
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Multiply each score by (N - 1): "true" or "false"
    #[arg(value_name = "NORMALIZE", value_parser = BoolValueParser::new())]
    pub normalize: Option<bool>,

    /// Write results here instead of next to the input
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Centrality measure
    #[arg(long, value_enum)]
    pub measure: Option<Measure>,

    /// Result for a vertex whose distance sum is zero
    #[arg(long, value_enum)]
    pub degenerate: Option<DegeneratePolicy>,

    /// Compute source vertices in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print a JSON summary instead of the text one
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Config file (default: ./closeness.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Overlays command-line values on a loaded config.
    #[must_use]
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(normalize) = self.normalize {
            config.normalize = normalize;
        }
        if let Some(measure) = self.measure {
            config.measure = measure;
        }
        if let Some(degenerate) = self.degenerate {
            config.degenerate = degenerate;
        }
        if self.parallel {
            config.parallel = true;
        }
        config
    }
}
