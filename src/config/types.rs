// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::centrality::{CentralityOptions, DegeneratePolicy, Measure};

/// Settings from `closeness.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Used when the normalization argument is omitted.
    pub normalize: bool,
    pub measure: Measure,
    /// What a zero distance sum produces: "infinity" or "error".
    pub degenerate: DegeneratePolicy,
    /// Spread source vertices over the rayon pool.
    pub parallel: bool,
    /// Suffix stripped from the input file name. Default: ".adjmat"
    pub input_suffix: String,
    /// Suffix for closeness results. Default: ".closeness"
    pub output_suffix: String,
    /// Suffix for harmonic results. Default: ".harmonic"
    pub harmonic_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize: false,
            measure: Measure::default(),
            degenerate: DegeneratePolicy::default(),
            parallel: false,
            input_suffix: ".adjmat".to_string(),
            output_suffix: ".closeness".to_string(),
            harmonic_suffix: ".harmonic".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn centrality_options(&self) -> CentralityOptions {
        CentralityOptions {
            measure: self.measure,
            normalize: self.normalize,
            degenerate: self.degenerate,
            parallel: self.parallel,
        }
    }

    /// Output suffix for the configured measure.
    #[must_use]
    pub fn result_suffix(&self) -> &str {
        match self.measure {
            Measure::Closeness => &self.output_suffix,
            Measure::Harmonic => &self.harmonic_suffix,
        }
    }
}
