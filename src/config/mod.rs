// src/config/mod.rs
pub mod types;

pub use self::types::Config;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ClosenessError, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "closeness.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `closeness.toml` from the working directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), false)
    }

    /// Loads an explicit config file. With `required` unset, a missing file
    /// yields defaults.
    ///
    /// # Errors
    /// Returns [`ClosenessError::Config`] on read or parse failure.
    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::parse_toml(&content, path)?;
                tracing::debug!(path = %path.display(), ?config, "config loaded");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(e) => Err(config_error(path, e.to_string())),
        }
    }

    /// Parses TOML content. `origin` is only used in error messages.
    ///
    /// # Errors
    /// Returns [`ClosenessError::Config`] on syntax errors, unknown keys or
    /// empty suffixes.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| config_error(origin, e.to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        let suffixes = [
            ("input_suffix", &self.input_suffix),
            ("output_suffix", &self.output_suffix),
            ("harmonic_suffix", &self.harmonic_suffix),
        ];
        for (key, value) in suffixes {
            if value.is_empty() {
                return Err(config_error(origin, format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

fn config_error(path: &Path, reason: String) -> ClosenessError {
    ClosenessError::Config {
        path: PathBuf::from(path),
        reason,
    }
}
