// Configuration module
// TOML config file with environment and CLI overrides

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::HashMatchError;
use crate::intent::detect::AlgorithmName;

/// Environment variable overriding the configured algorithm
const ALGORITHM_ENV: &str = "HASHMATCH_ALGORITHM";

/// On-disk configuration, all keys optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default hash algorithm when no --algorithm flag is given
    pub algorithm: Option<String>,
    /// Enable colored output (default true; only applies on a TTY)
    pub color: Option<bool>,
    /// Exit non-zero unless at least one match group is found
    pub require_match: Option<bool>,
}

impl Config {
    /// Path of the config file: <config dir>/hashmatch/config.toml
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hashmatch").join("config.toml"))
    }

    /// Load the config file; a missing file yields the defaults.
    /// A malformed file is reported as a warning and otherwise ignored.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("warning: ignoring malformed config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Resolve the effective algorithm: CLI flag, then environment,
    /// then config file, then sha256
    pub fn effective_algorithm(
        &self,
        cli_algorithm: Option<&str>,
    ) -> Result<AlgorithmName, HashMatchError> {
        if let Some(name) = cli_algorithm {
            return AlgorithmName::from_str(name);
        }
        if let Ok(name) = std::env::var(ALGORITHM_ENV) {
            return AlgorithmName::from_str(&name);
        }
        if let Some(name) = &self.algorithm {
            return AlgorithmName::from_str(name);
        }
        Ok(AlgorithmName::Sha256)
    }
}
