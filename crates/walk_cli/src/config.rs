//! CLI configuration management.
//!
//! Loads simulator defaults from a TOML file; every field has a
//! fallback so a missing file simply yields the built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Configuration file error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file existed but could not be read
    #[error("could not read configuration: {0}")]
    Io(String),

    /// The file was not valid TOML for this schema
    #[error("could not parse configuration: {0}")]
    Parse(String),
}

/// Simulator defaults
///
/// ```toml
/// input = "samples.csv"
/// plane_target = [250, 300]
/// space_target = [45, 23, 17]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    /// Default sample file used when `simulate` gets no `--input`
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Default 2D target
    #[serde(default = "default_plane_target")]
    pub plane_target: [i64; 2],

    /// Default 3D target
    #[serde(default = "default_space_target")]
    pub space_target: [i64; 3],
}

fn default_input() -> PathBuf {
    PathBuf::from("samples.csv")
}

fn default_plane_target() -> [i64; 2] {
    [250, 300]
}

fn default_space_target() -> [i64; 3] {
    [45, 23, 17]
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            plane_target: default_plane_target(),
            space_target: default_space_target(),
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// A present-but-broken file is still an error; only absence is
    /// silently defaulted.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::load(path)?;
            debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }
}
