//! Error types for the CLI.

use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// A referenced file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Sample file error
    #[error("Input error: {0}")]
    Input(#[from] walk_inputs::InputError),

    /// The simulation rejected a sample
    #[error("Simulation error: {0}")]
    Simulation(#[from] walk_core::SampleError),

    /// JSON output failed to serialise
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the CLI
pub type Result<T> = std::result::Result<T, CliError>;
