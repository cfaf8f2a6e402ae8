//! Error types for appkit

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppKitError>;

#[derive(Error, Debug)]
pub enum AppKitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid weight {weight} for '{value}' in variant set '{set}'")]
    InvalidWeight {
        set: String,
        value: String,
        weight: f64,
    },
}

/// Failures of a single weighted draw.
///
/// An empty or all-zero weight vector is not an error; it yields `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Invalid weight at index {index}: {weight} (weights must be finite and non-negative)")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("Sum of weights overflows")]
    WeightOverflow,
}
