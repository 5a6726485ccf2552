// Error types for resource loading and configuration.
//
// Only missing or malformed inputs are errors. Linguistic rejections and
// words without a correction are encoded in return values instead.

use std::path::PathBuf;

/// A lexical resource could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list has no header row.
    #[error("{name}: missing header row")]
    MissingHeader { name: String },

    /// The word list header lacks a required column.
    #[error("{name}: missing required column '{column}'")]
    MissingColumn { name: String, column: &'static str },

    /// A line could not be parsed.
    #[error("{name}:{line}: {reason}")]
    Malformed {
        name: String,
        line: usize,
        reason: String,
    },
}

/// The configuration file or an option value is invalid.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the expected shape.
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Scoring weights are negative or sum to more than 1.
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    /// The acceptance threshold is outside `[0, 100]`.
    #[error("threshold {0} is outside [0, 100]")]
    InvalidThreshold(f64),
}

/// Any error surfaced by [`crate::SinhalaHandle`] construction or reload.
#[derive(Debug, thiserror::Error)]
pub enum SinhalaError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
