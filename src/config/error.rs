//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::scoring::ScoringError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Threshold override could not be parsed as a number.
    #[error("failed to parse {name}='{value}': {source}")]
    ThresholdParseError {
        name: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Threshold override parsed but is NaN or infinite.
    #[error("invalid {name}='{value}': threshold must be finite")]
    InvalidThreshold { name: String, value: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file.
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// The policy table is incomplete or holds an invalid threshold.
    #[error("invalid policy table: {0}")]
    Policy(#[from] ScoringError),
}
