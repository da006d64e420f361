//! Error types for log file name validation.

use std::path::PathBuf;

use thiserror::Error;

/// Message carried by [`AnalyzerError::InvalidArgument`] for empty names.
pub const EMPTY_NAME_MESSAGE: &str = "filename has to be provided";

/// Errors surfaced to callers of [`crate::FileNameValidator::is_valid`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyzerError {
    /// The input violated the operation's precondition.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable description of the problem.
        message: String,
    },
}

/// A failure raised by an [`crate::ExtensionChecker`].
///
/// The validator absorbs these: a faulting checker degrades the answer to
/// "invalid" and never reaches the caller of `is_valid`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Extension checker fault: {message}")]
pub struct CheckerFault {
    /// Human-readable description of the fault.
    pub message: String,
}

impl CheckerFault {
    /// Create a fault with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from loading or validating an [`crate::AnalyzerConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for this schema.
    #[error("Invalid JSON config {}: {source}", .path.display())]
    Json {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The config file is not valid YAML for this schema.
    #[error("Invalid YAML config {}: {message}", .path.display())]
    Yaml {
        /// Path of the config file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The config file extension is neither JSON nor YAML.
    #[error("Unsupported config format {}: expected .json, .yaml or .yml", .path.display())]
    UnsupportedFormat {
        /// Path of the config file.
        path: PathBuf,
    },

    /// No usable extension remained after normalization.
    #[error("At least one accepted extension must be configured")]
    NoExtensions,
}
