//! Configuration for log file name validation.
//!
//! The accepted extension list is deployment data, not business logic: it is
//! loaded from JSON or YAML and handed to [`crate::ListExtensionChecker`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checker::normalize_extension;
use crate::error::ConfigError;

/// Extensions accepted when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["slf"];

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AnalyzerConfig {
    /// Extensions accepted by the default checker, compared case-insensitively.
    /// A leading `.` is tolerated.
    pub accepted_extensions: Vec<String>,
    /// Log absorbed checker faults at `warn` (default) instead of `debug`.
    pub warn_on_fault: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
            warn_on_fault: true,
        }
    }
}

impl AnalyzerConfig {
    /// Default config with the accepted list replaced by `extensions`.
    #[must_use]
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted_extensions: extensions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Load a config file, picking the parser from the file extension.
    ///
    /// `.json` is parsed with `serde_json`; `.yaml` and `.yml` with `serde-saphyr`.
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, has an unsupported
    /// extension, fails to parse, or configures no usable extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let config: Self = match format.as_deref() {
            Some("json") => {
                let content = read_config(path)?;
                serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                    path: path.to_owned(),
                    source,
                })?
            }
            Some("yaml" | "yml") => {
                let content = read_config(path)?;
                serde_saphyr::from_str(&content).map_err(|e| ConfigError::Yaml {
                    path: path.to_owned(),
                    message: e.to_string(),
                })?
            }
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_owned(),
                });
            }
        };

        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            extensions = config.accepted_extensions.len(),
            "Loaded analyzer config"
        );
        Ok(config)
    }

    /// Check that at least one non-blank extension is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoExtensions`] if every entry is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .accepted_extensions
            .iter()
            .any(|e| normalize_extension(e).is_some())
        {
            Ok(())
        } else {
            Err(ConfigError::NoExtensions)
        }
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })
}
