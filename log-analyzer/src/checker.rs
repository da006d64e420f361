//! Extension checkers: the collaborators that decide whether a file name's
//! extension is acceptable.
//!
//! Any `Fn(&str) -> Result<bool, CheckerFault>` closure is a checker, which
//! keeps ad-hoc doubles short. Plain boolean decisions go through
//! [`DecisionChecker`].

use std::fmt;

use crate::config::AnalyzerConfig;
use crate::error::CheckerFault;

/// Decides whether a file name carries an acceptable extension.
pub trait ExtensionChecker: Send + Sync {
    /// Returns whether `file_name` is acceptable.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckerFault`] if the checker could not reach a decision.
    /// Validators treat a fault as "not acceptable".
    fn is_acceptable(&self, file_name: &str) -> Result<bool, CheckerFault>;
}

impl<F> ExtensionChecker for F
where
    F: Fn(&str) -> Result<bool, CheckerFault> + Send + Sync,
{
    fn is_acceptable(&self, file_name: &str) -> Result<bool, CheckerFault> {
        self(file_name)
    }
}

/// Returns the substring after the final `.`, or `None` if there is no `.`.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Lowercase an extension entry and strip a leading `.`; blank entries yield `None`.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let ext = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

/// The default checker: case-insensitive membership of the extension in a fixed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListExtensionChecker {
    accepted: Vec<String>,
}

impl ListExtensionChecker {
    /// Build a checker accepting the given extensions.
    ///
    /// Entries may carry a leading `.` and any casing. Blank entries are dropped.
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted: Vec<String> = Vec::new();
        for ext in extensions {
            if let Some(ext) = normalize_extension(ext.as_ref())
                && !accepted.contains(&ext)
            {
                accepted.push(ext);
            }
        }
        Self { accepted }
    }

    /// Build a checker from the config's accepted extension list.
    #[must_use]
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(&config.accepted_extensions)
    }

    /// The normalized (lowercase, no leading dot) accepted extensions.
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }
}

impl Default for ListExtensionChecker {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl ExtensionChecker for ListExtensionChecker {
    fn is_acceptable(&self, file_name: &str) -> Result<bool, CheckerFault> {
        let Some(ext) = extension_of(file_name) else {
            return Ok(false);
        };
        if ext.is_empty() {
            return Ok(false);
        }
        let ext = ext.to_lowercase();
        Ok(self.accepted.iter().any(|a| *a == ext))
    }
}

/// Adapts an infallible decision function into a checker.
///
/// Use it to specialize a validator's answer without building a full checker.
pub struct DecisionChecker<F> {
    decide: F,
}

impl<F> DecisionChecker<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    /// Wrap `decide`.
    #[must_use]
    pub fn new(decide: F) -> Self {
        Self { decide }
    }
}

impl<F> fmt::Debug for DecisionChecker<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionChecker").finish_non_exhaustive()
    }
}

impl<F> ExtensionChecker for DecisionChecker<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_acceptable(&self, file_name: &str) -> Result<bool, CheckerFault> {
        Ok((self.decide)(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("app.log.slf"), Some("slf"));
        assert_eq!(extension_of("trailing."), Some(""));
        assert_eq!(extension_of(".slf"), Some("slf"));
        assert_eq!(extension_of("noext"), None);
    }

    #[test]
    fn test_default_accepts_slf_any_case() {
        let checker = ListExtensionChecker::default();
        assert_eq!(checker.accepted(), ["slf"]);
        assert_eq!(checker.is_acceptable("filewithgoodextension.slf"), Ok(true));
        assert_eq!(checker.is_acceptable("filewithgoodextension.SLF"), Ok(true));
        assert_eq!(checker.is_acceptable("filewithgoodextension.SlF"), Ok(true));
    }

    #[test]
    fn test_default_rejects_other_extensions() {
        let checker = ListExtensionChecker::default();
        assert_eq!(checker.is_acceptable("filewithbadextension.foo"), Ok(false));
        assert_eq!(checker.is_acceptable("slf"), Ok(false));
        assert_eq!(checker.is_acceptable("file.slf."), Ok(false));
        // Only the final extension counts.
        assert_eq!(checker.is_acceptable("file.slf.bak"), Ok(false));
    }

    #[test]
    fn test_new_normalizes_entries() {
        let checker = ListExtensionChecker::new([".LOG", "  Slf ", "", "."]);
        assert_eq!(checker.accepted(), ["log", "slf"]);
        assert_eq!(checker.is_acceptable("server.Log"), Ok(true));
    }

    #[test]
    fn test_closure_checker() {
        let faulty = |_: &str| -> Result<bool, CheckerFault> { Err(CheckerFault::new("boom")) };
        assert_eq!(
            faulty.is_acceptable("anything.anyextension"),
            Err(CheckerFault::new("boom"))
        );
    }

    #[test]
    fn test_decision_checker() {
        let checker = DecisionChecker::new(|name: &str| name.starts_with("keep"));
        assert_eq!(checker.is_acceptable("keep.ext"), Ok(true));
        assert_eq!(checker.is_acceptable("drop.ext"), Ok(false));
    }
}
