//! The log file name validator.

use std::fmt;
use std::sync::Arc;

use crate::checker::{DecisionChecker, ExtensionChecker};
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, EMPTY_NAME_MESSAGE};
use crate::factory::{CheckerFactory, CheckerProvider};

/// Decides whether a file name is an acceptable log file name.
///
/// The extension decision is delegated to an [`ExtensionChecker`], found in
/// this order:
///
/// 1. a checker injected with [`FileNameValidator::set_checker`] or
///    [`FileNameValidator::with_checker`];
/// 2. the checker this instance already resolved on an earlier call;
/// 3. the [`CheckerProvider`] given at construction, which for
///    [`FileNameValidator::new`] is [`CheckerFactory::global`].
///
/// Once resolved, the checker stays fixed for this instance until replaced
/// with `set_checker`. Later factory substitutions do not reach it.
pub struct FileNameValidator {
    checker: Option<Arc<dyn ExtensionChecker>>,
    provider: Arc<dyn CheckerProvider>,
    warn_on_fault: bool,
    last_outcome: Option<bool>,
}

impl FileNameValidator {
    /// A validator resolving its checker through the process-wide factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(CheckerFactory::global().clone())
    }

    /// A validator resolving its checker through `factory`.
    #[must_use]
    pub fn with_factory(factory: CheckerFactory) -> Self {
        Self::with_provider(factory)
    }

    /// A validator that asks `provider` for its checker on first use.
    #[must_use]
    pub fn with_provider(provider: impl CheckerProvider + 'static) -> Self {
        Self {
            checker: None,
            provider: Arc::new(provider),
            warn_on_fault: true,
            last_outcome: None,
        }
    }

    /// A validator using `checker` directly.
    ///
    /// The fallback provider is a private default factory, so the process-wide
    /// factory is never touched.
    #[must_use]
    pub fn with_checker(checker: Arc<dyn ExtensionChecker>) -> Self {
        Self {
            checker: Some(checker),
            provider: Arc::new(CheckerFactory::default()),
            warn_on_fault: true,
            last_outcome: None,
        }
    }

    /// A validator whose answer comes straight from `decide`.
    #[must_use]
    pub fn with_decision<F>(decide: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::with_checker(Arc::new(DecisionChecker::new(decide)))
    }

    /// A validator with its own factory and fault log level taken from `config`.
    #[must_use]
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::with_factory(CheckerFactory::from_config(config))
            .with_warn_on_fault(config.warn_on_fault)
    }

    /// Log absorbed checker faults at `warn` (`true`, the default) or `debug`.
    #[must_use]
    pub fn with_warn_on_fault(mut self, warn_on_fault: bool) -> Self {
        self.warn_on_fault = warn_on_fault;
        self
    }

    /// Inject `checker`, replacing whatever this instance used before.
    pub fn set_checker(&mut self, checker: Arc<dyn ExtensionChecker>) {
        self.checker = Some(checker);
    }

    /// Whether `name` is a valid log file name.
    ///
    /// A checker fault counts as "not valid" and is logged, never returned.
    /// The outcome is recorded for [`FileNameValidator::was_last_name_valid`].
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidArgument`] if `name` is empty. The
    /// recorded outcome is left untouched in that case.
    pub fn is_valid(&mut self, name: &str) -> Result<bool, AnalyzerError> {
        if name.is_empty() {
            return Err(AnalyzerError::InvalidArgument {
                message: EMPTY_NAME_MESSAGE.to_owned(),
            });
        }

        let valid = match self.active_checker().is_acceptable(name) {
            Ok(valid) => valid,
            Err(fault) => {
                if self.warn_on_fault {
                    tracing::warn!(
                        file_name = name,
                        %fault,
                        "Extension checker failed; treating name as invalid"
                    );
                } else {
                    tracing::debug!(
                        file_name = name,
                        %fault,
                        "Extension checker failed; treating name as invalid"
                    );
                }
                false
            }
        };

        tracing::debug!(file_name = name, valid, "Checked log file name");
        self.last_outcome = Some(valid);
        Ok(valid)
    }

    /// Outcome of the most recent [`FileNameValidator::is_valid`] call, `false` before any.
    #[must_use]
    pub fn was_last_name_valid(&self) -> bool {
        self.last_outcome.unwrap_or(false)
    }

    /// Outcome of the most recent call, or `None` if no name has been checked yet.
    #[must_use]
    pub fn last_outcome(&self) -> Option<bool> {
        self.last_outcome
    }

    fn active_checker(&mut self) -> Arc<dyn ExtensionChecker> {
        Arc::clone(self.checker.get_or_insert_with(|| self.provider.checker()))
    }
}

impl Default for FileNameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FileNameValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileNameValidator")
            .field("resolved", &self.checker.is_some())
            .field("warn_on_fault", &self.warn_on_fault)
            .field("last_outcome", &self.last_outcome)
            .finish_non_exhaustive()
    }
}
