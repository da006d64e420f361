//! # log-analyzer
//!
//! Decides whether a file name is an acceptable log file name.
//!
//! The decision about the extension is delegated to an [`ExtensionChecker`].
//! The checker can be swapped three ways:
//!
//! - **Injection**: [`FileNameValidator::set_checker`] on one instance.
//! - **Factory**: [`CheckerFactory::set_default_checker`] for every validator
//!   that resolves through that factory handle, undone with
//!   [`CheckerFactory::reset`].
//! - **Strategy**: [`FileNameValidator::with_provider`] or
//!   [`FileNameValidator::with_decision`].
//!
//! Checker faults never reach the caller. They turn the answer into `false`.
//!
//! ## Quick Start
//!
//! ```rust
//! use log_analyzer::{AnalyzerConfig, FileNameValidator};
//!
//! let config = AnalyzerConfig::with_extensions(["slf", "log"]);
//! let mut validator = FileNameValidator::from_config(&config);
//!
//! assert!(validator.is_valid("service.SLF").unwrap());
//! assert!(!validator.is_valid("service.foo").unwrap());
//! assert!(!validator.was_last_name_valid());
//! assert!(validator.is_valid("").is_err());
//! ```

mod checker;
mod config;
mod error;
mod factory;
pub mod output;
mod report;
mod validator;

pub use checker::{DecisionChecker, ExtensionChecker, ListExtensionChecker, extension_of};
pub use config::{AnalyzerConfig, DEFAULT_EXTENSIONS};
pub use error::{AnalyzerError, CheckerFault, ConfigError, EMPTY_NAME_MESSAGE};
pub use factory::{CheckerFactory, CheckerOverride, CheckerProvider};
pub use report::{CheckReport, NameOutcome, check_names};
pub use validator::FileNameValidator;
