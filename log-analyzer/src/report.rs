//! Batch check report types.

use serde::Serialize;

use crate::validator::FileNameValidator;

/// Outcome for a single checked name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct NameOutcome {
    /// The name as given.
    pub name: String,
    /// Whether the name is a valid log file name.
    pub valid: bool,
    /// Set when the name was rejected before reaching a checker (e.g. empty).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NameOutcome {
    /// Format the outcome for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        match (&self.error, self.valid) {
            (Some(error), _) => format!("\"{}\": error: {error}", self.name),
            (None, true) => format!("{}: valid", self.name),
            (None, false) => format!("{}: invalid", self.name),
        }
    }
}

/// Result of checking a batch of names.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Number of names checked.
    pub checked: usize,
    /// Number of valid names.
    pub valid_count: usize,
    /// Number of invalid or rejected names.
    pub invalid_count: usize,
    /// Whether every name was valid.
    pub ok: bool,
    /// Per-name outcomes, in input order.
    pub outcomes: Vec<NameOutcome>,
}

impl CheckReport {
    /// Outcomes for names that were not valid.
    #[must_use]
    pub fn failures(&self) -> impl Iterator<Item = &NameOutcome> {
        self.outcomes.iter().filter(|o| !o.valid)
    }
}

/// Check every name with `validator`, in order.
///
/// Rejected names (empty input) are recorded as invalid with the error message;
/// the batch is never aborted.
pub fn check_names<I, S>(validator: &mut FileNameValidator, names: I) -> CheckReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let outcomes: Vec<NameOutcome> = names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            match validator.is_valid(name) {
                Ok(valid) => NameOutcome {
                    name: name.to_owned(),
                    valid,
                    error: None,
                },
                Err(e) => NameOutcome {
                    name: name.to_owned(),
                    valid: false,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    let valid_count = outcomes.iter().filter(|o| o.valid).count();
    let checked = outcomes.len();
    tracing::info!(checked, valid = valid_count, "Checked log file names");

    CheckReport {
        checked,
        valid_count,
        invalid_count: checked - valid_count,
        ok: valid_count == checked,
        outcomes,
    }
}
