//! Shared output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`.
//! Color/terminal formatting is left to the CLI layer.

use std::io::Write;

use crate::report::CheckReport;

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "  LOG FILE NAME CHECK")?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer)?;
    writeln!(writer, "  Names checked:  {}", report.checked)?;
    writeln!(writer, "  Valid:          {}", report.valid_count)?;
    writeln!(writer, "  Invalid:        {}", report.invalid_count)?;
    writeln!(writer)?;

    if !report.outcomes.is_empty() {
        writeln!(writer, "{}", "-".repeat(60))?;
        for outcome in &report.outcomes {
            writeln!(writer, "{}", outcome.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(60))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} names are valid log file names",
            report.checked
        )?;
    } else {
        writeln!(writer, "\u{2717} {} name(s) rejected", report.invalid_count)?;
    }
    writeln!(writer, "{}", "=".repeat(60))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::factory::CheckerFactory;
    use crate::report::check_names;
    use crate::validator::FileNameValidator;

    fn sample_report() -> CheckReport {
        let mut validator = FileNameValidator::with_factory(CheckerFactory::default());
        check_names(&mut validator, ["good.slf", "bad.foo"])
    }

    #[test]
    fn test_write_json_fields() {
        let mut buf = Vec::new();
        write_json(&sample_report(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["checked"], 2);
        assert_eq!(value["valid_count"], 1);
        assert_eq!(value["invalid_count"], 1);
        assert_eq!(value["ok"], false);
        assert_eq!(value["outcomes"][0]["name"], "good.slf");
        assert_eq!(value["outcomes"][1]["valid"], false);
        assert!(value["outcomes"][0].get("error").is_none());
    }

    #[test]
    fn test_write_human_summary() {
        let mut buf = Vec::new();
        write_human(&sample_report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Names checked:  2"), "got: {text}");
        assert!(text.contains("good.slf: valid"), "got: {text}");
        assert!(text.contains("bad.foo: invalid"), "got: {text}");
        assert!(text.contains("1 name(s) rejected"), "got: {text}");
    }
}
