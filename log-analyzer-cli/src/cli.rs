//! Argument parsing and command dispatch.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log_analyzer::output::{write_human, write_json};
use log_analyzer::{AnalyzerConfig, CheckReport, FileNameValidator, check_names};

use crate::logging;

#[derive(Debug, Parser)]
#[command(name = "log-analyzer", version, about = "Validate log file names")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether each name is an acceptable log file name.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// File names to check.
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Config file (.json, .yaml or .yml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Accepted extension; repeatable. Replaces the configured list.
    #[arg(short = 'e', long = "extension")]
    pub extensions: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Resolve the effective config for a `check` invocation.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the resulting
/// extension list is empty.
pub fn resolve_config(args: &CheckArgs) -> anyhow::Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_path(path)
            .with_context(|| format!("Loading config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    if !args.extensions.is_empty() {
        config.accepted_extensions.clone_from(&args.extensions);
        config.validate()?;
    }
    Ok(config)
}

/// Run `check` and write the report to `out`.
///
/// # Errors
///
/// Returns an error if the config cannot be resolved or writing fails.
pub fn check(args: &CheckArgs, out: &mut dyn Write) -> anyhow::Result<CheckReport> {
    let config = resolve_config(args)?;
    tracing::info!(
        extensions = ?config.accepted_extensions,
        "Using accepted extensions"
    );

    let mut validator = FileNameValidator::from_config(&config);
    let report = check_names(&mut validator, &args.names);

    match args.format {
        OutputFormat::Human => write_human(&report, out)?,
        OutputFormat::Json => write_json(&report, out)?,
    }
    Ok(report)
}

/// Parse arguments, set up logging and run the requested command.
///
/// Returns the process exit code: `0` when every name is valid, `1` otherwise.
///
/// # Errors
///
/// Returns an error if logging setup, config loading or output fails.
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match &cli.command {
        Command::Check(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let report = check(args, &mut out)?;

            if args.format == OutputFormat::Human {
                if report.ok {
                    eprintln!("{}", "PASS".green().bold());
                } else {
                    eprintln!(
                        "{} {} of {} name(s) rejected",
                        "FAIL".red().bold(),
                        report.invalid_count,
                        report.checked
                    );
                }
            }
            Ok(i32::from(!report.ok))
        }
    }
}
