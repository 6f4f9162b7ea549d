//! Checks an agent card or agent message file for protocol conformance.
//!
//! Usage:
//!
//! ```text
//! a2a_validate <card|message> <path> [--json]
//! ```
//!
//! Each finding is written to stdout on its own line, prefixed with its
//! severity. With `--json` the findings are written as one JSON array
//! instead. Diagnostics go to stderr and honour `RUST_LOG`.
//!
//! Exit status is `0` when the document conforms (warnings allowed), `1`
//! when it has errors, and `2` when the arguments or the file are unusable.

use a2a_conformance::conformance::{
    adapters::FileDocumentSource,
    domain::ValidationReport,
    error::DocumentError,
    ports::validator::ValidationConfig,
    services::{DocumentFamily, inspect_document},
};
use camino::Utf8PathBuf;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "a2a_conformance=info,a2a_validate=info";
const EXIT_CONFORMANT: u8 = 0;
const EXIT_NON_CONFORMANT: u8 = 1;
const EXIT_FAILURE: u8 = 2;

/// Errors that stop the tool before a verdict is reached.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}

/// How findings are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    family: DocumentFamily,
    path: Utf8PathBuf,
    format: OutputFormat,
}

fn main() -> ExitCode {
    init_tracing();
    ExitCode::from(exit_status(&run(env::args().skip(1))))
}

/// Maps the outcome of a run onto the process exit status.
fn exit_status(outcome: &Result<ValidationReport, CliError>) -> u8 {
    match outcome {
        Ok(report) if report.is_conformant() => EXIT_CONFORMANT,
        Ok(_) => EXIT_NON_CONFORMANT,
        Err(err) => {
            error!(error = %err, "validation aborted");
            EXIT_FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn run(args: impl Iterator<Item = String>) -> Result<ValidationReport, CliError> {
    let invocation = parse_args(args)?;
    let validator = invocation.family.validator(ValidationConfig::default());
    let report = inspect_document(&FileDocumentSource::new(), validator.as_ref(), &invocation.path)?;
    write_report(&mut io::stdout().lock(), &report, invocation.format).map_err(CliError::Output)?;
    Ok(report)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Invocation, CliError> {
    let family = args
        .next()
        .ok_or_else(|| CliError::InvalidArgs("missing document family (card or message)".into()))
        .and_then(|raw| {
            DocumentFamily::try_from(raw.as_str())
                .map_err(|err| CliError::InvalidArgs(err.to_string()))
        })?;
    let path = args
        .next()
        .map(Utf8PathBuf::from)
        .ok_or_else(|| CliError::InvalidArgs("missing document path".into()))?;
    let format = match args.next().as_deref() {
        None => OutputFormat::Text,
        Some("--json") => OutputFormat::Json,
        Some(other) => {
            return Err(CliError::InvalidArgs(format!(
                "unexpected extra argument: {other}"
            )));
        }
    };
    if let Some(extra) = args.next() {
        return Err(CliError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok(Invocation {
        family,
        path,
        format,
    })
}

fn write_report(
    out: &mut impl Write,
    report: &ValidationReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for finding in report.findings() {
                writeln!(out, "{}: {finding}", finding.severity())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report).map_err(io::Error::other)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
#[path = "a2a_validate/tests.rs"]
mod tests;
