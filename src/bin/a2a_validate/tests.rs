//! Unit tests for the validation command line.

use super::{CliError, Invocation, OutputFormat, exit_status, parse_args, write_report};
use a2a_conformance::conformance::{
    domain::{Finding, ValidationReport},
    error::DocumentError,
    services::DocumentFamily,
};
use camino::Utf8PathBuf;
use rstest::rstest;

fn args(raw: &[&str]) -> impl Iterator<Item = String> {
    raw.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
}

#[rstest]
#[case(&["card", "agent.json"], DocumentFamily::AgentCard, OutputFormat::Text)]
#[case(&["message", "event.json", "--json"], DocumentFamily::Message, OutputFormat::Json)]
fn parse_args_accepts_valid_invocations(
    #[case] raw: &[&str],
    #[case] family: DocumentFamily,
    #[case] format: OutputFormat,
) {
    let parsed = parse_args(args(raw)).expect("arguments should parse");
    let expected_path = raw.get(1).map(|p| Utf8PathBuf::from(*p)).expect("path argument");
    assert_eq!(
        parsed,
        Invocation {
            family,
            path: expected_path,
            format,
        }
    );
}

#[rstest]
#[case::empty(&[])]
#[case::no_path(&["card"])]
#[case::bad_family(&["skill", "x.json"])]
#[case::bad_flag(&["card", "x.json", "--yaml"])]
#[case::extra(&["card", "x.json", "--json", "more"])]
fn parse_args_rejects_bad_invocations(#[case] raw: &[&str]) {
    assert!(matches!(
        parse_args(args(raw)),
        Err(CliError::InvalidArgs(_))
    ));
}

fn sample_report() -> ValidationReport {
    let mut report = ValidationReport::new();
    report.push(Finding::missing_card_field("url"));
    report.push(Finding::skills_empty());
    report
}

#[rstest]
fn text_output_prefixes_severity() {
    let mut out = Vec::new();
    write_report(&mut out, &sample_report(), OutputFormat::Text).expect("write report");
    let text = String::from_utf8(out).expect("utf-8 output");
    assert_eq!(
        text,
        "error: Required field is missing: 'url'.\n\
         warning: Field 'skills' array is empty. Agent must have at least one skill if it performs actions.\n"
    );
}

#[rstest]
fn json_output_is_a_finding_array() {
    let mut out = Vec::new();
    write_report(&mut out, &sample_report(), OutputFormat::Json).expect("write report");
    let decoded: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(decoded.as_array().map(Vec::len), Some(2));
    assert_eq!(decoded[0]["severity"], "error");
}

#[rstest]
fn empty_report_writes_nothing_as_text() {
    let mut out = Vec::new();
    write_report(&mut out, &ValidationReport::new(), OutputFormat::Text).expect("write report");
    assert!(out.is_empty());
}

fn report_of(findings: Vec<Finding>) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.extend(findings);
    report
}

#[rstest]
#[case::clean(Ok(ValidationReport::new()), 0)]
#[case::warnings_only(Ok(report_of(vec![Finding::skills_empty()])), 0)]
#[case::errors(Ok(report_of(vec![Finding::skills_empty(), Finding::invalid_url()])), 1)]
#[case::usage(Err(CliError::InvalidArgs("missing document path".into())), 2)]
#[case::load(
    Err(CliError::Document(DocumentError::read(
        "absent.json",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    ))),
    2
)]
#[case::parse(
    Err(CliError::Document(DocumentError::parse(
        "broken.json",
        serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json"),
    ))),
    2
)]
fn exit_status_follows_verdict(
    #[case] outcome: Result<ValidationReport, CliError>,
    #[case] expected: u8,
) {
    assert_eq!(exit_status(&outcome), expected);
}
