//! Unit tests for findings and validation reports.

use crate::conformance::domain::{Finding, Severity, ValidationReport};
use rstest::rstest;

#[rstest]
fn empty_report_is_conformant() {
    let report = ValidationReport::new();
    assert!(report.is_empty());
    assert!(report.is_conformant());
    assert!(!report.has_errors());
}

#[rstest]
fn record_skips_passing_checks() {
    let mut report = ValidationReport::new();
    report.record(None);
    report.record(Some(Finding::invalid_url()));
    report.record(None);
    assert_eq!(report.len(), 1);
}

#[rstest]
fn errors_and_warnings_are_partitioned_in_order() {
    let mut report = ValidationReport::new();
    report.push(Finding::missing_card_field("name"));
    report.push(Finding::skills_empty());
    report.push(Finding::capabilities_not_object());

    let errors: Vec<&str> = report.errors().map(Finding::message).collect();
    let warnings: Vec<&str> = report.warnings().map(Finding::message).collect();

    assert_eq!(
        errors,
        vec![
            "Required field is missing: 'name'.",
            "Field 'capabilities' must be an object.",
        ]
    );
    assert_eq!(
        warnings,
        vec!["Field 'skills' array is empty. Agent must have at least one skill if it performs actions."]
    );
    assert!(!report.is_conformant());
}

#[rstest]
fn into_messages_preserves_order() {
    let mut report = ValidationReport::new();
    report.extend([Finding::missing_kind(), Finding::unknown_kind("x")]);
    assert_eq!(
        report.into_messages(),
        vec![
            "Response from agent is missing required 'kind' field.",
            "Unknown message kind received: 'x'.",
        ]
    );
}

#[rstest]
#[case::error(Finding::message_role_not_agent(), Severity::Error)]
#[case::warning(Finding::skills_empty(), Severity::Warning)]
fn findings_carry_severity(#[case] finding: Finding, #[case] expected: Severity) {
    assert_eq!(finding.severity(), expected);
}

#[rstest]
fn finding_displays_message_verbatim() {
    let finding = Finding::missing_variant_field("StatusUpdate", "status.state");
    assert_eq!(
        finding.to_string(),
        "StatusUpdate object missing required field: 'status.state'."
    );
    assert_eq!(String::from(finding.clone()), finding.to_string());
}

#[rstest]
fn report_serializes_as_finding_list() {
    let mut report = ValidationReport::new();
    report.push(Finding::skills_empty());
    let encoded = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(encoded[0]["severity"], "warning");
    assert_eq!(encoded.as_array().map(Vec::len), Some(1));
}
