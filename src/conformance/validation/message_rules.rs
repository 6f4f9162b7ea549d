//! Message variant rule implementations.
//!
//! One checker per [`MessageKind`]. Checkers share the required nested
//! field helper and append to the caller's report; they never stop early
//! except where a later check has nothing to inspect.

use crate::conformance::domain::{Document, Finding, MessageKind, ValidationReport};

/// Role literal an agent-authored message must carry.
pub const AGENT_ROLE: &str = "agent";

/// Reports `parent.child` as missing on `object` when either link is absent.
///
/// A missing parent and a parent without the child collapse into the same
/// finding.
#[must_use]
pub fn require_nested(
    document: &Document<'_>,
    object: &str,
    parent: &str,
    child: &str,
) -> Option<Finding> {
    document
        .nested(parent, child)
        .is_none()
        .then(|| Finding::missing_variant_field(object, &format!("{parent}.{child}")))
}

/// Reports `key` as missing on `object` when absent.
#[must_use]
pub fn require_field(document: &Document<'_>, object: &str, key: &str) -> Option<Finding> {
    (!document.has(key)).then(|| Finding::missing_variant_field(object, key))
}

/// Runs the checker for `kind` against `document`.
pub fn check_variant(kind: MessageKind, document: &Document<'_>, report: &mut ValidationReport) {
    match kind {
        MessageKind::Task => check_task(document, report),
        MessageKind::StatusUpdate => check_status_update(document, report),
        MessageKind::ArtifactUpdate => check_artifact_update(document, report),
        MessageKind::Message => check_message(document, report),
    }
}

/// Checks a task snapshot: `id` and `status.state` are both required.
pub fn check_task(document: &Document<'_>, report: &mut ValidationReport) {
    let label = MessageKind::Task.object_label();
    report.record(require_field(document, label, "id"));
    report.record(require_nested(document, label, "status", "state"));
}

/// Checks a status update: `status.state` is required.
pub fn check_status_update(document: &Document<'_>, report: &mut ValidationReport) {
    let label = MessageKind::StatusUpdate.object_label();
    report.record(require_nested(document, label, "status", "state"));
}

/// Checks an artifact update: `artifact` is required and must carry a
/// non-empty `parts` array.
pub fn check_artifact_update(document: &Document<'_>, report: &mut ValidationReport) {
    let label = MessageKind::ArtifactUpdate.object_label();
    if let Some(missing) = require_field(document, label, "artifact") {
        report.push(missing);
        return;
    }
    // A present but non-object artifact has no parts to offer.
    let has_parts = document
        .object("artifact")
        .and_then(|artifact| artifact.non_empty_array("parts"))
        .is_some();
    if !has_parts {
        report.push(Finding::artifact_parts_invalid());
    }
}

/// Checks an agent chat message: non-empty `parts` and `role == "agent"`.
pub fn check_message(document: &Document<'_>, report: &mut ValidationReport) {
    if document.non_empty_array("parts").is_none() {
        report.push(Finding::message_parts_invalid());
    }
    if document.string("role") != Some(AGENT_ROLE) {
        report.push(Finding::message_role_not_agent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn run(kind: MessageKind, value: &Value) -> Vec<String> {
        let mut report = ValidationReport::new();
        check_variant(kind, &Document::new(value), &mut report);
        report.into_messages()
    }

    #[rstest]
    #[case::no_status(json!({}))]
    #[case::empty_status(json!({"status": {}}))]
    #[case::scalar_status(json!({"status": "working"}))]
    fn require_nested_collapses_every_absence(#[case] value: Value) {
        let finding = require_nested(&Document::new(&value), "Task", "status", "state");
        assert_eq!(
            finding.map(Finding::into_message).as_deref(),
            Some("Task object missing required field: 'status.state'.")
        );
    }

    #[rstest]
    fn task_reports_both_missing_fields_in_order() {
        let messages = run(MessageKind::Task, &json!({"kind": "task", "status": {}}));
        assert_eq!(
            messages,
            vec![
                "Task object missing required field: 'id'.",
                "Task object missing required field: 'status.state'.",
            ]
        );
    }

    #[rstest]
    #[case::task(MessageKind::Task, json!({"id": "1", "status": {"state": null}}))]
    #[case::status_update(MessageKind::StatusUpdate, json!({"status": {"state": null}}))]
    fn null_state_counts_as_present(#[case] kind: MessageKind, #[case] value: Value) {
        assert!(run(kind, &value).is_empty());
    }

    #[rstest]
    fn task_accepts_null_id_as_present() {
        let messages = run(
            MessageKind::Task,
            &json!({"id": null, "status": {"state": "working"}}),
        );
        assert!(messages.is_empty());
    }

    #[rstest]
    fn artifact_update_stops_when_artifact_missing() {
        let messages = run(MessageKind::ArtifactUpdate, &json!({}));
        assert_eq!(
            messages,
            vec!["ArtifactUpdate object missing required field: 'artifact'."]
        );
    }

    #[rstest]
    #[case::scalar_artifact(json!({"artifact": "blob"}))]
    #[case::parts_object(json!({"artifact": {"parts": {}}}))]
    fn artifact_update_rejects_unusable_parts(#[case] value: Value) {
        assert_eq!(
            run(MessageKind::ArtifactUpdate, &value),
            vec!["Artifact object must have a non-empty 'parts' array."]
        );
    }

    #[rstest]
    fn message_reports_parts_then_role() {
        let messages = run(MessageKind::Message, &json!({"parts": [], "role": "user"}));
        assert_eq!(
            messages,
            vec![
                "Message object must have a non-empty 'parts' array.",
                "Message from agent must have 'role' set to 'agent'.",
            ]
        );
    }

    #[rstest]
    #[case::uppercase(json!("Agent"))]
    #[case::padded(json!(" agent"))]
    #[case::non_string(json!(["agent"]))]
    fn message_role_must_match_exactly(#[case] role: Value) {
        let messages = run(
            MessageKind::Message,
            &json!({"parts": [{"text": "hi"}], "role": role}),
        );
        assert_eq!(
            messages,
            vec!["Message from agent must have 'role' set to 'agent'."]
        );
    }
}
