//! Validation service implementations.
//!
//! Provides the two [`DocumentValidator`] implementations, combining the
//! individual rules into complete validators, plus the string-returning
//! boundary functions.

use crate::conformance::{
    domain::{Document, Finding, KindClassification, Severity, ValidationReport},
    ports::validator::{DocumentValidator, ValidationConfig},
    validation::{card_rules, message_rules},
};
use serde_json::Value;
use tracing::debug;

/// Validator for agent card documents.
///
/// Applies every rule in a fixed order, collecting findings to give the
/// caller the complete defect picture rather than failing on the first one.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::ports::validator::DocumentValidator;
/// use a2a_conformance::conformance::validation::service::AgentCardValidator;
/// use serde_json::json;
///
/// let card = json!({
///     "name": "Echo",
///     "description": "Repeats what it hears.",
///     "url": "https://echo.example/a2a",
///     "version": "1.0.0",
///     "capabilities": {},
///     "defaultInputModes": ["text/plain"],
///     "defaultOutputModes": ["text/plain"],
///     "skills": [{"id": "echo"}],
/// });
///
/// assert!(AgentCardValidator::new().validate(&card).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AgentCardValidator {
    config: ValidationConfig,
}

impl AgentCardValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl DocumentValidator for AgentCardValidator {
    fn validate(&self, document: &Value) -> ValidationReport {
        let card = Document::new(document);
        let mut report = ValidationReport::new();

        for key in card_rules::REQUIRED_CARD_FIELDS {
            report.record(card_rules::validate_required_field(&card, key));
        }

        if let Some(url) = card.field("url") {
            report.record(card_rules::validate_url(url));
        }

        if let Some(capabilities) = card.field("capabilities") {
            report.record(card_rules::validate_capabilities(capabilities));
        }

        for field in card_rules::MODE_FIELDS {
            if let Some(modes) = card.field(field) {
                report.record(card_rules::validate_modes(field, modes));
            }
        }

        if let Some(skills) = card.field("skills") {
            report.record(card_rules::validate_skills_type(skills));
            report.record(filter_severity(
                card_rules::warn_empty_skills(skills),
                &self.config,
            ));
        }

        debug!(
            findings = report.len(),
            conformant = report.is_conformant(),
            "validated agent card"
        );
        report
    }
}

/// Validator for agent-emitted message documents.
///
/// Classifies the document by its `kind` discriminant, then runs the
/// checker for that shape. A missing or unknown `kind` is terminal: there is
/// no shape to check against.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::ports::validator::DocumentValidator;
/// use a2a_conformance::conformance::validation::service::A2aMessageValidator;
/// use serde_json::json;
///
/// let update = json!({"kind": "status-update", "status": {"state": "working"}});
/// assert!(A2aMessageValidator::new().validate(&update).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct A2aMessageValidator {
    config: ValidationConfig,
}

impl A2aMessageValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl DocumentValidator for A2aMessageValidator {
    fn validate(&self, document: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        match KindClassification::of(document) {
            KindClassification::Missing => {
                debug!("message has no kind");
                report.push(Finding::missing_kind());
            }
            KindClassification::Unknown(raw) => {
                debug!(kind = %raw, "message has unknown kind");
                report.push(Finding::unknown_kind(&raw));
            }
            KindClassification::Known(kind) => {
                message_rules::check_variant(kind, &Document::new(document), &mut report);
                debug!(
                    kind = %kind,
                    findings = report.len(),
                    "validated message"
                );
            }
        }

        report
    }
}

/// Validates an agent card, returning every finding as a string.
///
/// An empty list means the card is fully valid.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::validation::validate_agent_card;
/// use serde_json::json;
///
/// let errors = validate_agent_card(&json!({}));
/// assert_eq!(errors.len(), 8);
/// assert_eq!(errors[0], "Required field is missing: 'name'.");
/// ```
#[must_use]
pub fn validate_agent_card(document: &Value) -> Vec<String> {
    AgentCardValidator::new().validate(document).into_messages()
}

/// Validates an agent-emitted message, returning every finding as a string.
///
/// An empty list means the message is structurally valid for its kind.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::validation::validate_message;
/// use serde_json::json;
///
/// assert_eq!(
///     validate_message(&json!({"kind": "bogus"})),
///     vec!["Unknown message kind received: 'bogus'."]
/// );
/// ```
#[must_use]
pub fn validate_message(document: &Value) -> Vec<String> {
    A2aMessageValidator::new().validate(document).into_messages()
}

fn filter_severity(outcome: Option<Finding>, config: &ValidationConfig) -> Option<Finding> {
    outcome.filter(|finding| {
        config.report_warnings || finding.severity() != Severity::Warning
    })
}

// Note: Unit tests for the validators are located in
// src/conformance/tests/ using rstest fixtures.
