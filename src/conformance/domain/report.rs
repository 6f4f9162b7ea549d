//! Ordered collection of findings produced by a single validator call.

use super::{Finding, Severity};
use serde::Serialize;

/// Append-only, ordered list of findings.
///
/// Order is part of the contract: findings appear in the order the checks
/// ran. An empty report means the document passed every check.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::domain::{Finding, ValidationReport};
///
/// let mut report = ValidationReport::new();
/// report.record(None);
/// report.record(Some(Finding::skills_empty()));
///
/// assert_eq!(report.len(), 1);
/// assert!(report.is_conformant());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            findings: Vec::new(),
        }
    }

    /// Appends a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Appends the outcome of a check that yields at most one finding.
    pub fn record(&mut self, outcome: Option<Finding>) {
        if let Some(finding) = outcome {
            self.findings.push(finding);
        }
    }

    /// Returns `true` when no check produced a finding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the number of findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Returns all findings in check order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Iterates over error findings only.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.of_severity(Severity::Error)
    }

    /// Iterates over warning findings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.of_severity(Severity::Warning)
    }

    /// Returns `true` if any finding is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    /// Returns `true` when the document conforms, warnings notwithstanding.
    #[must_use]
    pub fn is_conformant(&self) -> bool {
        !self.has_errors()
    }

    /// Returns `true` if any finding carries exactly this message.
    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.findings.iter().any(|f| f.message() == message)
    }

    /// Consumes the report, returning the messages in check order.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.findings.into_iter().map(Finding::into_message).collect()
    }

    fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |f| f.severity() == severity)
    }
}

impl Extend<Finding> for ValidationReport {
    fn extend<T: IntoIterator<Item = Finding>>(&mut self, iter: T) {
        self.findings.extend(iter);
    }
}
