//! Individual validation findings and their severity.

use serde::Serialize;
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The document does not conform to the protocol shape.
    Error,
    /// The document conforms but looks suspicious.
    Warning,
}

impl Severity {
    /// Returns the lowercase label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single defect reported by a validator.
///
/// The message text is the observable contract: callers compare it
/// verbatim, so every wording is produced by one of the constructors below.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::domain::{Finding, Severity};
///
/// let finding = Finding::missing_card_field("url");
/// assert_eq!(finding.severity(), Severity::Error);
/// assert_eq!(finding.to_string(), "Required field is missing: 'url'.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Finding {
    severity: Severity,
    message: String,
}

impl Finding {
    /// Creates an error finding with the given message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a warning finding with the given message.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Returns the severity of this finding.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for error findings.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Consumes the finding and returns its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }

    // ── Agent card ────────────────────────────────────────────────────

    /// A required agent card key is absent.
    #[must_use]
    pub fn missing_card_field(key: &str) -> Self {
        Self::error(format!("Required field is missing: '{key}'."))
    }

    /// The card `url` is not an absolute HTTP(S) URL.
    #[must_use]
    pub fn invalid_url() -> Self {
        Self::error("Field 'url' must be an absolute URL starting with http:// or https://.")
    }

    /// The card `capabilities` value is not a mapping.
    #[must_use]
    pub fn capabilities_not_object() -> Self {
        Self::error("Field 'capabilities' must be an object.")
    }

    /// A default mode field is not an array.
    #[must_use]
    pub fn modes_not_array(field: &str) -> Self {
        Self::error(format!("Field '{field}' must be an array of strings."))
    }

    /// A default mode array holds at least one non-string element.
    #[must_use]
    pub fn modes_item_not_string(field: &str) -> Self {
        Self::error(format!("All items in '{field}' must be strings."))
    }

    /// The card `skills` value is not an array.
    #[must_use]
    pub fn skills_not_array() -> Self {
        Self::error("Field 'skills' must be an array of AgentSkill objects.")
    }

    /// The card `skills` array has no elements.
    #[must_use]
    pub fn skills_empty() -> Self {
        Self::warning(
            "Field 'skills' array is empty. Agent must have at least one skill if it performs actions.",
        )
    }

    // ── Message ───────────────────────────────────────────────────────

    /// The message has no `kind` discriminant.
    #[must_use]
    pub fn missing_kind() -> Self {
        Self::error("Response from agent is missing required 'kind' field.")
    }

    /// The message `kind` is not one of the known literals.
    #[must_use]
    pub fn unknown_kind(kind: &str) -> Self {
        Self::error(format!("Unknown message kind received: '{kind}'."))
    }

    /// A variant is missing a required (possibly nested) field.
    ///
    /// `object` is the variant label (`Task`, `StatusUpdate`, ...) and
    /// `path` the dotted field path.
    #[must_use]
    pub fn missing_variant_field(object: &str, path: &str) -> Self {
        Self::error(format!("{object} object missing required field: '{path}'."))
    }

    /// The artifact carried by an artifact update has no usable `parts`.
    #[must_use]
    pub fn artifact_parts_invalid() -> Self {
        Self::error("Artifact object must have a non-empty 'parts' array.")
    }

    /// A chat message has no usable `parts`.
    #[must_use]
    pub fn message_parts_invalid() -> Self {
        Self::error("Message object must have a non-empty 'parts' array.")
    }

    /// A chat message was not authored with the `agent` role.
    #[must_use]
    pub fn message_role_not_agent() -> Self {
        Self::error("Message from agent must have 'role' set to 'agent'.")
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<Finding> for String {
    fn from(finding: Finding) -> Self {
        finding.into_message()
    }
}
