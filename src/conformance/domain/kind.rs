//! Message discriminant and its classification.

use super::{Document, ParseMessageKindError};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Name of the discriminant field on every message document.
pub const KIND_FIELD: &str = "kind";

/// The closed set of message shapes an agent may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    /// A full task snapshot.
    Task,
    /// A task status transition.
    StatusUpdate,
    /// A new or appended artifact.
    ArtifactUpdate,
    /// A chat-style message authored by the agent.
    Message,
}

impl MessageKind {
    /// Every known kind, in dispatch order.
    pub const ALL: [Self; 4] = [
        Self::Task,
        Self::StatusUpdate,
        Self::ArtifactUpdate,
        Self::Message,
    ];

    /// Returns the wire literal for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::StatusUpdate => "status-update",
            Self::ArtifactUpdate => "artifact-update",
            Self::Message => "message",
        }
    }

    /// Returns the label used in findings for this kind's object.
    #[must_use]
    pub const fn object_label(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::StatusUpdate => "StatusUpdate",
            Self::ArtifactUpdate => "ArtifactUpdate",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MessageKind {
    type Error = ParseMessageKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "task" => Ok(Self::Task),
            "status-update" => Ok(Self::StatusUpdate),
            "artifact-update" => Ok(Self::ArtifactUpdate),
            "message" => Ok(Self::Message),
            _ => Err(ParseMessageKindError(value.to_owned())),
        }
    }
}

/// Outcome of reading the discriminant from a message document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindClassification {
    /// The discriminant names a known shape.
    Known(MessageKind),
    /// The document carries no `kind` field.
    Missing,
    /// The discriminant is present but not a known literal.
    ///
    /// Holds the value as text: strings verbatim, anything else as JSON.
    Unknown(String),
}

impl KindClassification {
    /// Classifies a decoded message document by its `kind` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use a2a_conformance::conformance::domain::{KindClassification, MessageKind};
    /// use serde_json::json;
    ///
    /// assert_eq!(
    ///     KindClassification::of(&json!({"kind": "task"})),
    ///     KindClassification::Known(MessageKind::Task)
    /// );
    /// assert_eq!(KindClassification::of(&json!({})), KindClassification::Missing);
    /// ```
    #[must_use]
    pub fn of(document: &Value) -> Self {
        match Document::new(document).field(KIND_FIELD) {
            None => Self::Missing,
            Some(Value::String(raw)) => MessageKind::try_from(raw.as_str())
                .map_or_else(|err| Self::Unknown(err.0), Self::Known),
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}
