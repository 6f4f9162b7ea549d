//! Selection of the validator for a document family.

use crate::conformance::{
    ports::validator::{DocumentValidator, ValidationConfig},
    validation::{A2aMessageValidator, AgentCardValidator},
};
use std::fmt;
use thiserror::Error;

/// The two payload families this crate checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFamily {
    /// An agent card published by an agent.
    AgentCard,
    /// A message emitted by an agent during a task.
    Message,
}

impl DocumentFamily {
    /// Returns the canonical command-line word for this family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AgentCard => "card",
            Self::Message => "message",
        }
    }

    /// Builds the validator for this family.
    #[must_use]
    pub fn validator(self, config: ValidationConfig) -> Box<dyn DocumentValidator> {
        match self {
            Self::AgentCard => Box::new(AgentCardValidator::with_config(config)),
            Self::Message => Box::new(A2aMessageValidator::with_config(config)),
        }
    }
}

impl fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a word names no document family.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown document family '{0}'; expected card or message")]
pub struct ParseDocumentFamilyError(pub String);

impl TryFrom<&str> for DocumentFamily {
    type Error = ParseDocumentFamilyError;

    /// Matches the command-line words exactly; case and whitespace count.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "card" | "agent-card" => Ok(Self::AgentCard),
            "message" => Ok(Self::Message),
            _ => Err(ParseDocumentFamilyError(value.to_owned())),
        }
    }
}
