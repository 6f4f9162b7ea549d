//! Error types for domain parsing.

use thiserror::Error;

/// Error returned when a string is not a known message kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message kind: {0}")]
pub struct ParseMessageKindError(pub String);
