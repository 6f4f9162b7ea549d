//! Conformance checks for agent-to-agent protocol payloads.
//!
//! This module validates the two document families an agent exchanges:
//! agent cards and the messages it emits while working on a task.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Document view, message kinds, findings ([`domain::Document`], [`domain::MessageKind`], [`domain::Finding`])
//! - **Ports**: Abstract interfaces ([`ports::DocumentValidator`], [`ports::DocumentSource`])
//! - **Validation**: Rule functions and the validators built from them
//! - **Services**: Load-then-validate orchestration
//! - **Adapters**: Filesystem document source
//!
//! # Example
//!
//! ```
//! use a2a_conformance::conformance::validation::validate_message;
//! use serde_json::json;
//!
//! let errors = validate_message(&json!({
//!     "kind": "message",
//!     "parts": [{"text": "hi"}],
//!     "role": "user",
//! }));
//! assert_eq!(errors, vec!["Message from agent must have 'role' set to 'agent'."]);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
