//! A2A conformance: structural checks for agent-to-agent protocol payloads.
//!
//! This crate inspects already-decoded JSON documents and reports every
//! defect it finds as a human-readable finding, without stopping at the
//! first one.
//!
//! # Modules
//!
//! - [`conformance`]: Agent card and message validation
//!
//! # Example
//!
//! ```
//! use a2a_conformance::conformance::validation::validate_agent_card;
//! use serde_json::json;
//!
//! let errors = validate_agent_card(&json!({"name": "Echo"}));
//! assert!(errors.contains(&"Required field is missing: 'url'.".to_owned()));
//! ```

pub mod conformance;
