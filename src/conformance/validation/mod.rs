//! Validation rules and the validators composed from them.
//!
//! Rules are pure functions in [`card_rules`] and [`message_rules`];
//! [`service`] combines them into [`DocumentValidator`] implementations.
//!
//! [`DocumentValidator`]: crate::conformance::ports::DocumentValidator

pub mod card_rules;
pub mod message_rules;
pub mod service;

pub use service::{A2aMessageValidator, AgentCardValidator, validate_agent_card, validate_message};
