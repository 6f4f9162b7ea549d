//! Agent card rule implementations.
//!
//! Each rule inspects one aspect of a card and returns at most one
//! [`Finding`]. Rules for a field only run when that field is present; the
//! missing-field rule covers absence.

use crate::conformance::domain::{Document, Finding};
use serde_json::Value;

/// Keys every agent card must carry, in reporting order.
pub const REQUIRED_CARD_FIELDS: [&str; 8] = [
    "name",
    "description",
    "url",
    "version",
    "capabilities",
    "defaultInputModes",
    "defaultOutputModes",
    "skills",
];

/// Card fields holding arrays of media type strings.
pub const MODE_FIELDS: [&str; 2] = ["defaultInputModes", "defaultOutputModes"];

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Reports `key` when it is absent from the card.
#[must_use]
pub fn validate_required_field(card: &Document<'_>, key: &str) -> Option<Finding> {
    (!card.has(key)).then(|| Finding::missing_card_field(key))
}

/// Validates that `url` is an absolute HTTP(S) URL.
///
/// A value passes when it is a string starting with `http://` or
/// `https://` followed by at least one character.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::validation::card_rules::validate_url;
/// use serde_json::json;
///
/// assert!(validate_url(&json!("https://agent.example/a2a")).is_none());
/// assert!(validate_url(&json!("ftp://agent.example")).is_some());
/// assert!(validate_url(&json!("https://")).is_some());
/// ```
#[must_use]
pub fn validate_url(url: &Value) -> Option<Finding> {
    let is_absolute = url.as_str().is_some_and(|raw| {
        URL_SCHEMES.iter().any(|scheme| {
            raw.strip_prefix(scheme)
                .is_some_and(|remainder| !remainder.is_empty())
        })
    });
    (!is_absolute).then(Finding::invalid_url)
}

/// Validates that `capabilities` is an object.
#[must_use]
pub fn validate_capabilities(capabilities: &Value) -> Option<Finding> {
    (!capabilities.is_object()).then(Finding::capabilities_not_object)
}

/// Validates that a mode field is an array of strings.
///
/// A non-array yields one finding; an array with any non-string element
/// yields a single combined finding rather than one per element.
#[must_use]
pub fn validate_modes(field: &str, modes: &Value) -> Option<Finding> {
    let Some(items) = modes.as_array() else {
        return Some(Finding::modes_not_array(field));
    };
    (!items.iter().all(Value::is_string)).then(|| Finding::modes_item_not_string(field))
}

/// Validates that `skills` is an array.
///
/// Elements are not inspected further.
#[must_use]
pub fn validate_skills_type(skills: &Value) -> Option<Finding> {
    (!skills.is_array()).then(Finding::skills_not_array)
}

/// Warns when `skills` is an empty array.
#[must_use]
pub fn warn_empty_skills(skills: &Value) -> Option<Finding> {
    skills
        .as_array()
        .filter(|items| items.is_empty())
        .map(|_| Finding::skills_empty())
}
