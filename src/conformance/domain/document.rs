//! Read-only view over an untyped, already-decoded JSON document.

use serde_json::{Map, Value};

/// Borrowed view over a decoded document.
///
/// Any input that is not a JSON object behaves as an object with no keys,
/// so every presence check on it simply reports absence.
///
/// A key is *present* when it exists in the object, whatever its value,
/// including `null`.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::domain::Document;
/// use serde_json::json;
///
/// let value = json!({"status": {"state": "working"}});
/// let doc = Document::new(&value);
/// assert!(doc.nested("status", "state").is_some());
/// assert!(doc.nested("artifact", "parts").is_none());
///
/// let scalar = json!("not an object");
/// assert!(!Document::new(&scalar).has("kind"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Document<'a> {
    /// Wraps a decoded value.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// Returns the raw value for `key`, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Returns the value for `key` when it is a string.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&'a str> {
        self.field(key).and_then(Value::as_str)
    }

    /// Returns the value for `key` when it is an object.
    #[must_use]
    pub fn object(&self, key: &str) -> Option<Document<'a>> {
        self.field(key).filter(|v| v.is_object()).map(Document::new)
    }

    /// Returns the value for `key` when it is an array.
    #[must_use]
    pub fn array(&self, key: &str) -> Option<&'a [Value]> {
        self.field(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Returns the value for `key` when it is an array with at least one
    /// element.
    #[must_use]
    pub fn non_empty_array(&self, key: &str) -> Option<&'a [Value]> {
        self.array(key).filter(|items| !items.is_empty())
    }

    /// Follows `parent.child`, returning the child value when both links
    /// exist and `parent` is an object.
    #[must_use]
    pub fn nested(&self, parent: &str, child: &str) -> Option<&'a Value> {
        self.object(parent)
            .and_then(|inner| inner.field(child))
    }
}
