//! Document source port.

use crate::conformance::error::DocumentError;
use camino::Utf8Path;
use serde_json::Value;

/// Port for obtaining decoded documents.
///
/// Decoding is the source's concern; validators only ever see a [`Value`].
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource: Send + Sync {
    /// Loads and decodes the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] when the document cannot be read and
    /// [`DocumentError::Parse`] when it is not valid JSON.
    fn load(&self, path: &Utf8Path) -> Result<Value, DocumentError>;
}
