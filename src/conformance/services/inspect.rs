//! Load-then-validate orchestration.

use crate::conformance::{
    domain::ValidationReport,
    error::DocumentError,
    ports::{DocumentSource, DocumentValidator},
};
use camino::Utf8Path;
use tracing::{info, warn};

/// Loads the document at `path` from `source` and validates it.
///
/// # Errors
///
/// Returns the source's [`DocumentError`] when the document cannot be
/// loaded. Validation findings are never errors; they are in the report.
pub fn inspect_document<S, V>(
    source: &S,
    validator: &V,
    path: &Utf8Path,
) -> Result<ValidationReport, DocumentError>
where
    S: DocumentSource + ?Sized,
    V: DocumentValidator + ?Sized,
{
    let document = source.load(path)?;
    let report = validator.validate(&document);

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if report.is_conformant() {
        info!(%path, warnings, "document conforms");
    } else {
        warn!(%path, errors, warnings, "document does not conform");
    }

    Ok(report)
}
