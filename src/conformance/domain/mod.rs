//! Domain model for protocol payload conformance.
//!
//! Documents arrive untyped; the domain provides a safe view over them,
//! the message discriminant, and the findings validators report. Nothing
//! here performs I/O.

mod document;
mod error;
mod finding;
mod kind;
mod report;

pub use document::Document;
pub use error::ParseMessageKindError;
pub use finding::{Finding, Severity};
pub use kind::{KIND_FIELD, KindClassification, MessageKind};
pub use report::ValidationReport;
