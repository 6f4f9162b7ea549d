//! Orchestration services built on the conformance ports.

mod family;
mod inspect;

pub use family::{DocumentFamily, ParseDocumentFamilyError};
pub use inspect::inspect_document;
