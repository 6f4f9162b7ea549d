//! Port definitions for conformance checking.
//!
//! Ports define abstract interfaces that adapters implement, keeping
//! validation independent of where documents come from.

pub mod source;
pub mod validator;

pub use source::DocumentSource;
pub use validator::{DocumentValidator, ValidationConfig};
