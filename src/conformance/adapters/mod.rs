//! Adapter implementations for conformance ports.

pub mod file;

pub use file::FileDocumentSource;
