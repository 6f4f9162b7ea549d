//! Error types for loading documents.
//!
//! Validation itself never fails: defects are reported as findings. These
//! errors cover the infrastructure around it.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading a document for validation.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// The document could not be read.
    #[error("failed to read document '{path}': {source}")]
    Read {
        /// Location of the document.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The document is not valid JSON.
    #[error("failed to parse document '{path}': {source}")]
    Parse {
        /// Location of the document.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: Arc<serde_json::Error>,
    },
}

impl DocumentError {
    /// Creates a read error for `path`.
    #[must_use]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a parse error for `path`.
    #[must_use]
    pub fn parse(path: impl Into<Utf8PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Returns the path of the document that failed to load.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
