//! Filesystem document source.

use crate::conformance::{error::DocumentError, ports::DocumentSource};
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde_json::Value;
use std::io::{self, Read};

/// Reads JSON documents from the local filesystem.
///
/// Paths are opened relative to their parent directory through an ambient
/// capability handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentSource;

impl FileDocumentSource {
    /// Creates a new filesystem source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentSource for FileDocumentSource {
    fn load(&self, path: &Utf8Path) -> Result<Value, DocumentError> {
        let bytes = read_bytes(path).map_err(|err| DocumentError::read(path, err))?;
        serde_json::from_slice(&bytes).map_err(|err| DocumentError::parse(path, err))
    }
}

fn read_bytes(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    let mut file = dir.open(file_name)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
