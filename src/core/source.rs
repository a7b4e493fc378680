//! Source file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::sniff;
use crate::error::SourceError;

/// The fully buffered source file and its sniffed content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl FileContent {
    /// Wrap an in-memory buffer, sniffing its content type.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let content_type = sniff::detect_content_type(&bytes);
        Self {
            bytes,
            content_type,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Read the whole file at `path` into memory.
///
/// The file handle is closed before this returns, on success and on error.
///
/// # Errors
///
/// `SourceError::OpenFailed` if the file cannot be opened,
/// `SourceError::ReadFailed` if reading it fails (including when `path`
/// is a directory on platforms where opening one succeeds).
pub fn read_source(path: impl AsRef<Path>) -> Result<FileContent, SourceError> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|source| SourceError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let capacity = file
        .metadata()
        .map(|m| m.len() as usize)
        .unwrap_or_default();
    let mut bytes = Vec::with_capacity(capacity);
    file.read_to_end(&mut bytes)
        .map_err(|source| SourceError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let content = FileContent::from_bytes(bytes);
    debug!(
        path = %path.display(),
        size = content.len(),
        content_type = content.content_type,
        "read source file"
    );
    Ok(content)
}
