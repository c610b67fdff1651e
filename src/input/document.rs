//! Raw uploaded document

use crate::input::file_detector::FileType;
use std::path::{Path, PathBuf};

/// Raw bytes of one uploaded file plus its declared format.
#[derive(Debug, Clone)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub file_type: FileType,
    pub source: PathBuf,
}

impl Document {
    pub fn new(bytes: Vec<u8>, file_type: FileType, source: impl Into<PathBuf>) -> Self {
        Self {
            bytes,
            file_type,
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}
