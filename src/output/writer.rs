//! Single-row CSV persistence of the latest extraction

use crate::error::{Result, ResumeParserError};
use crate::processing::ExtractionResult;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::{self, Permissions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The one row stored on disk for the most recently parsed resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Experience")]
    pub experience: String,
}

impl OutputRecord {
    pub fn from_result(result: &ExtractionResult) -> Self {
        Self {
            skills: result.skill_labels().join(", "),
            education: result.education_entries().join(", "),
            experience: result.experience.to_string(),
        }
    }
}

impl From<&ExtractionResult> for OutputRecord {
    fn from(result: &ExtractionResult) -> Self {
        Self::from_result(result)
    }
}

/// Overwrites a CSV file with a header and exactly one record.
///
/// The record is written to a temporary file next to the target and renamed
/// over it, so readers never observe a partial file and the last writer wins.
#[derive(Debug, Clone)]
pub struct CsvRecordWriter {
    path: PathBuf,
}

impl CsvRecordWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, record: &OutputRecord) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut staged = NamedTempFile::new_in(&dir).map_err(|e| self.write_failure(e))?;
        {
            let mut writer = csv::Writer::from_writer(staged.as_file_mut());
            writer.serialize(record).map_err(|e| self.write_failure(e))?;
            writer.flush().map_err(|e| self.write_failure(e))?;
        }
        debug!("Staged output record at {}", staged.path().display());

        let permissions = self.target_permissions(&staged).map_err(|e| self.write_failure(e))?;
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| self.write_failure(e))?;

        staged
            .persist(&self.path)
            .map_err(|e| self.write_failure(e.error))?;

        info!("Saved extracted record to {}", self.path.display());
        Ok(())
    }

    pub fn write_result(&self, result: &ExtractionResult) -> Result<OutputRecord> {
        let record = OutputRecord::from_result(result);
        self.write(&record)?;
        Ok(record)
    }

    /// The stored record, or `None` when nothing has been saved yet.
    pub fn read(&self) -> Result<Option<OutputRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| self.read_failure(e))?;
        match reader.deserialize::<OutputRecord>().next() {
            Some(record) => Ok(Some(record.map_err(|e| self.read_failure(e))?)),
            None => Ok(None),
        }
    }

    /// Keep the mode of the file being replaced; new files get 0644.
    fn target_permissions(&self, staged: &NamedTempFile) -> std::io::Result<Permissions> {
        match fs::metadata(&self.path) {
            Ok(existing) => Ok(existing.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                #[allow(unused_mut)]
                let mut permissions = staged.as_file().metadata()?.permissions();
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    permissions.set_mode(0o644);
                }
                Ok(permissions)
            }
            Err(e) => Err(e),
        }
    }

    fn write_failure(&self, err: impl std::fmt::Display) -> ResumeParserError {
        ResumeParserError::WriteFailure(format!("{}: {}", self.path.display(), err))
    }

    fn read_failure(&self, err: impl std::fmt::Display) -> ResumeParserError {
        ResumeParserError::InvalidInput(format!(
            "Unreadable output record {}: {}",
            self.path.display(),
            err
        ))
    }
}
