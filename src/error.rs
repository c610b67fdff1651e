//! Error handling for the resume parser

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Document could not be decoded: {0}")]
    DocumentCorrupt(String),

    #[error("Failed to write output: {0}")]
    WriteFailure(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl ResumeParserError {
    /// Errors the user can recover from without restarting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ResumeParserError::WriteFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, ResumeParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_write_failure_is_recoverable() {
        assert!(ResumeParserError::WriteFailure("read-only".into()).is_recoverable());
        assert!(!ResumeParserError::DocumentCorrupt("bad zip".into()).is_recoverable());
        assert!(!ResumeParserError::UnsupportedFormat("x.txt".into()).is_recoverable());
    }

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = ResumeParserError::UnsupportedFormat("resume.txt".into());
        assert_eq!(err.to_string(), "File format not supported: resume.txt");
    }
}
