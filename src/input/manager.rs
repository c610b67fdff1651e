//! Input manager for loading uploads and routing them to an extractor

use crate::error::{Result, ResumeParserError};
use crate::input::document::Document;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::info;
use std::path::Path;
use tokio::fs;

/// Loads one document at a time. Nothing is cached between calls.
#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read the file and detect its declared format from the extension.
    pub async fn load(&self, path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(ResumeParserError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let bytes = fs::read(path).await?;
        info!("Loaded {} document: {} ({} bytes)", file_type, path.display(), bytes.len());

        Ok(Document::new(bytes, file_type, path))
    }

    /// Load a file and return its plain text.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let document = self.load(path).await?;
        self.extract(&document)
    }

    /// Route an already loaded document to the extractor for its format.
    pub fn extract(&self, document: &Document) -> Result<String> {
        match document.file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", document.source().display());
                PdfExtractor.extract(document)
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", document.source().display());
                DocxExtractor.extract(document)
            }
            FileType::Unknown => Err(ResumeParserError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                document.source().display()
            ))),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeParserError::UnsupportedFormat(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        let file_type = FileType::from_extension(extension);
        if !file_type.is_supported() {
            return Err(ResumeParserError::UnsupportedFormat(format!(
                "Unsupported file type .{} for: {} (expected .pdf or .docx)",
                extension,
                path.display()
            )));
        }

        Ok(file_type)
    }
}
