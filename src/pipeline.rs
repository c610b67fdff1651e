//! Text extraction → field extraction → report, once per document

use crate::error::Result;
use crate::input::{Document, InputManager};
use crate::output::{CsvRecordWriter, ExtractionReport, OutputRecord};
use crate::processing::{FieldExtractor, MatchStrategy, TextProcessor};
use log::info;
use std::path::Path;

const PREVIEW_CHARS: usize = 160;

/// Stateless pipeline; every call starts from a freshly loaded document.
pub struct ResumePipeline {
    input: InputManager,
    extractor: FieldExtractor,
    processor: TextProcessor,
}

impl ResumePipeline {
    pub fn new(strategy: MatchStrategy) -> Result<Self> {
        Ok(Self::with_extractor(FieldExtractor::new(strategy)?))
    }

    pub fn with_extractor(extractor: FieldExtractor) -> Self {
        Self {
            input: InputManager::new(),
            extractor,
            processor: TextProcessor::new(),
        }
    }

    pub async fn load(&self, path: &Path) -> Result<Document> {
        self.input.load(path).await
    }

    /// Extract text and fields from a loaded document.
    pub fn process(&self, document: &Document, include_text: bool) -> Result<ExtractionReport> {
        let text = self.input.extract(document)?;
        info!(
            "Extracted {} characters from {}",
            text.chars().count(),
            document.source().display()
        );

        let result = self.extractor.extract(&text);
        let stats = self.processor.stats(&text);
        let report = ExtractionReport::new(document, self.extractor.strategy(), result, stats)
            .with_preview(self.processor.preview(&text, PREVIEW_CHARS));

        Ok(if include_text {
            report.with_full_text(text)
        } else {
            report
        })
    }

    /// Load and process the file at `path`.
    pub async fn run(&self, path: &Path, include_text: bool) -> Result<ExtractionReport> {
        let document = self.load(path).await?;
        self.process(&document, include_text)
    }

    /// Replace the stored record with this report's fields.
    pub fn save(&self, report: &ExtractionReport, writer: &CsvRecordWriter) -> Result<OutputRecord> {
        writer.write_result(&report.result)
    }
}
