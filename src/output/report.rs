//! Report structure for one extraction run

use crate::input::Document;
use crate::processing::{ExtractionResult, MatchStrategy, TextStats};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything presented to the user after parsing one resume.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub file_name: String,
    pub file_type: String,
    pub generated_at: DateTime<Utc>,
    pub match_strategy: MatchStrategy,
    pub result: ExtractionResult,
    pub text_stats: TextStats,

    /// Whitespace-collapsed opening of the text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text_preview: String,

    /// Full extracted text, only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl ExtractionReport {
    pub fn new(
        document: &Document,
        match_strategy: MatchStrategy,
        result: ExtractionResult,
        text_stats: TextStats,
    ) -> Self {
        Self {
            file_name: document.file_name(),
            file_type: document.file_type.to_string(),
            generated_at: Utc::now(),
            match_strategy,
            result,
            text_stats,
            text_preview: String::new(),
            full_text: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.text_preview = preview;
        self
    }

    pub fn with_full_text(mut self, text: String) -> Self {
        self.full_text = Some(text);
        self
    }
}
