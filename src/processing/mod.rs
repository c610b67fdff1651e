//! Field extraction from resume text

pub mod education;
pub mod experience;
pub mod extractor;
pub mod skills;
pub mod text_processor;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use education::EducationLevel;
pub use experience::Experience;
pub use extractor::{ExtractionResult, FieldExtractor};
pub use skills::Skill;
pub use text_processor::{TextProcessor, TextStats};

/// How keyword and pattern hits are accepted in lowercased text.
///
/// `Substring` accepts a hit anywhere, so "ai" is found inside "maintained".
/// `WordBoundary` rejects hits glued to a letter, digit or underscore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchStrategy {
    #[default]
    Substring,
    WordBoundary,
}

impl MatchStrategy {
    pub fn parse(value: &str) -> std::result::Result<Self, String> {
        match value.to_lowercase().replace(['-', '_'], "").as_str() {
            "substring" => Ok(MatchStrategy::Substring),
            "wordboundary" | "word" => Ok(MatchStrategy::WordBoundary),
            _ => Err(format!(
                "Invalid match strategy: {}. Supported: substring, word-boundary",
                value
            )),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Substring => write!(f, "substring"),
            MatchStrategy::WordBoundary => write!(f, "word-boundary"),
        }
    }
}
