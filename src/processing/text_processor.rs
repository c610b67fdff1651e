//! Statistics and previews over extracted text

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub line_count: usize,
    pub character_count: usize,
}

#[derive(Debug, Default)]
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn stats(&self, text: &str) -> TextStats {
        TextStats {
            word_count: text.unicode_words().count(),
            sentence_count: text
                .unicode_sentences()
                .filter(|s| !s.trim().is_empty())
                .count(),
            line_count: text.lines().filter(|line| !line.trim().is_empty()).count(),
            character_count: text.chars().count(),
        }
    }

    /// Collapse whitespace runs and cut at a word boundary near `max_chars`.
    pub fn preview(&self, text: &str, max_chars: usize) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() <= max_chars {
            return collapsed;
        }

        let mut end = 0;
        for (idx, word) in collapsed.split_word_bound_indices() {
            let next = idx + word.len();
            if collapsed[..next].chars().count() > max_chars {
                break;
            }
            end = next;
        }

        format!("{}...", collapsed[..end].trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let processor = TextProcessor::new();
        let stats = processor.stats("Jane Doe.\n\nRust engineer. Loves C++!\n");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.line_count, 2);
    }

    #[test]
    fn test_stats_of_empty_text() {
        assert_eq!(TextProcessor::new().stats(""), TextStats::default());
    }

    #[test]
    fn test_preview_short_text_is_unchanged() {
        let processor = TextProcessor::new();
        assert_eq!(processor.preview("Rust   engineer\n", 50), "Rust engineer");
    }

    #[test]
    fn test_preview_cuts_on_word_boundary() {
        let processor = TextProcessor::new();
        let preview = processor.preview("Senior software engineer with Rust", 20);

        assert_eq!(preview, "Senior software...");
    }
}
