//! Education level patterns

use crate::error::{Result, ResumeParserError};
use crate::processing::MatchStrategy;
use regex::Regex;
use std::collections::BTreeSet;

/// Degree and schooling levels, each backed by a regex fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EducationLevel {
    BTech,
    Bachelor,
    BE,
    MTech,
    Master,
    MS,
    PhD,
    TwelfthGrade,
    TenthGrade,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 9] = [
        EducationLevel::BTech,
        EducationLevel::Bachelor,
        EducationLevel::BE,
        EducationLevel::MTech,
        EducationLevel::Master,
        EducationLevel::MS,
        EducationLevel::PhD,
        EducationLevel::TwelfthGrade,
        EducationLevel::TenthGrade,
    ];

    /// Regex fragment matched against lowercased text.
    pub fn pattern(&self) -> &'static str {
        match self {
            EducationLevel::BTech => r"b\.?tech",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::BE => r"b\.?e",
            EducationLevel::MTech => r"m\.?tech",
            EducationLevel::Master => "master",
            EducationLevel::MS => r"m\.?s",
            EducationLevel::PhD => r"ph\.?d",
            EducationLevel::TwelfthGrade => "12th",
            EducationLevel::TenthGrade => "10th",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EducationLevel::BTech => "Bachelor of Technology",
            EducationLevel::Bachelor => "Bachelor's degree",
            EducationLevel::BE => "Bachelor of Engineering",
            EducationLevel::MTech => "Master of Technology",
            EducationLevel::Master => "Master's degree",
            EducationLevel::MS => "Master of Science",
            EducationLevel::PhD => "Doctorate",
            EducationLevel::TwelfthGrade => "Higher secondary (12th)",
            EducationLevel::TenthGrade => "Secondary (10th)",
        }
    }
}

/// Collects every text fragment matching one of the education patterns.
pub struct EducationMatcher {
    patterns: Vec<Regex>,
}

impl EducationMatcher {
    pub fn new(levels: &[EducationLevel], strategy: MatchStrategy) -> Result<Self> {
        let mut patterns = Vec::with_capacity(levels.len());

        for level in levels {
            let source = match strategy {
                MatchStrategy::Substring => level.pattern().to_string(),
                MatchStrategy::WordBoundary => format!(r"\b(?:{})\b", level.pattern()),
            };
            let regex = Regex::new(&source).map_err(|e| {
                ResumeParserError::Processing(format!(
                    "Invalid education pattern {:?}: {}",
                    level, e
                ))
            })?;
            patterns.push(regex);
        }

        Ok(Self { patterns })
    }

    /// Matched fragments from `lowered`; repeats collapse into one entry.
    pub fn find(&self, lowered: &str) -> BTreeSet<String> {
        self.patterns
            .iter()
            .flat_map(|regex| regex.find_iter(lowered).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(strategy: MatchStrategy) -> EducationMatcher {
        EducationMatcher::new(&EducationLevel::ALL, strategy).unwrap()
    }

    #[test]
    fn test_repeated_degree_collapses() {
        let found = matcher(MatchStrategy::Substring).find("b.tech in cse; b.tech honours");
        assert_eq!(found.iter().filter(|m| m.as_str() == "b.tech").count(), 1);
    }

    #[test]
    fn test_spelling_variants_are_distinct_entries() {
        let found = matcher(MatchStrategy::Substring).find("btech, b.tech and ph.d, phd");
        assert!(found.contains("btech"));
        assert!(found.contains("b.tech"));
        assert!(found.contains("ph.d"));
        assert!(found.contains("phd"));
    }

    #[test]
    fn test_school_levels() {
        let found = matcher(MatchStrategy::Substring).find("completed 10th and 12th grade");
        assert!(found.contains("10th"));
        assert!(found.contains("12th"));
    }

    #[test]
    fn test_substring_fragment_hits_inside_words() {
        // "b\.?e" matches inside "member"
        let found = matcher(MatchStrategy::Substring).find("team member");
        assert!(found.contains("be"));

        let bounded = matcher(MatchStrategy::WordBoundary).find("team member");
        assert!(bounded.is_empty());
    }

    #[test]
    fn test_word_boundary_keeps_dotted_degrees() {
        let found = matcher(MatchStrategy::WordBoundary).find("master of science, m.s");
        assert!(found.contains("master"));
        assert!(found.contains("m.s"));
        assert!(!found.contains("ph.d"));
    }
}
