//! Field extraction: skills, education and experience from plain text

use crate::error::Result;
use crate::processing::education::{EducationLevel, EducationMatcher};
use crate::processing::experience::{Experience, ExperienceMatcher};
use crate::processing::skills::{Skill, SkillMatcher};
use crate::processing::MatchStrategy;
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

/// Fields pulled out of one resume. Each field is derived on its own and
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub skills: BTreeSet<Skill>,
    pub education: BTreeSet<String>,
    pub experience: Experience,
}

impl ExtractionResult {
    pub fn skill_labels(&self) -> Vec<String> {
        self.skills.iter().map(|skill| skill.label()).collect()
    }

    pub fn education_entries(&self) -> Vec<String> {
        self.education.iter().cloned().collect()
    }
}

/// Keyword and pattern based extractor. Built once, then used read-only.
pub struct FieldExtractor {
    skills: SkillMatcher,
    education: EducationMatcher,
    experience: ExperienceMatcher,
}

impl FieldExtractor {
    /// Extractor over the built-in keyword and pattern lists.
    pub fn new(strategy: MatchStrategy) -> Result<Self> {
        Self::with_keywords(&Skill::ALL, &EducationLevel::ALL, strategy)
    }

    pub fn with_keywords(
        skills: &[Skill],
        levels: &[EducationLevel],
        strategy: MatchStrategy,
    ) -> Result<Self> {
        Ok(Self {
            skills: SkillMatcher::new(skills, strategy)?,
            education: EducationMatcher::new(levels, strategy)?,
            experience: ExperienceMatcher::new()?,
        })
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.skills.strategy()
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        let lowered = text.to_lowercase();

        let result = ExtractionResult {
            skills: self.skills.find(&lowered),
            education: self.education.find(&lowered),
            experience: self.experience.find(&lowered),
        };

        debug!(
            "Extracted {} skills, {} education entries, experience: {}",
            result.skills.len(),
            result.education.len(),
            result.experience
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
        Senior Engineer with 6 years of experience building Python and SQL services.\n\
        Skills: React, HTML, CSS, Leadership, Communication\n\
        Education: B.Tech in Computer Science";

    #[test]
    fn test_extract_sample() {
        let extractor = FieldExtractor::new(MatchStrategy::Substring).unwrap();
        let result = extractor.extract(SAMPLE);

        for skill in [Skill::Python, Skill::Sql, Skill::React, Skill::Html, Skill::Css] {
            assert!(result.skills.contains(&skill), "missing {:?}", skill);
        }
        assert!(result.education.contains("b.tech"));
        assert_eq!(result.experience, Experience::Years(6));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = FieldExtractor::new(MatchStrategy::Substring).unwrap();
        assert_eq!(extractor.extract(SAMPLE), extractor.extract(SAMPLE));
    }

    #[test]
    fn test_skills_independent_of_keyword_order() {
        let mut reversed = Skill::ALL;
        reversed.reverse();

        let forward = FieldExtractor::new(MatchStrategy::Substring).unwrap();
        let backward =
            FieldExtractor::with_keywords(&reversed, &EducationLevel::ALL, MatchStrategy::Substring)
                .unwrap();

        let a = forward.extract(SAMPLE);
        let b = backward.extract(SAMPLE);
        assert_eq!(a.skills, b.skills);
        assert_eq!(a.skill_labels(), b.skill_labels());
    }

    #[test]
    fn test_education_deduplicates() {
        let extractor = FieldExtractor::new(MatchStrategy::Substring).unwrap();
        let result = extractor.extract("B.Tech (2016). Also B.Tech minor.");
        assert_eq!(result.education.iter().filter(|e| *e == "b.tech").count(), 1);
    }

    #[test]
    fn test_empty_text_yields_empty_fields() {
        let extractor = FieldExtractor::new(MatchStrategy::WordBoundary).unwrap();
        let result = extractor.extract("");

        assert!(result.skills.is_empty());
        assert!(result.education.is_empty());
        assert_eq!(result.experience, Experience::NotMentioned);
    }

    #[test]
    fn test_strategy_changes_skill_set() {
        let text = "Maintained the billing platform";
        let loose = FieldExtractor::new(MatchStrategy::Substring).unwrap().extract(text);
        let strict = FieldExtractor::new(MatchStrategy::WordBoundary).unwrap().extract(text);

        assert!(loose.skills.contains(&Skill::Ai));
        assert!(!strict.skills.contains(&Skill::Ai));
    }

    #[test]
    fn test_result_serializes_labels() {
        let extractor = FieldExtractor::new(MatchStrategy::WordBoundary).unwrap();
        let result = extractor.extract("C++ developer, 3 years of experience");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["skills"][0], "C++");
        assert_eq!(json["experience"], "3 years");
    }
}
