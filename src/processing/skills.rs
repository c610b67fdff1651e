//! Skill keywords and the matcher that finds them

use crate::error::{Result, ResumeParserError};
use crate::processing::MatchStrategy;
use aho_corasick::AhoCorasick;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Skill keywords recognised in resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skill {
    Python,
    Java,
    CPlusPlus,
    Sql,
    Excel,
    MachineLearning,
    DeepLearning,
    Html,
    Css,
    JavaScript,
    React,
    Node,
    DataAnalysis,
    Ai,
    Communication,
    Leadership,
    ProjectManagement,
}

impl Skill {
    pub const ALL: [Skill; 17] = [
        Skill::Python,
        Skill::Java,
        Skill::CPlusPlus,
        Skill::Sql,
        Skill::Excel,
        Skill::MachineLearning,
        Skill::DeepLearning,
        Skill::Html,
        Skill::Css,
        Skill::JavaScript,
        Skill::React,
        Skill::Node,
        Skill::DataAnalysis,
        Skill::Ai,
        Skill::Communication,
        Skill::Leadership,
        Skill::ProjectManagement,
    ];

    /// Lowercase term searched for in the text.
    pub fn term(&self) -> &'static str {
        match self {
            Skill::Python => "python",
            Skill::Java => "java",
            Skill::CPlusPlus => "c++",
            Skill::Sql => "sql",
            Skill::Excel => "excel",
            Skill::MachineLearning => "machine learning",
            Skill::DeepLearning => "deep learning",
            Skill::Html => "html",
            Skill::Css => "css",
            Skill::JavaScript => "javascript",
            Skill::React => "react",
            Skill::Node => "node",
            Skill::DataAnalysis => "data analysis",
            Skill::Ai => "ai",
            Skill::Communication => "communication",
            Skill::Leadership => "leadership",
            Skill::ProjectManagement => "project management",
        }
    }

    /// Display label: first character upper case, the rest as in the term.
    pub fn label(&self) -> String {
        let term = self.term();
        let mut chars = term.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Skill {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Finds skill terms in lowercased text.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    skills: Vec<Skill>,
    strategy: MatchStrategy,
}

impl SkillMatcher {
    pub fn new(skills: &[Skill], strategy: MatchStrategy) -> Result<Self> {
        let patterns: Vec<&str> = skills.iter().map(|skill| skill.term()).collect();

        // Standard match kind so overlapping iteration reports every term
        let automaton = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeParserError::Processing(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self {
            automaton,
            skills: skills.to_vec(),
            strategy,
        })
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Skills whose term occurs in `lowered`, which must already be lowercase.
    pub fn find(&self, lowered: &str) -> BTreeSet<Skill> {
        let mut found = BTreeSet::new();

        for mat in self.automaton.find_overlapping_iter(lowered) {
            let skill = self.skills[mat.pattern().as_usize()];
            if found.contains(&skill) {
                continue;
            }
            if self.strategy == MatchStrategy::WordBoundary
                && !is_word_bounded(lowered, mat.start(), mat.end())
            {
                continue;
            }
            found.insert(skill);
        }

        found
    }
}

/// True when neither neighbour of `text[start..end]` is a word character.
pub(crate) fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, is_word_char) && !after.map_or(false, is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
