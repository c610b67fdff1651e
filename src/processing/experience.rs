//! Years-of-experience detection

use crate::error::{Result, ResumeParserError};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

const YEARS_PATTERN: &str = r"(\d+)\s+(?:years|year|yrs|yr)\s+of\s+experience";
const DIGIT_PATTERN: &str = r"^\d$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    /// Largest explicit "N years of experience" figure.
    Years(u64),
    /// "experience" appears without a number attached.
    MentionedUnspecific,
    NotMentioned,
}

impl Experience {
    pub fn years(&self) -> Option<u64> {
        match self {
            Experience::Years(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Years(n) => write!(f, "{} years", n),
            Experience::MentionedUnspecific => write!(f, "mentioned but unspecific"),
            Experience::NotMentioned => write!(f, "not mentioned"),
        }
    }
}

impl Serialize for Experience {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub struct ExperienceMatcher {
    years: Regex,
    digit: Regex,
}

impl ExperienceMatcher {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                ResumeParserError::Processing(format!("Invalid experience pattern: {}", e))
            })
        };
        Ok(Self {
            years: compile(YEARS_PATTERN)?,
            digit: compile(DIGIT_PATTERN)?,
        })
    }

    /// Classify `lowered`, which must already be lowercase.
    ///
    /// A numeric match always wins over a bare mention of "experience".
    pub fn find(&self, lowered: &str) -> Experience {
        // Digit runs that overflow u64 are skipped
        let max_years = self
            .years
            .captures_iter(lowered)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| self.parse_number(m.as_str()))
            .max();

        match max_years {
            Some(n) => Experience::Years(n),
            None if lowered.contains("experience") => Experience::MentionedUnspecific,
            None => Experience::NotMentioned,
        }
    }

    /// Decimal value of a run of digits from any script, `None` on overflow.
    fn parse_number(&self, digits: &str) -> Option<u64> {
        digits.chars().try_fold(0u64, |acc, c| {
            acc.checked_mul(10)?.checked_add(self.digit_value(c)?)
        })
    }

    /// Decimal digits are encoded as contiguous zero-to-nine runs, so a digit's
    /// value is its offset from the start of its block, modulo ten.
    fn digit_value(&self, c: char) -> Option<u64> {
        if let Some(d) = c.to_digit(10) {
            return Some(u64::from(d));
        }
        if !self.is_digit(c) {
            return None;
        }

        let mut start = c as u32;
        while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
            if !self.is_digit(prev) {
                break;
            }
            start -= 1;
        }
        Some(u64::from((c as u32 - start) % 10))
    }

    fn is_digit(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.digit.is_match(c.encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str) -> Experience {
        ExperienceMatcher::new().unwrap().find(&text.to_lowercase())
    }

    #[test]
    fn test_single_years_pattern() {
        assert_eq!(find("I have 5 years of experience in Rust").to_string(), "5 years");
    }

    #[test]
    fn test_maximum_of_several_patterns() {
        let text = "2 years of experience with SQL, 7 yrs of experience with Python";
        assert_eq!(find(text), Experience::Years(7));
        assert_eq!(find(text).to_string(), "7 years");
    }

    #[test]
    fn test_unit_variants_and_whitespace() {
        assert_eq!(find("1 year of experience"), Experience::Years(1));
        assert_eq!(find("3 YR\nof   Experience"), Experience::Years(3));
    }

    #[test]
    fn test_generic_mention() {
        let experience = find("Work Experience: Acme Corp");
        assert_eq!(experience, Experience::MentionedUnspecific);
        assert_eq!(experience.to_string(), "mentioned but unspecific");
    }

    #[test]
    fn test_not_mentioned() {
        let experience = find("Education: B.Tech");
        assert_eq!(experience, Experience::NotMentioned);
        assert_eq!(experience.to_string(), "not mentioned");
    }

    #[test]
    fn test_overflowing_number_is_ignored() {
        let text = "99999999999999999999999 years of experience";
        assert_eq!(find(text), Experience::MentionedUnspecific);

        let mixed = "99999999999999999999999 years of experience, 4 years of experience";
        assert_eq!(find(mixed), Experience::Years(4));
    }

    #[test]
    fn test_digits_from_other_scripts() {
        // Arabic-Indic five, fullwidth five, Arabic-Indic twelve
        assert_eq!(find("\u{0665} years of experience"), Experience::Years(5));
        assert_eq!(find("\u{FF15} years of experience"), Experience::Years(5));
        assert_eq!(find("\u{0661}\u{0662} yrs of experience"), Experience::Years(12));

        // Mathematical monospace seven sits in a block of five digit runs
        assert_eq!(find("\u{1D7FD} years of experience"), Experience::Years(7));

        let mixed = "3 years of experience, \u{0968}\u{0966} years of experience";
        assert_eq!(find(mixed), Experience::Years(20));
    }
}
