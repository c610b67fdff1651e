//! Configuration management for the resume parser

use crate::error::{Result, ResumeParserError};
use crate::processing::MatchStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CSV_PATH: &str = "parsed_resume_data.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub skill_match: MatchStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub csv_path: PathBuf,
    pub format: OutputFormat,
    pub color_output: bool,
    pub show_text: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                skill_match: MatchStrategy::Substring,
            },
            output: OutputConfig {
                csv_path: PathBuf::from(DEFAULT_CSV_PATH),
                format: OutputFormat::Console,
                color_output: true,
                show_text: false,
            },
        }
    }
}

impl Config {
    /// Load from an explicit file, writing defaults if it does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeParserError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeParserError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default location in the user config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-parser")
            .join("config.toml")
    }

    /// Set a single value by dotted key, e.g. `output.format`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "extraction.skill_match" => {
                self.extraction.skill_match = MatchStrategy::parse(value)
                    .map_err(ResumeParserError::Configuration)?;
            }
            "output.csv_path" => {
                if value.trim().is_empty() {
                    return Err(ResumeParserError::Configuration(
                        "output.csv_path cannot be empty".to_string(),
                    ));
                }
                self.output.csv_path = PathBuf::from(value);
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeParserError::Configuration)?;
            }
            "output.color_output" => {
                self.output.color_output = parse_bool(key, value)?;
            }
            "output.show_text" => {
                self.output.show_text = parse_bool(key, value)?;
            }
            _ => {
                return Err(ResumeParserError::Configuration(format!(
                    "Unknown configuration key: {}. Supported: extraction.skill_match, output.csv_path, output.format, output.color_output, output.show_text",
                    key
                )));
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ResumeParserError::Configuration(format!(
            "Invalid boolean for {}: {}",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extraction.skill_match, MatchStrategy::Substring);
        assert_eq!(config.output.csv_path, PathBuf::from("parsed_resume_data.csv"));
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_load_creates_defaults_then_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let first = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first, Config::default());

        let mut changed = first.clone();
        changed.set("extraction.skill_match", "word-boundary").unwrap();
        changed.set("output.format", "json").unwrap();
        changed.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.extraction.skill_match, MatchStrategy::WordBoundary);
        assert_eq!(reloaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = Config::default();
        assert!(config.set("scoring.weight", "1").is_err());
        assert!(config.set("output.color_output", "maybe").is_err());
        assert!(config.set("output.csv_path", "  ").is_err());

        config.set("output.show_text", "yes").unwrap();
        assert!(config.output.show_text);
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "extraction = 5").unwrap();

        match Config::load_from(&path) {
            Err(ResumeParserError::Configuration(_)) => {}
            other => panic!("expected configuration error, got {:?}", other),
        }
    }
}
