//! CLI interface for the resume parser

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Extract skills, education and experience from a resume")]
#[command(long_about = "Extract skills, education and years of experience from a PDF or DOCX resume using keyword and pattern matching, and save the result as a one-row CSV file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume and save the extracted fields
    Parse {
        /// Path to resume file (PDF, DOCX)
        file: PathBuf,

        /// CSV file to overwrite with the extracted record
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        format: Option<String>,

        /// Print the full extracted text
        #[arg(short = 't', long)]
        show_text: bool,

        /// Only match keywords on word boundaries
        #[arg(long)]
        word_boundary: bool,

        /// Do not write the CSV record
        #[arg(long)]
        no_save: bool,
    },

    /// Show the most recently saved record
    Last {
        /// CSV file to read
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the skill keywords and education patterns
    Skills,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "output.format")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
