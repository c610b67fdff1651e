//! Resume parser: extract skills, education and experience from PDF or DOCX resumes

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_parser::cli::{self, Cli, Commands, ConfigAction};
use resume_parser::config::{Config, OutputFormat};
use resume_parser::error::{Result, ResumeParserError};
use resume_parser::output::{CsvRecordWriter, ReportGenerator};
use resume_parser::pipeline::ResumePipeline;
use resume_parser::processing::{EducationLevel, MatchStrategy, Skill};
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    // Execute command
    let outcome = run_command(cli.command, config, &config_path)
        .await
        .context("Command failed");
    if let Err(e) = outcome {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_from(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Parse {
            file,
            output,
            format,
            show_text,
            word_boundary,
            no_save,
        } => {
            cli::validate_file_extension(&file, &["pdf", "docx"])
                .map_err(|e| ResumeParserError::UnsupportedFormat(format!("{}: {}", file.display(), e)))?;

            let output_format = match format {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeParserError::InvalidInput)?,
                None => config.output.format,
            };

            let strategy = if word_boundary {
                MatchStrategy::WordBoundary
            } else {
                config.extraction.skill_match
            };

            let csv_path = output.unwrap_or_else(|| config.output.csv_path.clone());
            let include_text = show_text || config.output.show_text;

            info!("Parsing {} with {} matching", file.display(), strategy);
            let pipeline = ResumePipeline::new(strategy)?;

            let spinner = decode_spinner(&file);
            let report = match pipeline.run(&file, include_text).await {
                Ok(report) => {
                    spinner.finish_and_clear();
                    report
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    return Err(e);
                }
            };

            let generator = ReportGenerator::new(config.output.color_output);
            println!("{}", generator.generate(&report, output_format)?);

            if no_save {
                info!("Skipping CSV output (--no-save)");
                return Ok(());
            }

            let writer = CsvRecordWriter::new(&csv_path);
            match pipeline.save(&report, &writer) {
                Ok(_) => {
                    if output_format == OutputFormat::Console {
                        println!("✅ Extracted info saved to {}", csv_path.display());
                    }
                }
                Err(e) if e.is_recoverable() => {
                    // The fields were already shown; the save is retryable
                    warn!("{}", e);
                    eprintln!(
                        "{} {}",
                        "⚠️  Could not save extracted info:".yellow(),
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Commands::Last { output } => {
            let csv_path = output.unwrap_or_else(|| config.output.csv_path.clone());
            let writer = CsvRecordWriter::new(&csv_path);

            match writer.read()? {
                Some(record) => {
                    println!("📄 Last saved record ({})\n", csv_path.display());
                    println!("Skills: {}", not_found_if_empty(&record.skills));
                    println!("Education: {}", not_found_if_empty(&record.education));
                    println!("Experience: {}", record.experience);
                }
                None => {
                    println!("⚠️  No record saved at {}", csv_path.display());
                }
            }
        }

        Commands::Skills => {
            println!("🔤 Skill keywords ({} matching by default)\n", config.extraction.skill_match);
            for skill in Skill::ALL {
                println!("  • {} (\"{}\")", skill.label(), skill.term());
            }

            println!("\n🎓 Education patterns\n");
            for level in EducationLevel::ALL {
                println!("  • {} ({})", level.pattern(), level.description());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Skill Matching: {}", config.extraction.skill_match);
                println!("CSV Output: {}", config.output.csv_path.display());
                println!("Output Format: {:?}", config.output.format);
                println!("Color Output: {}", config.output.color_output);
                println!("Show Full Text: {}", config.output.show_text);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut updated = config;
                updated.set(&key, &value)?;
                updated.save_to(config_path)?;
                println!("🔧 Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn decode_spinner(file: &Path) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(format!("Reading {}...", file.display()));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn not_found_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "Not found"
    } else {
        value
    }
}
