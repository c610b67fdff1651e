//! Output formatters for extraction reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ExtractionReport;
use colored::{Color, Colorize};

const NOT_FOUND: &str = "Not found";

/// Trait for formatting extraction reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ExtractionReport) -> Result<String>;
}

/// Console formatter with colors and labeled fields
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Comma-joined list, or the "Not found" placeholder when empty.
fn joined_or_placeholder(items: &[String]) -> String {
    if items.is_empty() {
        NOT_FOUND.to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_field(&self, label: &str, value: &str, found: bool) -> String {
        let label = if self.use_colors {
            format!("{}:", label).bold().to_string()
        } else {
            format!("{}:", label)
        };
        let color = if found { Color::Cyan } else { Color::BrightBlack };
        format!("{} {}\n", label, self.colorize(value, color))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ExtractionReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&self.format_header("📄 Extracted Information", 1));
        output.push_str(&format!(
            "File: {} ({}) | {} words | matching: {}\n\n",
            report.file_name, report.file_type, report.text_stats.word_count, report.match_strategy
        ));

        let skills = result.skill_labels();
        output.push_str(&self.format_field("Skills", &joined_or_placeholder(&skills), !skills.is_empty()));

        let education = result.education_entries();
        output.push_str(&self.format_field(
            "Education",
            &joined_or_placeholder(&education),
            !education.is_empty(),
        ));

        output.push_str(&self.format_field(
            "Experience",
            &result.experience.to_string(),
            result.experience.years().is_some(),
        ));

        match &report.full_text {
            Some(text) => {
                output.push_str(&self.format_header("Full Extracted Text", 2));
                output.push_str(text);
                if !text.ends_with('\n') {
                    output.push('\n');
                }
            }
            None if !report.text_preview.is_empty() => {
                output.push_str(&format!(
                    "\n{} {}\n",
                    self.colorize("Preview:", Color::BrightBlack),
                    self.colorize(&report.text_preview, Color::BrightBlack)
                ));
            }
            None => {}
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ExtractionReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ExtractionReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str("# 📄 Extracted Information\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **File:** `{}` ({}) | **Matching:** {}\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.file_name,
                report.file_type,
                report.match_strategy
            ));
        }

        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        output.push_str(&format!("| Skills | {} |\n", joined_or_placeholder(&result.skill_labels())));
        output.push_str(&format!(
            "| Education | {} |\n",
            joined_or_placeholder(&result.education_entries())
        ));
        output.push_str(&format!("| Experience | {} |\n", result.experience));

        if let Some(text) = &report.full_text {
            output.push_str("\n<details>\n<summary>Full Extracted Text</summary>\n\n```text\n");
            output.push_str(text);
            if !text.ends_with('\n') {
                output.push('\n');
            }
            output.push_str("```\n\n</details>\n");
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &ExtractionReport, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_report(report)
    }
}
