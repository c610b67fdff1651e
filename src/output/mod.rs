//! Output module
//! Presents extraction reports and persists the single-row CSV record

pub mod formatter;
pub mod report;
pub mod writer;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::ExtractionReport;
pub use writer::{CsvRecordWriter, OutputRecord};
