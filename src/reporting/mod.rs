//! Aggregation and reporting
//!
//! This module filters the collected results, serializes the report
//! formats, writes them to disk and handles structured logging.

pub mod aggregate;
pub mod formatter;
pub mod logging;
pub mod writer;

// Re-export commonly used items
pub use aggregate::{Report, RunSummary, aggregate};
pub use formatter::{CleanedListFormatter, CsvFormatter, FormatReport, JsonFormatter, escape_field};
pub use writer::{WriteToFile, Writer};
