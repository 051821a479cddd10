use serde::Serialize;

use crate::core::constants::report;
use crate::core::error::Result;
use crate::core::types::ReportRow;
use crate::reporting::aggregate::{Report, RunSummary};

pub trait FormatReport {
    fn format(&self, report: &Report, summary: &RunSummary) -> Result<String>;
}

/// Comma-separated report with a header row and CRLF record terminators
#[derive(Debug, Default)]
pub struct CsvFormatter;

impl FormatReport for CsvFormatter {
    fn format(&self, report: &Report, _summary: &RunSummary) -> Result<String> {
        let mut output = String::new();
        push_record(&mut output, report::COLUMNS);

        for result in report.rows() {
            push_record(&mut output, result.to_row().columns());
        }

        Ok(output)
    }
}

fn push_record(output: &mut String, fields: [&str; 7]) {
    let record: Vec<String> = fields.iter().map(|field| escape_field(field)).collect();
    output.push_str(&record.join(","));
    output.push_str(report::CSV_LINE_TERMINATOR);
}

/// Quote a field only when it contains a delimiter, a quote or a line break
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One retained URL per line
#[derive(Debug, Default)]
pub struct CleanedListFormatter;

impl FormatReport for CleanedListFormatter {
    fn format(&self, report: &Report, _summary: &RunSummary) -> Result<String> {
        Ok(report
            .cleaned_urls()
            .iter()
            .map(|url| format!("{url}\n"))
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    rows: Vec<ReportRow<'a>>,
    summary: &'a RunSummary,
}

impl FormatReport for JsonFormatter {
    fn format(&self, report: &Report, summary: &RunSummary) -> Result<String> {
        let document = JsonReport {
            rows: report.rows().iter().map(|r| r.to_row()).collect(),
            summary,
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
