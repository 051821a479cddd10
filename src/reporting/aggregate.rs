//! Result aggregation
//!
//! Turns the raw results of a run into the rows that get written out, and
//! counts what happened along the way.

use serde::Serialize;

use crate::config::FilterPolicy;
use crate::core::types::FetchResult;

/// Results kept after filtering, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<FetchResult>,
}

impl Report {
    pub fn rows(&self) -> &[FetchResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Original URLs of the retained rows, same order as [`Report::rows`]
    pub fn cleaned_urls(&self) -> Vec<&str> {
        self.rows.iter().map(FetchResult::url).collect()
    }
}

/// Counts over every result of a run, retained or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub checked: usize,
    pub ok: usize,
    pub skipped: usize,
    pub errors: usize,
    pub retained: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &FetchResult) {
        self.checked += 1;
        if result.is_dead() {
            self.skipped += 1;
        } else if result.is_network_error() {
            self.errors += 1;
        } else {
            self.ok += 1;
        }
    }
}

/// Apply `policy` to `results`, keeping collection order.
///
/// 404 results never make it into the report.
pub fn aggregate(results: Vec<FetchResult>, policy: FilterPolicy) -> (Report, RunSummary) {
    let mut summary = RunSummary::default();

    let rows: Vec<FetchResult> = results
        .into_iter()
        .filter(|result| {
            summary.record(result);
            policy.retains(result)
        })
        .collect();

    summary.retained = rows.len();
    (Report { rows }, summary)
}
