//! urlsweep checks a list of URLs concurrently and writes a report of the
//! live ones, plus a cleaned list with the dead (404) links removed.

pub mod config;
pub mod core;
pub mod discovery;
pub mod extraction;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use config::{CliConfig, Config, FetchSettings, FilterPolicy};
pub use crate::core::{FetchResult, FetchStatus, PageMetadata, ReportRow, Result, SweepError};
pub use reporting::{Report, RunSummary, aggregate};
pub use validation::{FetchUrl, HttpFetcher, WorkerPool};
