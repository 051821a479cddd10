/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// HTTP status code constants
pub mod http_status {
    /// HTTP 404 Not Found - the only status treated as a dead link
    pub const NOT_FOUND: u16 = 404;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Largest accepted timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Timeouts above this trigger a CLI warning (1 hour)
    pub const WARN_TIMEOUT_SECONDS: u64 = 3600;
}

/// Default configuration values
pub mod defaults {
    /// Default number of concurrent workers
    pub const WORKERS: usize = 10;
    /// Largest accepted worker count
    pub const MAX_WORKERS: usize = 1000;
    /// Worker counts above this trigger a CLI warning
    pub const WARN_WORKERS: usize = 100;
    /// Default number of redirects followed per request
    pub const MAX_REDIRECTS: usize = 10;
    /// Largest accepted redirect limit
    pub const MAX_REDIRECTS_LIMIT: usize = 50;
    /// Network failures are kept in the report unless configured otherwise
    pub const KEEP_ERRORS: bool = true;
    /// Identifying user agent sent with every request
    pub const USER_AGENT: &str = concat!(
        "Mozilla/5.0 (compatible; ",
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION"),
        ")"
    );
}

/// File path defaults
pub mod files {
    /// Default input file with one URL per line
    pub const DEFAULT_INPUT: &str = "urls.txt";
    /// Default CSV report path
    pub const DEFAULT_CSV: &str = "output.csv";
    /// Default cleaned URL list path
    pub const DEFAULT_CLEANED: &str = "cleaned_urls.txt";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".urlsweep.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Report layout constants
pub mod report {
    /// CSV header columns, in output order
    pub const COLUMNS: [&str; 7] = [
        "url",
        "status_code",
        "final_url",
        "title",
        "meta_description",
        "body_classes",
        "error",
    ];
    /// Status token rendered for network failures
    pub const ERROR_TOKEN: &str = "ERROR";
    /// CSV record terminator
    pub const CSV_LINE_TERMINATOR: &str = "\r\n";
}

/// Error message constants
pub mod error_messages {
    /// Fallback when an error renders to an empty string
    pub const UNKNOWN_ERROR: &str = "Unknown error";
    /// Prefix for a worker task that did not complete
    pub const WORKER_FAILED: &str = "worker task failed";
}

/// Display and formatting constants
pub mod display {
    /// Number of title characters shown in an OK progress line
    pub const TITLE_SNIPPET_CHARS: usize = 60;
    /// Marker appended to truncated titles
    pub const ELLIPSIS: &str = "...";
    /// Tag for informational lines
    pub const INFO_TAG: &str = "[INFO]";
    /// Tag for dead links
    pub const SKIP_TAG: &str = "[SKIP 404]";
    /// Tag for network failures
    pub const ERROR_TAG: &str = "[ERROR]";
    /// Tag for the end-of-run summary
    pub const DONE_TAG: &str = "[DONE]";
    /// Tag for policy notes
    pub const NOTE_TAG: &str = "[NOTE]";
    /// Tag for the elapsed time line
    pub const TIME_TAG: &str = "[TIME]";
}
