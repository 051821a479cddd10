use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::core::types::FetchResult;
use crate::reporting::aggregate::RunSummary;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // try_init: tests may initialize more than once per process
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let settings = config.fetch_settings();

    info!(
        "Configuration: workers={}, timeout={}s, max_redirects={}",
        config.worker_count(),
        settings.timeout.as_secs(),
        settings.max_redirects
    );
    info!("HTTP: user_agent={}", settings.user_agent);
    info!("Filter policy: {:?}", config.filter_policy());
}

/// Log input file information
pub fn log_input_info(path: &Path, url_count: usize) {
    info!("Read {url_count} URL(s) from {}", path.display());
}

/// Log individual results for debugging
pub fn log_fetch_result(result: &FetchResult) {
    match result.status_code() {
        Some(status) => debug!("{} -> {status} ({})", result.url(), result.final_url()),
        None => debug!("{} -> {}", result.url(), result.error()),
    }
    if !result.metadata().is_empty() {
        debug!(
            "  title={:?} description={:?} classes={:?}",
            result.title(),
            result.meta_description(),
            result.body_classes()
        );
    }
}

/// Log run completion
pub fn log_run_complete(summary: &RunSummary, duration_ms: u128) {
    if summary.errors == 0 {
        info!(
            "Run complete: {} checked, {} retained ({duration_ms}ms)",
            summary.checked, summary.retained
        );
    } else {
        warn!(
            "Run complete: {} checked, {} retained, {} network errors ({duration_ms}ms)",
            summary.checked, summary.retained, summary.errors
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
