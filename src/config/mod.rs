//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments, and derives the immutable settings
//! that every worker receives for the duration of a run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, files, timeouts};
use crate::core::error::{Result, SweepError};
use crate::core::types::FetchResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for each HTTP request
    pub timeout: Option<u64>,

    /// Number of concurrent workers
    pub workers: Option<usize>,

    /// User-Agent header sent with every request
    pub user_agent: Option<String>,

    /// Maximum number of redirects followed per request
    pub max_redirects: Option<usize>,

    /// Keep rows whose request failed at the network level
    pub keep_errors: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            workers: Some(defaults::WORKERS),
            user_agent: None, // Falls back to defaults::USER_AGENT
            max_redirects: Some(defaults::MAX_REDIRECTS),
            keep_errors: Some(defaults::KEEP_ERRORS),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SweepError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SweepError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        for depth in 0..=files::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(depth), files::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(workers) = cli_config.workers {
            self.workers = Some(workers);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(max_redirects) = cli_config.max_redirects {
            self.max_redirects = Some(max_redirects);
        }
        if cli_config.exclude_errors {
            self.keep_errors = Some(false);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or(defaults::WORKERS)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(defaults::USER_AGENT)
    }

    pub fn filter_policy(&self) -> FilterPolicy {
        if self.keep_errors.unwrap_or(defaults::KEEP_ERRORS) {
            FilterPolicy::KeepErrors
        } else {
            FilterPolicy::DropErrors
        }
    }

    /// Freeze the network-related settings for a run
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            timeout: self.timeout_duration(),
            user_agent: self.user_agent().to_string(),
            max_redirects: self.max_redirects.unwrap_or(defaults::MAX_REDIRECTS),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(SweepError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(SweepError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(SweepError::Config(
                    "Worker count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if workers > defaults::MAX_WORKERS {
                return Err(SweepError::Config(format!(
                    "Worker count of {workers} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        if let Some(max_redirects) = self.max_redirects
            && max_redirects > defaults::MAX_REDIRECTS_LIMIT
        {
            return Err(SweepError::Config(format!(
                "Redirect limit of {max_redirects} is too high. Expected at most {}.",
                defaults::MAX_REDIRECTS_LIMIT
            )));
        }

        if let Some(ref user_agent) = self.user_agent
            && user_agent.trim().is_empty()
        {
            return Err(SweepError::Config(
                "User agent cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Network settings fixed for the whole run and handed to every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Config::default().fetch_settings()
    }
}

/// Decides which results end up in the report.
///
/// Dead links (404) are always dropped. Network failures are not dead
/// links, so by default they stay in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    #[default]
    KeepErrors,
    DropErrors,
}

impl FilterPolicy {
    pub fn retains(&self, result: &FetchResult) -> bool {
        if result.is_dead() {
            return false;
        }
        match self {
            FilterPolicy::KeepErrors => true,
            FilterPolicy::DropErrors => !result.is_network_error(),
        }
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Paths
    pub input: PathBuf,                 // --input
    pub csv_output: PathBuf,            // --csv
    pub cleaned_output: PathBuf,        // --cleaned
    pub json_output: Option<PathBuf>,   // --json

    // Run behaviour
    pub workers: Option<usize>,         // --workers
    pub timeout: Option<u64>,           // --timeout
    pub user_agent: Option<String>,     // --user-agent
    pub max_redirects: Option<usize>,   // --max-redirects
    pub exclude_errors: bool,           // --exclude-errors

    // Output
    pub quiet: bool,                    // --quiet
    pub verbose: bool,                  // --verbose
    pub no_progress: bool,              // --no-progress

    // Configuration
    pub config_file: Option<String>,    // --config
    pub no_config: bool,                // --no-config
}
