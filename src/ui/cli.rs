// Command-line interface definitions and parsing for urlsweep

use crate::config::CliConfig;
use crate::core::constants::files;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Files
    /// Text file with one URL per line
    #[arg(short = 'i', long, value_name = "PATH", default_value = files::DEFAULT_INPUT, help_heading = "Files")]
    pub input: PathBuf,

    /// Where to write the CSV report
    #[arg(short = 'c', long, value_name = "PATH", default_value = files::DEFAULT_CSV, help_heading = "Files")]
    pub csv: PathBuf,

    /// Where to write the cleaned URL list
    #[arg(short = 'o', long, value_name = "PATH", default_value = files::DEFAULT_CLEANED, help_heading = "Files")]
    pub cleaned: PathBuf,

    /// Also write a JSON report
    #[arg(long, value_name = "PATH", help_heading = "Files")]
    pub json: Option<PathBuf>,

    // Core Options
    /// Number of concurrent workers (default: 10)
    #[arg(short = 'w', long, value_name = "COUNT", help_heading = "Core Options")]
    pub workers: Option<usize>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(short = 't', long, value_name = "SECONDS", help_heading = "Core Options")]
    pub timeout: Option<u64>,

    /// Leave network errors out of the report
    #[arg(long, help_heading = "Core Options")]
    pub exclude_errors: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    /// Maximum number of redirects to follow (default: 10)
    #[arg(long, value_name = "COUNT", help_heading = "Network")]
    pub max_redirects: Option<usize>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        input: cli.input.clone(),
        csv_output: cli.csv.clone(),
        cleaned_output: cli.cleaned.clone(),
        json_output: cli.json.clone(),
        workers: cli.workers,
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        max_redirects: cli.max_redirects,
        exclude_errors: cli.exclude_errors,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
