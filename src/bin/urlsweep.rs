use clap::{CommandFactory, Parser};
use urlsweep::config::{CliConfig, Config};
use urlsweep::core::constants::{defaults, timeouts};
use urlsweep::core::error::{Result, SweepError};
use urlsweep::discovery::{ReadUrls, UrlListReader};
use urlsweep::reporting::logging;
use urlsweep::reporting::{
    CleanedListFormatter, CsvFormatter, FormatReport, JsonFormatter, Report, RunSummary,
    WriteToFile, Writer, aggregate,
};
use urlsweep::ui::completion::print_completions;
use urlsweep::ui::output::{self, WrittenOutputs};
use urlsweep::ui::{Cli, Commands, ProgressReporter, cli_to_config};
use urlsweep::validation::{HttpFetcher, WorkerPool};

use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_sweep(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            output::display_error(&e);
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Read the input list, fetch every URL and write the reports.
pub async fn run_sweep(cli: &Cli) -> Result<i32> {
    let started = Instant::now();
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let urls = UrlListReader.read_urls(&cli_config.input)?;
    logging::log_input_info(&cli_config.input, urls.len());

    if urls.is_empty() {
        output::display_empty_input();
        output::display_elapsed(started.elapsed());
        return Ok(0);
    }

    let pool = WorkerPool::new(config.worker_count());
    let settings = config.fetch_settings();
    output::display_start(urls.len(), pool.workers(), settings.timeout);

    let fetcher = Arc::new(HttpFetcher::new(&settings)?);
    let show_lines = !cli_config.quiet;
    let progress = ProgressReporter::new(urls.len(), show_lines && !cli_config.no_progress, show_lines);

    let results = pool
        .run(fetcher, urls, |result| {
            logging::log_fetch_result(result);
            progress.report(result);
        })
        .await;
    progress.finish_and_clear();

    let policy = config.filter_policy();
    let (report, summary) = aggregate(results, policy);

    let outputs = write_outputs(&Writer, &report, &summary, &cli_config)?;
    output::display_summary(&summary, &outputs, policy);

    let elapsed = started.elapsed();
    logging::log_run_complete(&summary, elapsed.as_millis());
    output::display_elapsed(elapsed);

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;

    if config.worker_count() > defaults::WARN_WORKERS {
        logging::log_warning(&format!(
            "Worker count of {} is quite high and may overwhelm servers.",
            config.worker_count()
        ));
    }
    if config.timeout_duration().as_secs() > timeouts::WARN_TIMEOUT_SECONDS {
        logging::log_warning(&format!(
            "Timeout of {}s is quite large.",
            config.timeout_duration().as_secs()
        ));
    }

    validate_output_paths(cli_config)?;
    Ok(config)
}

/// Two outputs pointing at the same file would overwrite each other
pub fn validate_output_paths(cli_config: &CliConfig) -> Result<()> {
    let mut outputs = vec![
        ("--csv", &cli_config.csv_output),
        ("--cleaned", &cli_config.cleaned_output),
    ];
    if let Some(ref json) = cli_config.json_output {
        outputs.push(("--json", json));
    }

    for (i, (flag, path)) in outputs.iter().enumerate() {
        if let Some((other, _)) = outputs[i + 1..].iter().find(|(_, p)| p == path) {
            return Err(SweepError::InvalidArgument(format!(
                "{flag} and {other} both point to '{}'",
                path.display()
            )));
        }
        if *path == &cli_config.input {
            return Err(SweepError::InvalidArgument(format!(
                "{flag} would overwrite the input file '{}'",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Write the CSV report, the cleaned list and the optional JSON report
pub fn write_outputs<'a>(
    writer: &dyn WriteToFile,
    report: &Report,
    summary: &RunSummary,
    cli_config: &'a CliConfig,
) -> Result<WrittenOutputs<'a>> {
    writer.write_to_file(
        &cli_config.csv_output,
        &CsvFormatter.format(report, summary)?,
    )?;
    writer.write_to_file(
        &cli_config.cleaned_output,
        &CleanedListFormatter.format(report, summary)?,
    )?;
    if let Some(ref json) = cli_config.json_output {
        writer.write_to_file(json, &JsonFormatter.format(report, summary)?)?;
    }

    Ok(WrittenOutputs {
        csv: &cli_config.csv_output,
        csv_rows: report.len(),
        cleaned: &cli_config.cleaned_output,
        json: cli_config.json_output.as_deref(),
    })
}
