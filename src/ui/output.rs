//! Console output for urlsweep
//!
//! Every line is built by a `format_*` function so the wording can be
//! tested; the `display_*` functions only print.

use std::path::Path;
use std::time::Duration;

use crate::config::FilterPolicy;
use crate::core::constants::display;
use crate::core::types::{FetchResult, FetchStatus};
use crate::reporting::RunSummary;
use crate::ui::color::{Colors, colorize};

/// Shorten a title to the snippet length, counting characters
pub fn title_snippet(title: &str) -> String {
    let mut chars = title.chars();
    let snippet: String = chars.by_ref().take(display::TITLE_SNIPPET_CHARS).collect();

    if chars.next().is_some() {
        format!("{snippet}{}", display::ELLIPSIS)
    } else {
        snippet
    }
}

/// One status line for a completed fetch
pub fn format_progress_line(result: &FetchResult) -> String {
    match result.status() {
        FetchStatus::Http(_) if result.is_dead() => {
            format!("{} {}", colorize(display::SKIP_TAG, Colors::YELLOW), result.url())
        }
        FetchStatus::NetworkError(description) => format!(
            "{} {} -> {description}",
            colorize(display::ERROR_TAG, Colors::RED),
            result.url()
        ),
        FetchStatus::Http(code) => format!(
            "{} {} -> final: {} (title: {})",
            colorize(&format!("[OK {code}]"), Colors::GREEN),
            result.url(),
            result.final_url(),
            title_snippet(result.title())
        ),
    }
}

pub fn format_start(url_count: usize, workers: usize, timeout: Duration) -> String {
    format!(
        "{} Checking {url_count} URLs with {workers} workers (timeout={}s)...",
        colorize(display::INFO_TAG, Colors::CYAN),
        timeout.as_secs()
    )
}

pub fn format_empty_input() -> String {
    format!(
        "{} No URLs found in input file.",
        colorize(display::INFO_TAG, Colors::CYAN)
    )
}

pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "{} Checked {} URLs: {} ok, {} skipped (404), {} errors",
        done_tag(),
        summary.checked,
        summary.ok,
        summary.skipped,
        summary.errors
    )
}

pub fn format_csv_written(path: &Path, rows: usize) -> String {
    format!("{} CSV written to: {} (rows: {rows})", done_tag(), path.display())
}

pub fn format_cleaned_written(path: &Path) -> String {
    format!("{} Cleaned list written to: {}", done_tag(), path.display())
}

pub fn format_json_written(path: &Path) -> String {
    format!("{} JSON written to: {}", done_tag(), path.display())
}

/// Explains how network errors were treated in this run
pub fn format_policy_note(policy: FilterPolicy) -> String {
    let note = match policy {
        FilterPolicy::KeepErrors => {
            "ERROR rows (network failures) are kept in the outputs; only 404s were removed."
        }
        FilterPolicy::DropErrors => {
            "ERROR rows (network failures) and 404s were removed from the outputs."
        }
    };
    format!("{} {note}", colorize(display::NOTE_TAG, Colors::DIM))
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!(
        "{} Completed in {:.2}s",
        colorize(display::TIME_TAG, Colors::BOLD),
        elapsed.as_secs_f64()
    )
}

fn done_tag() -> String {
    colorize(display::DONE_TAG, Colors::GREEN)
}

pub fn display_start(url_count: usize, workers: usize, timeout: Duration) {
    println!("{}", format_start(url_count, workers, timeout));
}

pub fn display_empty_input() {
    println!("{}", format_empty_input());
}

/// Fatal error line on stderr, e.g. `[ERROR] File not found: urls.txt`
pub fn display_error(err: &dyn std::fmt::Display) {
    eprintln!("{} {err}", colorize(display::ERROR_TAG, Colors::RED));
}

/// Written outputs of a run, in the order they are reported
#[derive(Debug, Clone)]
pub struct WrittenOutputs<'a> {
    pub csv: &'a Path,
    pub csv_rows: usize,
    pub cleaned: &'a Path,
    pub json: Option<&'a Path>,
}

pub fn display_summary(summary: &RunSummary, outputs: &WrittenOutputs<'_>, policy: FilterPolicy) {
    println!("{}", format_summary(summary));
    println!("{}", format_csv_written(outputs.csv, outputs.csv_rows));
    println!("{}", format_cleaned_written(outputs.cleaned));
    if let Some(json) = outputs.json {
        println!("{}", format_json_written(json));
    }
    println!("{}", format_policy_note(policy));
}

pub fn display_elapsed(elapsed: Duration) {
    println!("{}", format_elapsed(elapsed));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PageMetadata;

    fn page(status: u16, title: &str) -> FetchResult {
        FetchResult::completed(
            "https://example.com",
            status,
            "https://example.com/home",
            PageMetadata {
                title: title.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_title_snippet_short_title_unchanged() {
        assert_eq!(title_snippet("Hello"), "Hello");
        assert_eq!(title_snippet(""), "");
    }

    #[test]
    fn test_title_snippet_exactly_sixty_chars() {
        let title = "a".repeat(60);
        assert_eq!(title_snippet(&title), title);
    }

    #[test]
    fn test_title_snippet_truncates_with_ellipsis() {
        let title = "b".repeat(61);
        assert_eq!(title_snippet(&title), format!("{}...", "b".repeat(60)));
    }

    #[test]
    fn test_title_snippet_counts_characters_not_bytes() {
        let title = "é".repeat(70);
        let snippet = title_snippet(&title);

        assert_eq!(snippet.chars().count(), 63);
        assert!(snippet.starts_with(&"é".repeat(60)));
    }

    #[test]
    fn test_progress_line_ok() {
        let line = format_progress_line(&page(200, "Hello"));
        assert_eq!(
            line,
            "[OK 200] https://example.com -> final: https://example.com/home (title: Hello)"
        );
    }

    #[test]
    fn test_progress_line_skip_404() {
        let line = format_progress_line(&page(404, "Not Found"));
        assert_eq!(line, "[SKIP 404] https://example.com");
    }

    #[test]
    fn test_progress_line_error() {
        let result = FetchResult::network_error("https://broken.invalid", "dns error");
        assert_eq!(
            format_progress_line(&result),
            "[ERROR] https://broken.invalid -> dns error"
        );
    }

    #[test]
    fn test_progress_line_server_error_is_ok_line() {
        let line = format_progress_line(&page(500, ""));
        assert!(line.starts_with("[OK 500] "));
        assert!(line.ends_with("(title: )"));
    }

    #[test]
    fn test_start_and_empty_lines() {
        assert_eq!(
            format_start(3, 10, Duration::from_secs(10)),
            "[INFO] Checking 3 URLs with 10 workers (timeout=10s)..."
        );
        assert_eq!(format_empty_input(), "[INFO] No URLs found in input file.");
    }

    #[test]
    fn test_summary_lines() {
        let summary = RunSummary {
            checked: 5,
            ok: 3,
            skipped: 1,
            errors: 1,
            retained: 4,
        };

        assert_eq!(
            format_summary(&summary),
            "[DONE] Checked 5 URLs: 3 ok, 1 skipped (404), 1 errors"
        );
        assert_eq!(
            format_csv_written(Path::new("output.csv"), 4),
            "[DONE] CSV written to: output.csv (rows: 4)"
        );
        assert_eq!(
            format_cleaned_written(Path::new("cleaned_urls.txt")),
            "[DONE] Cleaned list written to: cleaned_urls.txt"
        );
        assert_eq!(
            format_json_written(Path::new("r.json")),
            "[DONE] JSON written to: r.json"
        );
    }

    #[test]
    fn test_policy_note_mentions_errors() {
        assert!(format_policy_note(FilterPolicy::KeepErrors).starts_with("[NOTE] "));
        assert!(format_policy_note(FilterPolicy::KeepErrors).contains("kept"));
        assert!(format_policy_note(FilterPolicy::DropErrors).contains("removed"));
    }

    #[test]
    fn test_elapsed_two_decimals() {
        assert_eq!(
            format_elapsed(Duration::from_millis(1234)),
            "[TIME] Completed in 1.23s"
        );
    }
}
