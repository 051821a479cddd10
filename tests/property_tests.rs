//! Property-based tests for urlsweep using proptest
//!
//! These tests generate random inputs to check the invariants of input
//! parsing, aggregation and report serialization.

use proptest::prelude::*;
use urlsweep::config::FilterPolicy;
use urlsweep::core::types::{FetchResult, PageMetadata};
use urlsweep::discovery::parse_url_list;
use urlsweep::reporting::{CleanedListFormatter, CsvFormatter, FormatReport, aggregate, escape_field};

/// Generate valid-ish URLs for testing
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec("[a-z]{3,10}", 1..4)
            .prop_map(|parts| format!("https://{}.com", parts.join("."))),
        (r"[a-z]{3,8}", 1024..65535u16)
            .prop_map(|(domain, port)| format!("http://{domain}:{port}")),
        (r"[a-z]{3,8}", prop::collection::vec(r"[a-z]{1,8}", 1..4))
            .prop_map(|(domain, path)| format!("https://{domain}.com/{}", path.join("/"))),
        Just("not-a-url".to_string()),
    ]
}

/// Free text that may contain CSV-special characters
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        r"[a-zA-Z ]{1,20}",
        r#"[a-z,"\n ]{1,20}"#,
    ]
}

fn result_strategy() -> impl Strategy<Value = FetchResult> {
    prop_oneof![
        (url_strategy(), prop::sample::select(vec![200u16, 301, 403, 404, 500]), text_strategy(), text_strategy())
            .prop_map(|(url, status, title, description)| {
                let final_url = url.clone();
                FetchResult::completed(
                    url,
                    status,
                    final_url,
                    PageMetadata {
                        title,
                        meta_description: description,
                        body_classes: String::new(),
                    },
                )
            }),
        (url_strategy(), r"[a-z ]{0,20}")
            .prop_map(|(url, error)| FetchResult::network_error(url, error)),
    ]
}

fn policy_strategy() -> impl Strategy<Value = FilterPolicy> {
    prop_oneof![Just(FilterPolicy::KeepErrors), Just(FilterPolicy::DropErrors)]
}

/// Split CSV text into records, honouring quoted fields
fn parse_csv_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) => in_quotes = true,
            (',', false) => record.push(std::mem::take(&mut field)),
            ('\r', false) if chars.peek() == Some(&'\n') => {
                chars.next();
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            (c, _) => field.push(c),
        }
    }

    records
}

proptest! {
    #[test]
    fn test_parse_url_list_counts_non_blank_lines(
        lines in prop::collection::vec(prop_oneof![url_strategy(), Just(String::new()), Just("   ".to_string())], 0..30)
    ) {
        let content = lines.join("\n");
        let expected = lines.iter().filter(|l| !l.trim().is_empty()).count();

        let urls = parse_url_list(&content);

        prop_assert_eq!(urls.len(), expected);
        prop_assert!(urls.iter().all(|u| !u.is_empty() && u.trim() == u));
    }

    #[test]
    fn test_aggregate_never_retains_dead_links(
        results in prop::collection::vec(result_strategy(), 0..40),
        policy in policy_strategy()
    ) {
        let total = results.len();
        let (report, summary) = aggregate(results, policy);

        prop_assert!(report.rows().iter().all(|r| !r.is_dead()));
        prop_assert_eq!(summary.checked, total);
        prop_assert_eq!(summary.ok + summary.skipped + summary.errors, total);
        prop_assert_eq!(summary.retained, report.len());
        if policy == FilterPolicy::DropErrors {
            prop_assert!(report.rows().iter().all(|r| !r.is_network_error()));
        }
    }

    #[test]
    fn test_aggregate_keeps_relative_order(
        results in prop::collection::vec(result_strategy(), 0..40)
    ) {
        let expected: Vec<String> = results
            .iter()
            .filter(|r| !r.is_dead())
            .map(|r| r.url().to_string())
            .collect();

        let (report, _) = aggregate(results, FilterPolicy::KeepErrors);

        prop_assert_eq!(report.cleaned_urls(), expected);
    }

    #[test]
    fn test_error_status_iff_error_text(result in result_strategy()) {
        let row = result.to_row();

        prop_assert_eq!(row.status_code == "ERROR", !row.error.is_empty());
        if result.is_network_error() {
            prop_assert!(row.final_url.is_empty() && row.title.is_empty());
        }
    }

    #[test]
    fn test_csv_and_cleaned_list_line_up(
        results in prop::collection::vec(result_strategy(), 0..30),
        policy in policy_strategy()
    ) {
        let (report, summary) = aggregate(results, policy);

        let csv = CsvFormatter.format(&report, &summary).unwrap();
        let cleaned = CleanedListFormatter.format(&report, &summary).unwrap();

        let records = parse_csv_records(&csv);
        prop_assert_eq!(records.len(), report.len() + 1);
        prop_assert!(records.iter().all(|r| r.len() == 7));

        let cleaned_urls: Vec<&str> = cleaned.lines().collect();
        let csv_urls: Vec<&str> = records[1..].iter().map(|r| r[0].as_str()).collect();
        prop_assert_eq!(cleaned_urls, csv_urls);

        for (record, result) in records[1..].iter().zip(report.rows()) {
            let columns = result.to_row().columns().map(String::from);
            prop_assert_eq!(record.as_slice(), columns.as_slice());
        }
    }

    #[test]
    fn test_escape_field_only_quotes_when_needed(field in r#"[a-z,"\r\n ]{0,20}"#) {
        let escaped = escape_field(&field);
        let special = field.contains([',', '"', '\r', '\n']);

        if special {
            prop_assert!(escaped.starts_with('"') && escaped.ends_with('"'));
            let inner = &escaped[1..escaped.len() - 1];
            prop_assert_eq!(inner.replace("\"\"", "\""), field);
        } else {
            prop_assert_eq!(escaped, field);
        }
    }
}
