use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::{Result, SweepError};

/// Source of the URLs to check.
pub trait ReadUrls {
    fn read_urls(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reads a plain-text list with one URL per line.
#[derive(Default, Debug)]
pub struct UrlListReader;

impl ReadUrls for UrlListReader {
    fn read_urls(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SweepError::FileNotFound(path.display().to_string()),
            _ => SweepError::InvalidInput(format!(
                "Could not read '{}': {}",
                path.display(),
                e
            )),
        })?;

        Ok(parse_url_list(&content))
    }
}

/// Split list content into URLs.
///
/// Each line is trimmed and blank lines are skipped. Duplicates are kept and
/// no syntax check is made; a malformed URL fails later as a network error.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
