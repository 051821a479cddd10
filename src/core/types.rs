use serde::Serialize;
use std::fmt;

use crate::core::constants::{error_messages, http_status, report};

/// Outcome of the network part of a fetch.
///
/// Either the server answered with a status code (any code, including
/// 404 and 5xx) or the request failed before a status was available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// The server answered with this HTTP status code
    Http(u16),
    /// The request failed; holds a human-readable description
    NetworkError(String),
}

impl FetchStatus {
    /// Numeric status code, if the server answered
    pub fn code(&self) -> Option<u16> {
        match self {
            FetchStatus::Http(code) => Some(*code),
            FetchStatus::NetworkError(_) => None,
        }
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, FetchStatus::NetworkError(_))
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Http(code) => write!(f, "{code}"),
            FetchStatus::NetworkError(_) => write!(f, "{}", report::ERROR_TOKEN),
        }
    }
}

/// Metadata extracted from an HTML response. Every field is empty when
/// the response was not HTML or the element was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub meta_description: String,
    pub body_classes: String,
}

impl PageMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.meta_description.is_empty() && self.body_classes.is_empty()
    }
}

/// Summary of probing a single URL.
///
/// Fields are private so a result cannot be altered once a worker has
/// produced it, and so that `status` is `ERROR` exactly when `error` is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    url: String,
    status: FetchStatus,
    final_url: String,
    metadata: PageMetadata,
}

impl FetchResult {
    /// Create a result for a request that received an HTTP response.
    pub fn completed(
        url: impl Into<String>,
        status_code: u16,
        final_url: impl Into<String>,
        metadata: PageMetadata,
    ) -> Self {
        Self {
            url: url.into(),
            status: FetchStatus::Http(status_code),
            final_url: final_url.into(),
            metadata,
        }
    }

    /// Create a result for a request that failed before a status was obtained.
    ///
    /// An empty description is replaced with a generic message.
    pub fn network_error(url: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            error_messages::UNKNOWN_ERROR.to_string()
        } else {
            description
        };

        Self {
            url: url.into(),
            status: FetchStatus::NetworkError(description),
            final_url: String::new(),
            metadata: PageMetadata::default(),
        }
    }

    /// The URL exactly as it appeared in the input
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status.code()
    }

    /// URL after following redirects; empty for network errors
    pub fn final_url(&self) -> &str {
        &self.final_url
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn meta_description(&self) -> &str {
        &self.metadata.meta_description
    }

    pub fn body_classes(&self) -> &str {
        &self.metadata.body_classes
    }

    /// Failure description; empty unless the status is `ERROR`
    pub fn error(&self) -> &str {
        match &self.status {
            FetchStatus::NetworkError(description) => description,
            FetchStatus::Http(_) => "",
        }
    }

    /// The server confirmed the resource does not exist (HTTP 404)
    pub fn is_dead(&self) -> bool {
        self.status_code() == Some(http_status::NOT_FOUND)
    }

    pub fn is_network_error(&self) -> bool {
        self.status.is_network_error()
    }

    /// Flatten into the fixed report column layout
    pub fn to_row(&self) -> ReportRow<'_> {
        ReportRow {
            url: &self.url,
            status_code: self.status.to_string(),
            final_url: &self.final_url,
            title: &self.metadata.title,
            meta_description: &self.metadata.meta_description,
            body_classes: &self.metadata.body_classes,
            error: self.error(),
        }
    }
}

/// One report line in column order:
/// url, status_code, final_url, title, meta_description, body_classes, error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow<'a> {
    pub url: &'a str,
    pub status_code: String,
    pub final_url: &'a str,
    pub title: &'a str,
    pub meta_description: &'a str,
    pub body_classes: &'a str,
    pub error: &'a str,
}

impl ReportRow<'_> {
    pub fn columns(&self) -> [&str; 7] {
        [
            self.url,
            self.status_code.as_str(),
            self.final_url,
            self.title,
            self.meta_description,
            self.body_classes,
            self.error,
        ]
    }
}
