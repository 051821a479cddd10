//! Page metadata extraction
//!
//! This module parses HTML responses for the fields that end up in
//! the report.

pub mod html;

pub use html::{extract_metadata, is_html_content_type};
