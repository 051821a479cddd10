//! URL discovery
//!
//! This module turns the input file into the list of URLs to check.

pub mod reader;

// Re-export commonly used items
pub use reader::{ReadUrls, UrlListReader, parse_url_list};
