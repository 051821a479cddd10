//! HTML metadata extraction
//!
//! Pulls the page title, description and body classes out of a raw
//! response body using CSS selectors.

use scraper::{ElementRef, Html, Selector};

use crate::core::types::PageMetadata;

/// Check whether a declared `Content-Type` describes an HTML document
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}

/// Extract metadata from a decoded HTML document.
///
/// Missing elements produce empty strings.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    PageMetadata {
        title: extract_title(&document),
        meta_description: extract_meta_description(&document),
        body_classes: extract_body_classes(&document),
    }
}

/// Text content of the first `<title>` element, trimmed
fn extract_title(document: &Html) -> String {
    first_element(document, "title")
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// `<meta name="description">`, falling back to `<meta property="og:description">`
fn extract_meta_description(document: &Html) -> String {
    let description = meta_content(document, "meta[name]", "name", "description");
    if !description.is_empty() {
        return description;
    }

    meta_content(document, "meta[property]", "property", "og:description")
}

/// Content of the first meta tag whose `attribute` equals `expected`
/// (ASCII case-insensitive)
fn meta_content(document: &Html, selector: &str, attribute: &str, expected: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };

    document
        .select(&selector)
        .find(|el| {
            el.value()
                .attr(attribute)
                .is_some_and(|value| value.trim().eq_ignore_ascii_case(expected))
        })
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// `class` attribute of `<body>` in source order, whitespace collapsed
fn extract_body_classes(document: &Html) -> String {
    first_element(document, "body")
        .and_then(|el| el.value().attr("class"))
        .map(|classes| classes.split_ascii_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn first_element<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}
