//! Heading text extraction from raw HTML.
//!
//! Parsing goes through `scraper` (html5ever), which recovers from malformed
//! markup the same way browsers do, so unclosed tags and stray end tags never
//! fail extraction.

use headscan_core::{ExtractionMode, HeadingLevel, Headings};
use scraper::{Html, Selector};

/// Extracts the trimmed text of every heading requested by `mode`, in
/// document order per level.
///
/// Text is the concatenation of all descendant text nodes, so markup nested
/// inside a heading (`<h1>Hello <em>world</em></h1>`) contributes its text.
/// Headings whose text is empty after trimming are kept as empty strings.
#[must_use]
pub fn extract_headings(html: &str, mode: ExtractionMode) -> Headings {
    let document = Html::parse_document(html);
    match mode {
        ExtractionMode::H1Only => Headings::H1Only(texts_for_level(&document, HeadingLevel::H1)),
        ExtractionMode::H1H2H3 => Headings::H1H2H3 {
            h1: texts_for_level(&document, HeadingLevel::H1),
            h2: texts_for_level(&document, HeadingLevel::H2),
            h3: texts_for_level(&document, HeadingLevel::H3),
        },
    }
}

fn texts_for_level(document: &Html, level: HeadingLevel) -> Vec<String> {
    let selector = Selector::parse(level.tag_name()).expect("heading tag is a valid selector");
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
