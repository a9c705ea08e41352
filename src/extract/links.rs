// src/extract/links.rs
// =============================================================================
// This module extracts raw link targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so broken markup is
//   handled the way a browser would handle it
//
// The hrefs are returned exactly as written in the page. Resolving them
// against the page URL and filtering them is the crawler's job.
// =============================================================================

use scraper::{Html, Selector};

// Returns every anchor href in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = ["/docs", "#top"]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").expect("static selector is valid");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does .value() do?
//    - element is an ElementRef (reference to an HTML element)
//    - .value() gets the underlying Element
//    - .attr("href") gets the value of the href attribute
//
// 2. Why filter_map?
//    - It maps and filters in one pass: None values are dropped
//    - The selector already requires href, so every element yields Some
//
// 3. Why expect() on the selector?
//    - Selector::parse can fail if the CSS selector is invalid
//    - Our selector "a[href]" is constant, so a failure is a programmer error
// -----------------------------------------------------------------------------
