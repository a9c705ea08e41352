// src/extract/text.rs
// =============================================================================
// Converts a page body into the markdown text written to the output file.
//
// We use the `htmd` crate for the HTML -> Markdown conversion, with two
// tweaks:
// - <script>, <style> and <noscript> are dropped entirely
// - <a> elements are replaced by their visible text, so the output never
//   contains [text](url) link syntax
// =============================================================================

use htmd::{Element, HtmlToMarkdown};
use tracing::warn;

pub fn html_to_text(html: &str) -> String {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "noscript"])
        .add_handler(vec!["a"], |element: Element| Some(element.content.to_string()))
        .build();

    match converter.convert(html) {
        Ok(markdown) => markdown,
        Err(e) => {
            warn!(error = %e, "markdown conversion failed, page content left empty");
            String::new()
        }
    }
}
