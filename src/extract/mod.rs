// src/extract/mod.rs
// =============================================================================
// Pure transformations of a fetched HTML body.
//
// Submodules:
// - links: Finds every <a href> target in document order
// - text:  Converts a page to markdown with links flattened to their text
//
// Neither touches the network or the crawl state, so both are tested on
// plain strings.
// =============================================================================

mod links;
mod text;

pub use links::extract_links;
pub use text::html_to_text;
