// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a URL (last discovered link first)
// - Same-domain and same-subpath restriction
// - Case-insensitive path exclusions
// - Each normalized URL is fetched at most once per run
//
// Submodules:
// - normalize: href -> absolute, fragment-free URL
// - filter:    the three admission checks (domain, subpath, exclusions)
// - frontier:  pending stack, visited set and the state that owns both
// - engine:    the pop / fetch / extract / enqueue loop
// =============================================================================

mod engine;
mod filter;
mod frontier;
mod normalize;

pub use engine::{CrawlOutcome, Crawler, FetchFailure};
pub use filter::SubpathMatch;
pub use normalize::parse_start_url;
