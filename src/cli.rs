// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// a Rust struct and attributes (the #[...] things).
//
// Two modes:
// - default:      crawl, convert every page to markdown, write one file
// - --list-paths: crawl and print every discovered URL, write nothing
// =============================================================================

use crate::config::DEFAULT_TIMEOUT_SECS;
use clap::Parser;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitedown",
    version,
    about = "Crawl a website (restricted to a specific path) and save its content to a markdown file",
    long_about = "sitedown crawls every page under the starting URL's domain and path, \
                  converts each page to markdown and concatenates them into one file. \
                  With --list-paths it only lists the URLs it discovers."
)]
pub struct Cli {
    /// The starting URL to crawl (e.g. https://example.com/quickstart)
    ///
    /// Only pages on the same domain whose path starts with this URL's path
    /// are crawled.
    pub url: String,

    /// Output markdown file
    #[arg(short, long, default_value = "output.md")]
    pub output: String,

    /// Skip links whose path contains any of these substrings (case-insensitive)
    ///
    /// Example: -e /changelog /blog
    #[arg(short, long, num_args = 1.., value_name = "SUBSTR")]
    pub exclude: Vec<String>,

    /// Only list discovered URLs on stdout, one per line; no file is written
    #[arg(short, long)]
    pub list_paths: bool,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Match the subpath on whole path segments ("/docs" no longer matches "/docs-archive")
    #[arg(long)]
    pub strict_subpath: bool,

    /// Stop after this many pages have been fetched
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Print a JSON report on stdout instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Log every link decision
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    // Default log filter for tracing when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "sitedown=debug"
        } else if self.quiet {
            "sitedown=warn"
        } else {
            "sitedown=info"
        }
    }
}
