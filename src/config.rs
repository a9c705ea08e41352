// src/config.rs
// =============================================================================
// Settings for one crawl run, built from the command line.
//
// Keeping these in one struct (instead of passing CLI fields around) means
// the engine never sees clap types, and tests can build a config with
// struct update syntax: CrawlConfig { mode: ..., ..Default::default() }
// =============================================================================

use crate::cli::Cli;
use crate::crawl::SubpathMatch;
use std::time::Duration;

// Per-request timeout used when none is given
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = concat!("sitedown/", env!("CARGO_PKG_VERSION"));

// What the crawler does with each page it reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrawlMode {
    // Fetch pages, convert them to markdown and collect them for the output file
    #[default]
    Fetch,
    // Only list every link discovered, admitted or not
    Enumerate,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub timeout: Duration,
    pub exclusions: Vec<String>,
    pub mode: CrawlMode,
    pub subpath: SubpathMatch,
    pub user_agent: String,
    // Upper bound on fetch attempts; None crawls until the frontier is empty
    pub max_pages: Option<usize>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            exclusions: Vec::new(),
            mode: CrawlMode::Fetch,
            subpath: SubpathMatch::Literal,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pages: None,
        }
    }
}

impl CrawlConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            timeout: Duration::from_secs(cli.timeout),
            exclusions: cli.exclude.clone(),
            mode: if cli.list_paths {
                CrawlMode::Enumerate
            } else {
                CrawlMode::Fetch
            },
            subpath: if cli.strict_subpath {
                SubpathMatch::Segment
            } else {
                SubpathMatch::Literal
            },
            user_agent: cli
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_pages: cli.max_pages,
        }
    }
}
