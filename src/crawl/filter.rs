// src/crawl/filter.rs
// =============================================================================
// This module decides which discovered links the crawler may follow.
//
// Three independent checks, all run on the normalized link:
// 1. Same domain:    the link stays on the start URL's host
// 2. Within subpath: the link's path starts with the start URL's path
// 3. Not excluded:   the link's path contains none of the --exclude substrings
//
// A link is admitted only when all three pass. Exclusion always wins over
// subpath inclusion because every check must pass.
//
// Rust concepts:
// - Structs holding immutable context computed once per crawl
// - Enums for configuration choices (literal vs segment-aware matching)
// - Iterator adapters (any) for substring matching
// =============================================================================

use percent_encoding::percent_decode_str;
use url::Url;

// How the subpath check compares paths
//
// Literal is a raw string prefix: a root path of "/doc" also admits "/docs2".
// Segment only admits the root path itself or paths below it ("/doc/...").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubpathMatch {
    #[default]
    Literal,
    Segment,
}

// The root domain and subpath of a crawl
//
// Computed once from the start URL and never changed during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlContext {
    host: String,
    port: Option<u16>,
    root_path: String,
}

impl CrawlContext {
    // Builds the context from an already-validated start URL
    pub fn from_start(start: &Url) -> Self {
        Self {
            host: start.host_str().unwrap_or_default().to_string(),
            port: start.port(),
            root_path: start.path().to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    // True when the subpath check is a no-op
    fn is_unrestricted(&self) -> bool {
        self.root_path.is_empty() || self.root_path == "/"
    }
}

// The three admission checks bundled together
#[derive(Debug, Clone)]
pub struct LinkFilter {
    context: CrawlContext,
    exclusions: Vec<String>,
    subpath: SubpathMatch,
}

// Why a link was not admitted (used for debug logging and tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OtherDomain,
    OutsideSubpath,
    Excluded,
}

impl LinkFilter {
    // Exclusion entries are lower-cased once here. Blank entries are dropped
    // since "" is a substring of every path; the rest are kept as given.
    pub fn new(context: CrawlContext, exclusions: &[String], subpath: SubpathMatch) -> Self {
        let exclusions = exclusions
            .iter()
            .filter(|e| !e.trim().is_empty())
            .map(|e| e.to_lowercase())
            .collect();

        Self {
            context,
            exclusions,
            subpath,
        }
    }

    pub fn context(&self) -> &CrawlContext {
        &self.context
    }

    // Runs all three checks, reporting the first one that fails
    pub fn check(&self, link: &Url) -> Result<(), Rejection> {
        if !self.is_same_domain(link) {
            return Err(Rejection::OtherDomain);
        }
        if !self.is_within_subpath(link) {
            return Err(Rejection::OutsideSubpath);
        }
        if self.is_excluded(link) {
            return Err(Rejection::Excluded);
        }
        Ok(())
    }

    // A link with no host inherits the current page's host, so it counts as
    // same-domain.
    pub fn is_same_domain(&self, link: &Url) -> bool {
        match link.host_str() {
            None => true,
            Some(host) => host == self.context.host && link.port() == self.context.port,
        }
    }

    pub fn is_within_subpath(&self, link: &Url) -> bool {
        if self.context.is_unrestricted() {
            return true;
        }

        let root = self.context.root_path.as_str();
        let path = link.path();

        match self.subpath {
            SubpathMatch::Literal => path.starts_with(root),
            SubpathMatch::Segment => {
                if root.ends_with('/') {
                    path.starts_with(root)
                } else {
                    path == root
                        || path
                            .strip_prefix(root)
                            .is_some_and(|rest| rest.starts_with('/'))
                }
            }
        }
    }

    pub fn is_excluded(&self, link: &Url) -> bool {
        if self.exclusions.is_empty() {
            return false;
        }

        // Match against the path as written, not its percent-encoded form
        let path = percent_decode_str(link.path())
            .decode_utf8_lossy()
            .to_lowercase();
        self.exclusions.iter().any(|e| path.contains(e.as_str()))
    }
}
