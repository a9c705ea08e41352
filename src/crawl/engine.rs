// src/crawl/engine.rs
// =============================================================================
// This module drives the crawl, one page at a time.
//
// How it works:
// 1. Pop the most recently pushed URL from the frontier (depth-first)
// 2. Skip it if already visited, otherwise mark it visited right away so a
//    failed fetch is never retried
// 3. GET the page; on any failure log it and move on
// 4. Extract every <a href>, normalize it against the page URL and push the
//    ones the link filter admits
// 5. Fetch mode: convert the page to markdown and keep it
//    Enumerate mode: remember every extracted link, admitted or not
// 6. Repeat until the frontier is empty (or --max-pages is reached)
//
// Only one request is in flight at a time.
// =============================================================================

use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{CrawlConfig, CrawlMode};
use crate::extract::{extract_links, html_to_text};
use crate::fetch::{FetchError, FetchResponse, Fetcher};
use crate::output::PageCollector;

use super::filter::{CrawlContext, LinkFilter};
use super::frontier::CrawlState;
use super::normalize::normalize;

// A page that could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub url: String,
    pub error: FetchError,
}

// Everything a finished crawl produced
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    // Fetch mode: converted pages in fetch order
    pub pages: PageCollector,
    // Enumerate mode: every discovered URL in first-seen order
    pub discovered: IndexSet<String>,
    pub failures: Vec<FetchFailure>,
    // Number of URLs whose fetch was attempted
    pub visited: usize,
}

pub struct Crawler<F> {
    fetcher: F,
    start: Url,
    filter: LinkFilter,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    // `start` must already be normalized (see parse_start_url)
    pub fn new(fetcher: F, start: Url, config: CrawlConfig) -> Self {
        let context = CrawlContext::from_start(&start);
        let filter = LinkFilter::new(context, &config.exclusions, config.subpath);

        Self {
            fetcher,
            start,
            filter,
            config,
        }
    }

    pub async fn run(&self) -> CrawlOutcome {
        let mut state = CrawlState::seeded(self.start.clone());
        let mut outcome = CrawlOutcome::default();

        if self.config.mode == CrawlMode::Enumerate {
            outcome.discovered.insert(self.start.to_string());
        }

        info!(
            domain = self.filter.context().host(),
            subpath = self.filter.context().root_path(),
            "starting crawl at {}",
            self.start
        );

        while self.step(&mut state, &mut outcome).await {}

        if !state.frontier.is_empty() {
            info!(
                pending = state.frontier.len(),
                "page limit reached, stopping with URLs still queued"
            );
        }

        outcome.visited = state.visited.len();
        outcome
    }

    // Processes at most one page. Returns false once there is nothing left
    // to do.
    pub async fn step(&self, state: &mut CrawlState, outcome: &mut CrawlOutcome) -> bool {
        if self.limit_reached(state) {
            return false;
        }

        let Some(url) = state.claim_next() else {
            return false;
        };

        info!("Crawling: {}", url);

        let body = match self.fetch(&url).await {
            Ok(body) => body,
            Err(error) => {
                warn!(%url, %error, "failed to retrieve page");
                outcome.failures.push(FetchFailure {
                    url: url.to_string(),
                    error,
                });
                return true;
            }
        };

        for href in extract_links(&body) {
            let Some(link) = normalize(&href, &url) else {
                debug!(%href, "skipping link that cannot be crawled");
                continue;
            };

            if self.config.mode == CrawlMode::Enumerate {
                outcome.discovered.insert(link.to_string());
            }

            match self.filter.check(&link) {
                Ok(()) => {
                    if state.enqueue(link.clone()) {
                        debug!(%link, "queued");
                    }
                }
                Err(reason) => debug!(%link, ?reason, "not following"),
            }
        }

        if self.config.mode == CrawlMode::Fetch {
            outcome.pages.insert(url.as_str(), html_to_text(&body));
        }

        true
    }

    // One GET; a non-2xx status counts as a failure like any transport error
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response: FetchResponse = self.fetcher.fetch(url, self.config.timeout).await?;

        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }

        Ok(response.body)
    }

    fn limit_reached(&self, state: &CrawlState) -> bool {
        self.config
            .max_pages
            .is_some_and(|max| state.visited.len() >= max)
    }
}
