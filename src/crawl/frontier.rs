// src/crawl/frontier.rs
// =============================================================================
// Pending work and visitation bookkeeping for a single crawl.
//
// - Frontier: a LIFO stack of normalized URLs. The last link pushed is the
//   next one crawled, so newly discovered pages are explored depth-first
//   before their siblings. Pushes are NOT deduplicated.
// - VisitedTracker: every URL whose fetch was attempted. Once a URL is in
//   here it is never processed again in the same run; this is the real
//   dedup gate, checked when a URL is popped.
// - CrawlState: both of the above, owned by the traversal engine.
// =============================================================================

use std::collections::HashSet;
use url::Url;

use super::normalize::normalize_absolute;

#[derive(Debug, Default)]
pub struct Frontier {
    stack: Vec<Url>,
}

impl Frontier {
    pub fn push(&mut self, url: Url) {
        self.stack.push(url);
    }

    pub fn pop(&mut self) -> Option<Url> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct VisitedTracker {
    seen: HashSet<String>,
}

impl VisitedTracker {
    pub fn contains(&self, url: &Url) -> bool {
        self.seen.contains(url.as_str())
    }

    // Marks `url` as processed. Returns false if it already was, in which
    // case the caller must not process it again.
    pub fn mark(&mut self, url: &Url) -> bool {
        self.seen.insert(url.as_str().to_string())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

// Mutable state of one crawl run.
#[derive(Debug, Default)]
pub struct CrawlState {
    pub frontier: Frontier,
    pub visited: VisitedTracker,
}

impl CrawlState {
    // Starts a crawl with `start` as the only pending URL.
    pub fn seeded(start: Url) -> Self {
        let mut state = Self::default();
        state.frontier.push(start);
        state
    }

    // Pops URLs until one that has not been visited turns up, marking it
    // visited before returning it. None once the frontier is drained.
    //
    // Popped URLs are normalized again before the visited check; for
    // frontier entries that is a no-op.
    pub fn claim_next(&mut self) -> Option<Url> {
        while let Some(url) = self.frontier.pop() {
            let url = normalize_absolute(&url);
            if self.visited.mark(&url) {
                return Some(url);
            }
        }
        None
    }

    // Pushes `url` unless it has already been visited. Returns true if pushed.
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.frontier.push(url);
        true
    }
}
