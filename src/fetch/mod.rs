// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only contact with the network.
//
// The traversal engine talks to a `Fetcher` trait instead of reqwest
// directly. That keeps the engine testable: tests plug in an in-memory
// site, the binary plugs in `HttpFetcher`.
//
// Submodules:
// - http: reqwest-backed fetcher and the FetchError taxonomy
// - fake: in-memory site used by the tests
// =============================================================================

#[cfg(test)]
mod fake;
mod http;

#[cfg(test)]
pub use fake::FakeSite;
pub use http::{FetchError, FetchResponse, Fetcher, HttpFetcher};
