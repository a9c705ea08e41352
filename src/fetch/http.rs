// src/fetch/http.rs
// =============================================================================
// This module performs the HTTP GET for each page the crawler visits.
//
// Key functionality:
// - One GET per page, bounded by a per-request timeout
// - Transport failures are categorized into a FetchError (timeout, DNS,
//   connection refused, redirect loop, ...)
// - Non-2xx responses are returned with their status; deciding that they
//   are failures is the engine's job
//
// Nothing here retries. A failed fetch is reported once and the crawl moves on.
//
// Rust concepts:
// - Traits: `Fetcher` is the seam between the engine and the network
// - async-trait: Lets trait methods be async
// - thiserror: Derives Display/Error for our error enum
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

// Maximum redirects followed before giving up on a page
const MAX_REDIRECTS: usize = 10;

// A response that made it back from the server
//
// The body is only read for successful responses; for any other status it
// is left empty since no content is ever emitted for a failed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Why a page could not be fetched
//
// Serialized for the JSON report as {"kind": "status", "detail": 500}
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("could not resolve hostname")]
    Dns,
    #[error("connection failed")]
    Connect,
    #[error("too many redirects")]
    TooManyRedirects,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("{0}")]
    Other(String),
}

// Anything that can GET a page
//
// Implementations must not retry: the engine relies on one call per URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<FetchResponse, FetchError>;
}

// The real fetcher, backed by a reused reqwest client (connection pooling)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Ok(FetchResponse {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        Ok(FetchResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// Categorizes reqwest errors into our taxonomy
//
// reqwest doesn't expose a DNS flag, so DNS failures are recognized from the
// connect error's message.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        return FetchError::Timeout;
    }
    if error.is_redirect() {
        return FetchError::TooManyRedirects;
    }

    let message = format!("{:?}", error).to_lowercase();

    if error.is_connect() {
        if message.contains("dns") || message.contains("failed to lookup address") {
            FetchError::Dns
        } else {
            FetchError::Connect
        }
    } else {
        FetchError::Other(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new("sitedown-test").unwrap()
    }

    fn page_url(server: &MockServer, page: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), page)).unwrap()
    }

    #[test]
    fn test_response_success_range() {
        let response = |status| FetchResponse {
            status,
            body: String::new(),
        };

        assert!(response(204).is_success());
        assert!(!response(304).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/docs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Docs</h1>"))
            .mount(&server)
            .await;

        let response = fetcher()
            .fetch(&page_url(&server, "/docs"), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "<h1>Docs</h1>");
    }

    #[tokio::test]
    async fn test_fetch_server_error_returns_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let response = fetcher()
            .fetch(&page_url(&server, "/broken"), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let result = fetcher()
            .fetch(&page_url(&server, "/slow"), Duration::from_millis(100))
            .await;

        assert_eq!(result, Err(FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Port 1 is reserved and nothing listens on it in test environments
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let result = fetcher().fetch(&url, Duration::from_secs(5)).await;

        assert_eq!(result, Err(FetchError::Connect));
    }
}
