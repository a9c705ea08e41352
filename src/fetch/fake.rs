// src/fetch/fake.rs
// =============================================================================
// An in-memory website for tests. Unknown URLs answer 404.
//
// Every fetch is recorded, so tests can check which pages were requested
// and how many times.
// =============================================================================

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

use super::{FetchError, FetchResponse, Fetcher};

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Result<FetchResponse, FetchError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Ok(FetchResponse {
                status: 200,
                body: html.to_string(),
            }),
        );
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(
            url.to_string(),
            Ok(FetchResponse {
                status,
                body: String::new(),
            }),
        );
        self
    }

    pub fn error(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<'a> Fetcher for &'a FakeSite {
    async fn fetch(&self, url: &Url, _timeout: Duration) -> Result<FetchResponse, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.pages.get(url.as_str()).cloned().unwrap_or(Ok(FetchResponse {
            status: 404,
            body: String::new(),
        }))
    }
}
