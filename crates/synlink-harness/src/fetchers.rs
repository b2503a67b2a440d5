//! Canned resource fetchers.

use std::collections::HashMap;

use async_trait::async_trait;
use synlink_host::{FetchError, ResourceFetcher};

/// Serves resources from an in-memory map; unknown URLs answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    resources: HashMap<String, String>,
}

impl StaticFetcher {
    /// Create an empty fetcher (every fetch answers 404).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource body for `url`.
    #[must_use]
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.resources.insert(url.to_owned(), body.to_owned());
        self
    }
}

#[async_trait]
impl ResourceFetcher for StaticFetcher {
    async fn fetch(&mut self, url: &str) -> Result<String, FetchError> {
        self.resources
            .get(url)
            .cloned()
            .ok_or(FetchError::Status { status: 404 })
    }
}

/// Always fails with a fixed error.
#[derive(Debug, Clone)]
pub struct FailingFetcher {
    error: FetchError,
}

impl FailingFetcher {
    /// Fail every fetch with a non-success status.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self { error: FetchError::Status { status } }
    }

    /// Fail every fetch with a transport error.
    #[must_use]
    pub fn transport(message: &str) -> Self {
        Self { error: FetchError::Transport(message.to_owned()) }
    }
}

#[async_trait]
impl ResourceFetcher for FailingFetcher {
    async fn fetch(&mut self, _url: &str) -> Result<String, FetchError> {
        Err(self.error.clone())
    }
}
