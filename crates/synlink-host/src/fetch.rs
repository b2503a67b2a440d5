//! Resource retrieval seam.
//!
//! Fetching the visualization resource is the one genuinely asynchronous
//! collaborator of the host. The trait keeps the host testable with canned
//! fetchers; the `http` feature provides a production implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while retrieving the visualization resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("resource request returned status {status}")]
    Status {
        /// HTTP-style status code.
        status: u16,
    },

    /// The request never completed.
    #[error("resource transport failure: {0}")]
    Transport(String),
}

/// Retrieves the raw text of a visualization resource.
#[async_trait]
pub trait ResourceFetcher: Send {
    /// Fetch the resource at `url` and return its text content.
    async fn fetch(&mut self, url: &str) -> Result<String, FetchError>;
}
