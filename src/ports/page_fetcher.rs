//! Page Fetcher Port - Retrieval of raw page markup.

use async_trait::async_trait;

/// Errors raised while fetching a page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} timed out")]
    Timeout { url: String },
}

/// Port for fetching one page of the target site.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the raw markup at `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
