//! Content Repository Port - Persistence of scraped content.
//!
//! The scrape step writes one `ScrapedContent` document; the agent reads it at
//! startup. A missing document is not an error: `load` returns `Ok(None)` and
//! the caller decides which defaults to use.

use async_trait::async_trait;

use crate::domain::content::ScrapedContent;

/// Errors that can occur while reading or writing scraped content.
#[derive(Debug, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Failed to serialize content: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize content: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting the scraped-content document.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Save the document, replacing any previous run.
    async fn save(&self, content: &ScrapedContent) -> Result<(), ContentStoreError>;

    /// Load the document, `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<ScrapedContent>, ContentStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_cause() {
        let err = ContentStoreError::IoError("permission denied".to_string());
        assert_eq!(err.to_string(), "IO error: permission denied");

        let err = ContentStoreError::DeserializationFailed("expected value".to_string());
        assert!(err.to_string().starts_with("Failed to deserialize content"));
    }
}
