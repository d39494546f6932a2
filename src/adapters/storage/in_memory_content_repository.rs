//! In-Memory Content Repository Adapter
//!
//! Keeps the scraped-content document in memory. Useful for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::content::ScrapedContent;
use crate::ports::{ContentRepository, ContentStoreError};

/// In-memory storage for one scraped-content document
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentRepository {
    content: Arc<RwLock<Option<ScrapedContent>>>,
    saves: Arc<RwLock<usize>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with `content`.
    pub fn with_content(content: ScrapedContent) -> Self {
        Self {
            content: Arc::new(RwLock::new(Some(content))),
            saves: Arc::new(RwLock::new(0)),
        }
    }

    /// Number of times `save` has been called
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn save(&self, content: &ScrapedContent) -> Result<(), ContentStoreError> {
        *self.content.write().await = Some(content.clone());
        *self.saves.write().await += 1;
        Ok(())
    }

    async fn load(&self) -> Result<Option<ScrapedContent>, ContentStoreError> {
        Ok(self.content.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let repo = InMemoryContentRepository::new();
        assert!(repo.load().await.unwrap().is_none());
        assert_eq!(repo.save_count().await, 0);
    }

    #[tokio::test]
    async fn save_replaces_previous_document() {
        let repo = InMemoryContentRepository::with_content(ScrapedContent::default());
        repo.save(&ScrapedContent::fallback()).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(ScrapedContent::fallback()));
        assert_eq!(repo.save_count().await, 1);
    }
}
