//! File-based Content Repository Adapter
//!
//! Stores the scraped-content document as pretty-printed JSON at a single
//! path, replacing the file on every scrape run.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::content::{ContentStore, ScrapedContent};
use crate::ports::{ContentRepository, ContentStoreError};

/// JSON file holding the latest scrape run.
#[derive(Debug, Clone)]
pub struct FileContentRepository {
    path: PathBuf,
}

impl FileContentRepository {
    /// Create a repository backed by `path`
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileContentRepository::new("scraped_content.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document into a [`ContentStore`] for serving.
    ///
    /// A missing or unreadable file is logged and yields an empty store.
    pub async fn load_store(&self) -> ContentStore {
        match self.load().await {
            Ok(Some(content)) => ContentStore::new(content),
            Ok(None) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "no scraped content found, run `aryma-agent scrape` first"
                );
                ContentStore::empty()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not read scraped content, starting empty"
                );
                ContentStore::empty()
            }
        }
    }
}

#[async_trait]
impl ContentRepository for FileContentRepository {
    async fn save(&self, content: &ScrapedContent) -> Result<(), ContentStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ContentStoreError::IoError(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(content)
            .map_err(|e| ContentStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| ContentStoreError::IoError(e.to_string()))?;

        tracing::info!(path = %self.path.display(), "saved scraped content");
        Ok(())
    }

    async fn load(&self) -> Result<Option<ScrapedContent>, ContentStoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ContentStoreError::IoError(e.to_string())),
        };

        let content = serde_json::from_str(&json)
            .map_err(|e| ContentStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(content))
    }
}
