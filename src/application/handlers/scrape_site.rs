//! ScrapeSiteHandler - Builds and stores the scraped-content document.
//!
//! Fetches the main page, follows a bounded number of same-origin links,
//! categorizes the combined text and saves the result. An unreachable main
//! page yields the built-in fallback document instead of an error.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::domain::content::{ContentCategorizer, ScrapedContent};
use crate::domain::foundation::char_prefix;
use crate::ports::{ContentRepository, ContentStoreError, PageFetcher, TextExtractor};

/// Limits for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub base_url: String,
    pub max_pages: usize,
    pub request_delay: Duration,
    pub main_content_chars: usize,
}

impl ScrapeSettings {
    pub fn from_config(site: &SiteConfig) -> Self {
        Self {
            base_url: site.base_url.clone(),
            max_pages: site.max_pages,
            request_delay: site.request_delay(),
            main_content_chars: site.main_content_chars,
        }
    }
}

/// Result of a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeSiteResult {
    pub content: ScrapedContent,
    /// True when the main page failed and the built-in content was stored.
    pub used_fallback: bool,
    /// Linked pages that could not be fetched.
    pub failed_pages: usize,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to store scraped content: {0}")]
    Storage(#[from] ContentStoreError),
}

/// Handler for the scrape command.
pub struct ScrapeSiteHandler {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn TextExtractor>,
    repository: Arc<dyn ContentRepository>,
    categorizer: ContentCategorizer,
    settings: ScrapeSettings,
}

impl ScrapeSiteHandler {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn TextExtractor>,
        repository: Arc<dyn ContentRepository>,
        settings: ScrapeSettings,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            repository,
            categorizer: ContentCategorizer::new(),
            settings,
        }
    }

    pub async fn handle(&self) -> Result<ScrapeSiteResult, ScrapeError> {
        let base_url = self.settings.base_url.as_str();

        // 1. Main page, or the built-in document when it is unreachable
        let markup = match self.fetcher.fetch(base_url).await {
            Ok(markup) => markup,
            Err(err) => {
                tracing::warn!(url = base_url, error = %err, "main page unavailable, storing fallback content");
                let content = ScrapedContent::fallback();
                self.repository.save(&content).await?;
                return Ok(ScrapeSiteResult {
                    content,
                    used_fallback: true,
                    failed_pages: 0,
                });
            }
        };

        let main_page = self.extractor.extract(&markup, base_url);
        tracing::info!(links = main_page.links.len(), "main page scraped");

        // 2. Follow linked pages, skipping failures
        let mut texts = vec![main_page.text.clone()];
        let mut failed_pages = 0;
        for (index, link) in main_page.links.iter().take(self.settings.max_pages).enumerate() {
            if index > 0 && !self.settings.request_delay.is_zero() {
                tokio::time::sleep(self.settings.request_delay).await;
            }

            match self.fetcher.fetch(link).await {
                Ok(page) => {
                    tracing::debug!(url = %link, "page scraped");
                    texts.push(self.extractor.extract(&page, base_url).text);
                }
                Err(err) => {
                    tracing::warn!(url = %link, error = %err, "skipping page");
                    failed_pages += 1;
                }
            }
        }

        // 3. Categorize and store
        let followed = texts.len() - 1;
        let content = ScrapedContent {
            main_content: char_prefix(&main_page.text, self.settings.main_content_chars)
                .to_string(),
            categorized_content: self.categorizer.categorize(&texts.join(" ")),
            sections: main_page.sections,
            total_pages_scraped: u32::try_from(followed + 1).unwrap_or(u32::MAX),
            links_found: u32::try_from(main_page.links.len()).unwrap_or(u32::MAX),
        };

        self.repository.save(&content).await?;
        tracing::info!(
            pages = content.total_pages_scraped,
            failed = failed_pages,
            "scrape complete"
        );

        Ok(ScrapeSiteResult {
            content,
            used_fallback: false,
            failed_pages,
        })
    }
}
