//! Read-only content lookup used while serving conversations.

use crate::domain::foundation::{ResponseTopic, Topic};

use super::scraped_content::ScrapedContent;

/// Immutable view over one scrape run.
///
/// Built once and shared between sessions behind an `Arc`; there are no
/// mutating methods.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    content: ScrapedContent,
}

impl ContentStore {
    pub fn new(content: ScrapedContent) -> Self {
        Self { content }
    }

    /// Store with every field empty, used when no scrape artifact exists.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Supporting text for one bucket, sentences joined by a space.
    ///
    /// A bucket absent from the document falls back to the main content.
    pub fn content_for(&self, topic: Topic) -> String {
        match self.content.categorized_content.get(&topic) {
            Some(sentences) => sentences.join(" "),
            None => self.content.main_content.clone(),
        }
    }

    /// Supporting text for a general query over the whole site: main text
    /// then sections in page order.
    pub fn general_content(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.content.main_content.trim().is_empty() {
            parts.push(self.content.main_content.trim());
        }
        parts.extend(
            self.content
                .sections
                .bodies()
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        );

        if parts.is_empty() {
            return Topic::all()
                .iter()
                .filter_map(|t| self.content.categorized_content.get(t))
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
        }

        parts.join(" ")
    }

    /// Supporting text for whatever a response is about.
    pub fn content_for_response(&self, topic: ResponseTopic) -> String {
        match topic {
            ResponseTopic::Bucket(topic) => self.content_for(topic),
            ResponseTopic::General => self.general_content(),
        }
    }
}
