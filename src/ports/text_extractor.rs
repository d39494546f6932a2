//! Text Extractor Port - Markup to plain text, links and sections.

use crate::domain::content::Sections;

/// What the extractor pulls out of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Whitespace-normalized visible text.
    pub text: String,
    /// Same-origin absolute links, deduplicated, in document order.
    pub links: Vec<String>,
    /// Heading text → text of the siblings that follow it, in page order.
    pub sections: Sections,
}

/// Port for turning raw markup into text the categorizer can use.
pub trait TextExtractor: Send + Sync {
    /// Extracts text, links and sections from `markup` served at `base_url`.
    fn extract(&self, markup: &str, base_url: &str) -> ExtractedPage;
}
