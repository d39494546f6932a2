//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Generation
//!
//! - `AIProvider` - Remote text generation (prompt in, text or failure out)
//!
//! ## Scraping
//!
//! - `PageFetcher` - Raw markup for a URL
//! - `TextExtractor` - Plain text, links and sections from markup
//! - `ContentRepository` - Persistence of the scraped-content document

mod ai_provider;
mod content_repository;
mod page_fetcher;
mod text_extractor;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    RequestMetadata,
};
pub use content_repository::{ContentRepository, ContentStoreError};
pub use page_fetcher::{FetchError, PageFetcher};
pub use text_extractor::{ExtractedPage, TextExtractor};
