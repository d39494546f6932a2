//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generative service clients (chat completions, mock)
//! - `storage` - Scraped-content persistence (JSON file, in-memory)
//! - `web` - Page fetching and HTML extraction

pub mod ai;
pub mod storage;
pub mod web;

pub use ai::{ChatCompletionsConfig, ChatCompletionsProvider, MockAIProvider, MockError};
pub use storage::{FileContentRepository, InMemoryContentRepository};
pub use web::{HtmlTextExtractor, HttpPageFetcher};
