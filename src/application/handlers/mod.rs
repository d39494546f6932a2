//! Application handlers.
//!
//! Command handlers that orchestrate ports outside a conversation.

mod scrape_site;

pub use scrape_site::{ScrapeError, ScrapeSettings, ScrapeSiteHandler, ScrapeSiteResult};
