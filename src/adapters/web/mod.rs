//! Web Adapters.
//!
//! Site access for the scrape step.
//!
//! - `HttpPageFetcher` - PageFetcher over reqwest
//! - `HtmlTextExtractor` - TextExtractor over scraper

mod html_extractor;
mod http_fetcher;

pub use html_extractor::HtmlTextExtractor;
pub use http_fetcher::HttpPageFetcher;
