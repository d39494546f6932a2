//! Content Domain Module
//!
//! Turns scraped site text into topic buckets and serves that text back to
//! the conversation layer.
//!
//! - **ContentCategorizer**: sentence-level keyword bucketing
//! - **ScrapedContent**: the persisted document of one scrape run
//! - **Sections**: heading excerpts in page order
//! - **ContentStore**: read-only lookups over a `ScrapedContent`

pub mod categorizer;
pub mod scraped_content;
pub mod sections;
pub mod store;

pub use categorizer::{Buckets, ContentCategorizer};
pub use scraped_content::{ContentSummary, ScrapedContent};
pub use sections::Sections;
pub use store::ContentStore;
