//! Storage Adapters
//!
//! Implementations of the ContentRepository port.
//!
//! ## Available Adapters
//!
//! - **FileContentRepository** - Stores the document as a JSON file
//! - **InMemoryContentRepository** - Stores the document in memory (testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileContentRepository, InMemoryContentRepository};
//!
//! // Production: file-based storage
//! let repo = FileContentRepository::new("scraped_content.json");
//!
//! // Testing: in-memory storage
//! let repo = InMemoryContentRepository::new();
//! ```

mod file_content_repository;
mod in_memory_content_repository;

pub use file_content_repository::FileContentRepository;
pub use in_memory_content_repository::InMemoryContentRepository;
