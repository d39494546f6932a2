//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, topics, errors, state machine)
//! - `content` - Scraped content, keyword categorization and read-only lookup
//! - `conversation` - Session state, keyword rules and the category resolver

pub mod content;
pub mod conversation;
pub mod foundation;
