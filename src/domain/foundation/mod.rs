//! Foundation module - Shared domain primitives.
//!
//! Identifiers, the topic vocabulary, validation errors and the state
//! machine trait used by the conversation phase.

mod errors;
mod ids;
mod state_machine;
mod text;
mod topic;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use state_machine::StateMachine;
pub use text::char_prefix;
pub use topic::{ResponseTopic, Topic};
