//! Application layer - Conversation orchestration and handlers.
//!
//! Coordinates domain logic with the ports: the per-turn controller, the
//! generator that decides between generative and templated answers, and the
//! scrape command.

mod chat_session;
mod conversation_controller;
pub mod handlers;
mod response_generator;

pub use chat_session::{ChatSession, APOLOGY};
pub use conversation_controller::{
    ConversationController, ControllerError, CLARIFY_QUESTION, INITIAL_QUESTION,
};
pub use handlers::{ScrapeError, ScrapeSettings, ScrapeSiteHandler, ScrapeSiteResult};
pub use response_generator::{
    FallbackReason, GeneratedResponse, GeneratorSettings, PromptIntent, ResponseGenerator,
    ResponseSource,
};
