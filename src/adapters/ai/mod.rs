//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `ChatCompletionsProvider` - OpenAI-compatible chat completions (Hugging Face router by default)

mod chat_completions_provider;
mod mock_provider;

pub use chat_completions_provider::{ChatCompletionsConfig, ChatCompletionsProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
