//! Chat Session - The three-call surface a chat UI talks to.

use std::sync::Arc;

use crate::domain::conversation::{SessionState, Turn};

use super::conversation_controller::ConversationController;

/// Shown instead of any failure that escapes the controller.
pub const APOLOGY: &str =
    "I apologize, but I'm having trouble processing your request. Please try again.";

/// One user's conversation: a shared controller plus owned state.
pub struct ChatSession {
    controller: Arc<ConversationController>,
    state: SessionState,
}

impl ChatSession {
    pub fn new(controller: Arc<ConversationController>) -> Self {
        Self {
            controller,
            state: SessionState::new(),
        }
    }

    /// Greets the user and opens the conversation.
    pub fn initial_question(&mut self) -> String {
        self.controller.start(&mut self.state)
    }

    /// Answers one message. Never fails: controller errors are logged and
    /// replaced with [`APOLOGY`].
    pub async fn handle_turn(&mut self, text: &str) -> String {
        match self.controller.handle_turn(&mut self.state, text).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(
                    session_id = %self.state.id(),
                    error = %err,
                    "turn failed"
                );
                APOLOGY.to_string()
            }
        }
    }

    pub fn reset(&mut self) {
        self.controller.reset(&mut self.state);
    }

    pub fn history(&self) -> &[Turn] {
        self.state.history()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
