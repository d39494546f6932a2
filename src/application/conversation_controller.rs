//! Conversation Controller - Drives one turn of the topic state machine.
//!
//! The controller holds only shared, read-only collaborators; everything that
//! belongs to a single conversation lives in the [`SessionState`] passed to
//! each call.

use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::content::ContentStore;
use crate::domain::conversation::{
    CategoryResolver, ConversationPhase, ResolveResult, SessionState, TurnRole,
};
use crate::domain::foundation::{ResponseTopic, ValidationError};
use crate::ports::RequestMetadata;

use super::response_generator::ResponseGenerator;

/// Greeting sent when a conversation starts.
pub const INITIAL_QUESTION: &str =
    "Are you looking for MMM Services, MMM Products, or Experimentation Products?";

/// Reply used when the unresolved policy asks the user to pick a category.
pub const CLARIFY_QUESTION: &str = "I'm not sure which category you're interested in. \
     Please specify: MMM Services, MMM Products, or Experimentation Products?";

/// Failures that escape a turn.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Invalid conversation transition: {0}")]
    InvalidTransition(#[from] ValidationError),

    #[error("No active topic to continue")]
    NoActiveTopic,
}

/// Stateless driver shared by every session.
pub struct ConversationController {
    store: Arc<ContentStore>,
    resolver: CategoryResolver,
    generator: ResponseGenerator,
    demo_url: String,
}

impl ConversationController {
    pub fn new(
        store: Arc<ContentStore>,
        resolver: CategoryResolver,
        generator: ResponseGenerator,
        demo_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            resolver,
            generator,
            demo_url: demo_url.into(),
        }
    }

    pub fn initial_question(&self) -> &'static str {
        INITIAL_QUESTION
    }

    /// Suffix appended to every generated answer.
    pub fn demo_suffix(&self) -> String {
        format!("\n\n{}", self.demo_link())
    }

    fn demo_link(&self) -> String {
        format!("[Contact Us for Demo]({})", self.demo_url)
    }

    /// Opens the conversation and records the greeting.
    pub fn start(&self, state: &mut SessionState) -> String {
        state.begin();
        state.push_turn(TurnRole::Agent, INITIAL_QUESTION);
        INITIAL_QUESTION.to_string()
    }

    /// Resolves, answers and records one user utterance.
    pub async fn handle_turn(
        &self,
        state: &mut SessionState,
        utterance: &str,
    ) -> Result<String, ControllerError> {
        state.begin();
        let current = state.topic();
        let decision = self.resolver.resolve(utterance, current);

        let topic = match decision {
            ResolveResult::NewTopic(topic) | ResolveResult::TopicSwitched(topic) => {
                state.transition_to(ConversationPhase::with_topic(topic))?;
                tracing::info!(
                    session_id = %state.id(),
                    from = ?current,
                    to = %topic,
                    "topic selected"
                );
                ResponseTopic::Bucket(topic)
            }
            ResolveResult::TopicUnchanged => {
                ResponseTopic::Bucket(current.ok_or(ControllerError::NoActiveTopic)?)
            }
            ResolveResult::GeneralQuery => ResponseTopic::General,
            ResolveResult::Clarify => {
                state.push_turn(TurnRole::User, utterance);
                state.push_turn(TurnRole::Agent, CLARIFY_QUESTION);
                return Ok(CLARIFY_QUESTION.to_string());
            }
        };

        state.push_turn(TurnRole::User, utterance);

        let content = self.store.content_for_response(topic);
        let metadata = RequestMetadata::new(state.id(), Uuid::new_v4().to_string());
        tracing::debug!(
            session_id = %state.id(),
            trace_id = %metadata.trace_id,
            topic = %topic,
            content_chars = content.chars().count(),
            "answering turn"
        );

        let answer = self
            .generator
            .generate(utterance, &content, topic, metadata)
            .await;
        let reply = self.with_demo_link(&answer);

        state.push_turn(TurnRole::Agent, reply.clone());
        Ok(reply)
    }

    /// Back to `Fresh` with an empty history.
    pub fn reset(&self, state: &mut SessionState) {
        tracing::info!(session_id = %state.id(), "conversation reset");
        state.reset();
    }

    /// Appends the demo suffix. Only a trailing copy of the link itself is
    /// removed first; the rest of the answer is kept as generated.
    fn with_demo_link(&self, answer: &str) -> String {
        let link = self.demo_link();
        let body = match answer.trim_end().strip_suffix(link.as_str()) {
            Some(rest) => rest.trim_end(),
            None => answer,
        };
        format!("{body}{}", self.demo_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::application::response_generator::GeneratorSettings;
    use crate::domain::content::ScrapedContent;
    use crate::domain::conversation::UnresolvedPolicy;
    use crate::domain::foundation::Topic;
    use crate::ports::AIProvider;

    const DEMO: &str = "https://www.arymalabs.com/#contact";

    fn controller_with(provider: Option<MockAIProvider>, policy: UnresolvedPolicy) -> ConversationController {
        let provider = provider.map(|p| Arc::new(p) as Arc<dyn AIProvider>);
        ConversationController::new(
            Arc::new(ContentStore::new(ScrapedContent::fallback())),
            CategoryResolver::with_policy(policy),
            ResponseGenerator::new(provider, GeneratorSettings::default()),
            DEMO,
        )
    }

    fn controller() -> ConversationController {
        controller_with(None, UnresolvedPolicy::GeneralQuery)
    }

    fn suffix_count(text: &str) -> usize {
        text.matches("[Contact Us for Demo](").count()
    }

    #[test]
    fn start_greets_and_activates() {
        let controller = controller();
        let mut state = SessionState::new();

        let greeting = controller.start(&mut state);

        assert_eq!(greeting, INITIAL_QUESTION);
        assert_eq!(state.phase(), ConversationPhase::active());
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].role, TurnRole::Agent);
    }

    #[tokio::test]
    async fn first_answer_selects_topic() {
        let controller = controller();
        let mut state = SessionState::new();
        controller.start(&mut state);

        let reply = controller
            .handle_turn(&mut state, "I'm interested in MMM Services")
            .await
            .unwrap();

        assert_eq!(state.topic(), Some(Topic::MmmServices));
        assert!(reply.contains("MMM Services"));
        assert!(reply.ends_with(&format!("\n\n[Contact Us for Demo]({DEMO})")));
        assert_eq!(suffix_count(&reply), 1);
        assert_eq!(state.history().len(), 3);
    }

    #[tokio::test]
    async fn general_query_leaves_topic_unset() {
        let controller = controller();
        let mut state = SessionState::new();
        controller.start(&mut state);

        controller
            .handle_turn(&mut state, "hello there")
            .await
            .unwrap();

        assert_eq!(state.phase(), ConversationPhase::active());
    }

    #[tokio::test]
    async fn follow_up_switches_and_general_keeps_topic() {
        let controller = controller();
        let mut state = SessionState::new();
        controller.start(&mut state);

        controller.handle_turn(&mut state, "services").await.unwrap();
        controller
            .handle_turn(&mut state, "show me your tools")
            .await
            .unwrap();
        assert_eq!(state.topic(), Some(Topic::MmmProducts));

        controller
            .handle_turn(&mut state, "tell me about aryma labs")
            .await
            .unwrap();
        assert_eq!(state.topic(), Some(Topic::MmmProducts));
    }

    #[tokio::test]
    async fn clarify_policy_asks_without_demo_link() {
        let controller = controller_with(None, UnresolvedPolicy::Clarify);
        let mut state = SessionState::new();

        let reply = controller.handle_turn(&mut state, "hello").await.unwrap();

        assert_eq!(reply, CLARIFY_QUESTION);
        assert_eq!(suffix_count(&reply), 0);
        assert_eq!(state.phase(), ConversationPhase::active());
    }

    #[tokio::test]
    async fn generated_answer_gets_single_demo_link() {
        let echoed = format!("Aryma Labs builds MMM platforms.\n\n[Contact Us for Demo]({DEMO})");
        let controller = controller_with(
            Some(MockAIProvider::new().with_response(echoed)),
            UnresolvedPolicy::GeneralQuery,
        );
        let mut state = SessionState::new();

        let reply = controller.handle_turn(&mut state, "products").await.unwrap();

        assert_eq!(suffix_count(&reply), 1);
        assert!(reply.starts_with("Aryma Labs builds MMM platforms."));
    }

    #[tokio::test]
    async fn generated_answer_is_kept_verbatim_before_suffix() {
        let generated = "We can build an MMM model for you.   \n";
        let controller = controller_with(
            Some(MockAIProvider::new().with_response(generated)),
            UnresolvedPolicy::GeneralQuery,
        );
        let mut state = SessionState::new();

        let reply = controller.handle_turn(&mut state, "services").await.unwrap();

        assert_eq!(reply, format!("{generated}\n\n[Contact Us for Demo]({DEMO})"));
    }

    #[tokio::test]
    async fn fresh_session_is_activated_by_first_turn() {
        let controller = controller();
        let mut state = SessionState::new();

        controller.handle_turn(&mut state, "experimentation").await.unwrap();

        assert_eq!(state.topic(), Some(Topic::ExperimentationProducts));
        assert_eq!(state.history().len(), 2);
    }

    #[tokio::test]
    async fn reset_behaves_like_new_session() {
        let controller = controller();
        let mut state = SessionState::new();
        controller.start(&mut state);
        controller.handle_turn(&mut state, "products").await.unwrap();

        controller.reset(&mut state);
        assert_eq!(state.phase(), ConversationPhase::Fresh);
        assert!(state.history().is_empty());

        let mut fresh = SessionState::new();
        let after_reset = controller.handle_turn(&mut state, "just mmm please").await.unwrap();
        let brand_new = controller.handle_turn(&mut fresh, "just mmm please").await.unwrap();

        assert_eq!(after_reset, brand_new);
        assert_eq!(state.phase(), fresh.phase());
    }
}
