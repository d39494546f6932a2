//! Per-conversation state: the active topic and the turn history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, StateMachine, Topic, ValidationError};

/// Where a conversation is in its lifecycle.
///
/// Once a topic is set it can be replaced by another topic but never cleared;
/// only a reset back to `Fresh` removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ConversationPhase {
    /// No greeting has been sent yet.
    Fresh,
    /// Conversation running; `topic` is `None` until the resolver picks one.
    Active { topic: Option<Topic> },
}

impl ConversationPhase {
    /// Active phase with no topic resolved yet.
    pub fn active() -> Self {
        ConversationPhase::Active { topic: None }
    }

    /// Active phase bound to `topic`.
    pub fn with_topic(topic: Topic) -> Self {
        ConversationPhase::Active { topic: Some(topic) }
    }

    pub fn topic(&self) -> Option<Topic> {
        match self {
            ConversationPhase::Fresh => None,
            ConversationPhase::Active { topic } => *topic,
        }
    }
}

impl StateMachine for ConversationPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationPhase::*;
        match (self, target) {
            (_, Fresh) => true,
            (Fresh, Active { topic: None }) => true,
            (Fresh, Active { topic: Some(_) }) => false,
            (Active { topic: None }, Active { .. }) => true,
            (Active { topic: Some(_) }, Active { topic: Some(_) }) => true,
            (Active { topic: Some(_) }, Active { topic: None }) => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        let topics = Topic::all().iter().map(|t| ConversationPhase::with_topic(*t));
        match self {
            ConversationPhase::Fresh => vec![ConversationPhase::Fresh, ConversationPhase::active()],
            ConversationPhase::Active { topic: None } => std::iter::once(ConversationPhase::Fresh)
                .chain(std::iter::once(ConversationPhase::active()))
                .chain(topics)
                .collect(),
            ConversationPhase::Active { topic: Some(_) } => {
                std::iter::once(ConversationPhase::Fresh).chain(topics).collect()
            }
        }
    }
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Agent,
}

/// One message in the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// State owned by exactly one conversation and threaded through every
/// controller call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    id: SessionId,
    phase: ConversationPhase,
    history: Vec<Turn>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A brand-new conversation in the `Fresh` phase.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            phase: ConversationPhase::Fresh,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    pub fn topic(&self) -> Option<Topic> {
        self.phase.topic()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Opens a `Fresh` conversation with no topic. Active sessions keep
    /// their phase and history.
    pub fn begin(&mut self) {
        if self.phase == ConversationPhase::Fresh {
            self.phase = ConversationPhase::active();
        }
    }

    /// Moves to `target`, rejecting transitions the phase machine forbids.
    pub fn transition_to(&mut self, target: ConversationPhase) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(target)?;
        Ok(())
    }

    /// Appends a turn; history is never truncated here.
    pub fn push_turn(&mut self, role: TurnRole, content: impl Into<String>) {
        self.history.push(Turn::new(role, content));
    }

    /// Back to `Fresh` with an empty history. The session id is kept.
    pub fn reset(&mut self) {
        self.phase = ConversationPhase::Fresh;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_fresh_and_empty() {
        let state = SessionState::new();
        assert_eq!(state.phase(), ConversationPhase::Fresh);
        assert!(state.topic().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn topic_cannot_be_cleared_without_reset() {
        let phase = ConversationPhase::with_topic(Topic::MmmServices);
        assert!(phase.transition_to(ConversationPhase::active()).is_err());
        assert!(phase
            .transition_to(ConversationPhase::with_topic(Topic::MmmProducts))
            .is_ok());
        assert_eq!(
            phase.transition_to(ConversationPhase::Fresh),
            Ok(ConversationPhase::Fresh)
        );
    }

    #[test]
    fn fresh_cannot_jump_straight_to_a_topic() {
        assert!(!ConversationPhase::Fresh
            .can_transition_to(&ConversationPhase::with_topic(Topic::MmmProducts)));
    }

    #[test]
    fn no_phase_is_terminal() {
        assert!(!ConversationPhase::Fresh.is_terminal());
        assert!(!ConversationPhase::active().is_terminal());
        assert!(!ConversationPhase::with_topic(Topic::ExperimentationProducts).is_terminal());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        let phases = [
            ConversationPhase::Fresh,
            ConversationPhase::active(),
            ConversationPhase::with_topic(Topic::MmmServices),
        ];
        for phase in phases {
            for target in phase.valid_transitions() {
                assert!(phase.can_transition_to(&target), "{:?} -> {:?}", phase, target);
            }
        }
    }

    #[test]
    fn reset_clears_history_and_topic_but_keeps_id() {
        let mut state = SessionState::new();
        let id = state.id();
        state.transition_to(ConversationPhase::active()).unwrap();
        state
            .transition_to(ConversationPhase::with_topic(Topic::MmmProducts))
            .unwrap();
        state.push_turn(TurnRole::User, "tools please");
        state.push_turn(TurnRole::Agent, "Here are our tools");

        state.reset();

        assert_eq!(state.id(), id);
        assert_eq!(state.phase(), ConversationPhase::Fresh);
        assert!(state.history().is_empty());
    }

    #[test]
    fn begin_opens_fresh_sessions_only() {
        let mut state = SessionState::new();
        state.begin();
        assert_eq!(state.phase(), ConversationPhase::active());

        state
            .transition_to(ConversationPhase::with_topic(Topic::MmmServices))
            .unwrap();
        state.begin();
        assert_eq!(state.topic(), Some(Topic::MmmServices));
    }

    #[test]
    fn failed_transition_leaves_phase_untouched() {
        let mut state = SessionState::new();
        let err = state.transition_to(ConversationPhase::with_topic(Topic::MmmServices));
        assert!(err.is_err());
        assert_eq!(state.phase(), ConversationPhase::Fresh);
    }

    #[test]
    fn turn_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TurnRole::Agent).unwrap(), "\"agent\"");
    }
}
