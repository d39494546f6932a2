//! Conversation Domain Module
//!
//! Pure conversation logic with no provider or storage knowledge.
//!
//! - **rules**: ordered keyword rule tables
//! - **resolver**: utterance → topic decision
//! - **session**: per-conversation phase and turn history

pub mod resolver;
pub mod rules;
pub mod session;

pub use resolver::{CategoryResolver, ResolveResult, UnresolvedPolicy};
pub use rules::{InitialRule, Predicate, RuleSet, SwitchCondition, SwitchRule};
pub use session::{ConversationPhase, SessionState, Turn, TurnRole};
