//! Conversation behavior configuration

use serde::Deserialize;

use crate::domain::conversation::UnresolvedPolicy;

/// Conversation behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationConfig {
    /// What an unrecognized first answer turns into
    #[serde(default)]
    pub unresolved_policy: UnresolvedPolicy,
}
