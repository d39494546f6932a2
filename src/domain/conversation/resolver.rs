//! Category resolver: maps an utterance to a topic decision.

use serde::Deserialize;

use crate::domain::foundation::Topic;

use super::rules::RuleSet;

/// Outcome of resolving one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveResult {
    /// First topic chosen for the conversation.
    NewTopic(Topic),
    /// Answer from the whole site; the active topic is left alone.
    GeneralQuery,
    /// Ask the user to pick a category.
    Clarify,
    /// Keep answering from the active topic.
    TopicUnchanged,
    /// Replace the active topic.
    TopicSwitched(Topic),
}

/// What to do with a first utterance that matches no topic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Answer it over the whole site.
    #[default]
    GeneralQuery,
    /// Ask which category the user means.
    Clarify,
}

/// Deterministic keyword resolver over an ordered [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    rules: RuleSet,
    unresolved: UnresolvedPolicy,
}

impl CategoryResolver {
    pub fn new(rules: RuleSet, unresolved: UnresolvedPolicy) -> Self {
        Self { rules, unresolved }
    }

    /// Default rules with the given unresolved-utterance policy.
    pub fn with_policy(unresolved: UnresolvedPolicy) -> Self {
        Self::new(RuleSet::default(), unresolved)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolves `utterance` given the conversation's active topic.
    pub fn resolve(&self, utterance: &str, current: Option<Topic>) -> ResolveResult {
        let lowered = utterance.to_lowercase();
        match current {
            None => self.resolve_initial(&lowered),
            Some(topic) => self.resolve_follow_up(&lowered, topic),
        }
    }

    fn resolve_initial(&self, lowered: &str) -> ResolveResult {
        if let Some(rule) = self.rules.initial.iter().find(|r| r.predicate.matches(lowered)) {
            tracing::debug!(rule = rule.name, topic = %rule.topic, "initial topic resolved");
            return ResolveResult::NewTopic(rule.topic);
        }

        tracing::debug!(policy = ?self.unresolved, "no initial rule matched");
        match self.unresolved {
            UnresolvedPolicy::GeneralQuery => ResolveResult::GeneralQuery,
            UnresolvedPolicy::Clarify => ResolveResult::Clarify,
        }
    }

    fn resolve_follow_up(&self, lowered: &str, current: Topic) -> ResolveResult {
        if self.rules.general_triggers.matches(lowered) {
            tracing::debug!(topic = %current, "general query trigger matched");
            return ResolveResult::GeneralQuery;
        }

        // Only the first rule whose keywords match is considered, even when
        // its condition then fails.
        let Some(rule) = self.rules.switches.iter().find(|r| r.predicate.matches(lowered)) else {
            return ResolveResult::TopicUnchanged;
        };

        if !rule.condition_met(lowered, current) || rule.target == current {
            tracing::debug!(rule = rule.name, topic = %current, "topic unchanged");
            return ResolveResult::TopicUnchanged;
        }

        tracing::debug!(rule = rule.name, from = %current, to = %rule.target, "topic switch");
        ResolveResult::TopicSwitched(rule.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> CategoryResolver {
        CategoryResolver::default()
    }

    #[test]
    fn initial_services_phrase() {
        assert_eq!(
            resolver().resolve("I'm interested in MMM Services", None),
            ResolveResult::NewTopic(Topic::MmmServices)
        );
    }

    #[test]
    fn initial_bare_mmm_defaults_to_services() {
        assert_eq!(
            resolver().resolve("just mmm please", None),
            ResolveResult::NewTopic(Topic::MmmServices)
        );
    }

    #[test]
    fn initial_products_and_experimentation() {
        assert_eq!(
            resolver().resolve("Show me your products", None),
            ResolveResult::NewTopic(Topic::MmmProducts)
        );
        assert_eq!(
            resolver().resolve("I run a lot of experiments", None),
            ResolveResult::NewTopic(Topic::ExperimentationProducts)
        );
    }

    #[test]
    fn initial_services_beat_products() {
        assert_eq!(
            resolver().resolve("products and services", None),
            ResolveResult::NewTopic(Topic::MmmServices)
        );
    }

    #[test]
    fn initial_unmatched_is_general_query_by_default() {
        assert_eq!(
            resolver().resolve("hello there", None),
            ResolveResult::GeneralQuery
        );
    }

    #[test]
    fn initial_unmatched_can_ask_for_clarification() {
        let resolver = CategoryResolver::with_policy(UnresolvedPolicy::Clarify);
        assert_eq!(resolver.resolve("hello there", None), ResolveResult::Clarify);
    }

    #[test]
    fn initial_resolution_ignores_general_triggers() {
        assert_eq!(
            resolver().resolve("company services", None),
            ResolveResult::NewTopic(Topic::MmmServices)
        );
    }

    #[test]
    fn follow_up_tools_switches_from_services_to_products() {
        assert_eq!(
            resolver().resolve("show me your tools", Some(Topic::MmmServices)),
            ResolveResult::TopicSwitched(Topic::MmmProducts)
        );
    }

    #[test]
    fn follow_up_general_trigger_wins_for_every_topic() {
        for topic in Topic::all() {
            assert_eq!(
                resolver().resolve("tell me about aryma labs", Some(*topic)),
                ResolveResult::GeneralQuery
            );
        }
    }

    #[test]
    fn follow_up_product_check_precedes_experimentation() {
        assert_eq!(
            resolver().resolve(
                "which experimentation tools do you have",
                Some(Topic::MmmServices)
            ),
            ResolveResult::TopicSwitched(Topic::MmmProducts)
        );
    }

    #[test]
    fn follow_up_product_words_without_mmm_context_leave_topic() {
        // Product keywords match first, so the experimentation rule is never
        // consulted even though "testing" is present.
        assert_eq!(
            resolver().resolve(
                "any testing products?",
                Some(Topic::ExperimentationProducts)
            ),
            ResolveResult::TopicUnchanged
        );
    }

    #[test]
    fn follow_up_product_words_with_mmm_switch_from_any_topic() {
        assert_eq!(
            resolver().resolve("what mmm tools exist", Some(Topic::ExperimentationProducts)),
            ResolveResult::TopicSwitched(Topic::MmmProducts)
        );
    }

    #[test]
    fn follow_up_experimentation_and_services_switches() {
        assert_eq!(
            resolver().resolve("how about a/b tests", Some(Topic::MmmProducts)),
            ResolveResult::TopicSwitched(Topic::ExperimentationProducts)
        );
        assert_eq!(
            resolver().resolve("I need consulting", Some(Topic::MmmProducts)),
            ResolveResult::TopicSwitched(Topic::MmmServices)
        );
    }

    #[test]
    fn follow_up_switch_to_active_topic_is_unchanged() {
        assert_eq!(
            resolver().resolve("more services please", Some(Topic::MmmServices)),
            ResolveResult::TopicUnchanged
        );
    }

    #[test]
    fn follow_up_without_keywords_is_unchanged() {
        assert_eq!(
            resolver().resolve("How do you help with attribution?", Some(Topic::MmmServices)),
            ResolveResult::TopicUnchanged
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        let resolver = resolver();
        let cases = [
            ("show me your tools", Some(Topic::MmmServices)),
            ("hello", None),
            ("experiment design", Some(Topic::MmmProducts)),
        ];
        for (utterance, topic) in cases {
            let first = resolver.resolve(utterance, topic);
            for _ in 0..5 {
                assert_eq!(resolver.resolve(utterance, topic), first);
            }
        }
    }
}
