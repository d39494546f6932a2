//! Ordered keyword rules used by the category resolver.
//!
//! Rules are plain data evaluated top to bottom; the first match wins. Keep
//! the order of the default tables stable: several utterances match more
//! than one group and rely on precedence.

use crate::domain::foundation::Topic;

/// Keyword test applied to a lower-cased utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Any of the phrases occurs as a substring.
    ContainsAny(Vec<String>),
    /// `required` occurs and none of `excluded` does.
    ContainsExcluding {
        required: String,
        excluded: Vec<String>,
    },
}

impl Predicate {
    pub fn contains_any(phrases: &[&str]) -> Self {
        Predicate::ContainsAny(phrases.iter().map(|p| p.to_string()).collect())
    }

    pub fn contains_excluding(required: &str, excluded: &[&str]) -> Self {
        Predicate::ContainsExcluding {
            required: required.to_string(),
            excluded: excluded.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Predicate::ContainsAny(phrases) => phrases.iter().any(|p| lowered.contains(p.as_str())),
            Predicate::ContainsExcluding { required, excluded } => {
                lowered.contains(required.as_str())
                    && !excluded.iter().any(|p| lowered.contains(p.as_str()))
            }
        }
    }
}

/// Rule for the first utterance after the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialRule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub topic: Topic,
}

/// Extra requirement a topic switch must meet once its keywords matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCondition {
    Always,
    /// Utterance mentions "mmm", or the active topic is MMM services.
    MmmContext,
}

/// Rule for follow-up utterances while a topic is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub target: Topic,
    pub condition: SwitchCondition,
}

impl SwitchRule {
    /// Whether the switch applies once the predicate has matched.
    pub fn condition_met(&self, lowered: &str, current: Topic) -> bool {
        match self.condition {
            SwitchCondition::Always => true,
            SwitchCondition::MmmContext => {
                lowered.contains("mmm") || current == Topic::MmmServices
            }
        }
    }
}

/// The full rule table the resolver consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub initial: Vec<InitialRule>,
    pub general_triggers: Predicate,
    pub switches: Vec<SwitchRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            initial: vec![
                InitialRule {
                    name: "services",
                    predicate: Predicate::contains_any(&[
                        "mmm service",
                        "service",
                        "services",
                        "mmm services",
                    ]),
                    topic: Topic::MmmServices,
                },
                InitialRule {
                    name: "products",
                    predicate: Predicate::contains_any(&[
                        "mmm product",
                        "product",
                        "products",
                        "mmm products",
                    ]),
                    topic: Topic::MmmProducts,
                },
                InitialRule {
                    name: "experimentation",
                    predicate: Predicate::contains_any(&[
                        "experimentation",
                        "experiment",
                        "testing",
                        "experimentation products",
                    ]),
                    topic: Topic::ExperimentationProducts,
                },
                InitialRule {
                    name: "bare-mmm",
                    predicate: Predicate::contains_excluding(
                        "mmm",
                        &["service", "product", "experiment"],
                    ),
                    topic: Topic::MmmServices,
                },
            ],
            general_triggers: Predicate::contains_any(&[
                "about aryma",
                "aryma labs",
                "company",
                "contact",
                "overview",
                "who are you",
                "what do you do",
            ]),
            switches: vec![
                SwitchRule {
                    name: "product-family",
                    predicate: Predicate::contains_any(&[
                        "product", "products", "tool", "tools", "platform",
                    ]),
                    target: Topic::MmmProducts,
                    condition: SwitchCondition::MmmContext,
                },
                SwitchRule {
                    name: "experimentation",
                    predicate: Predicate::contains_any(&["experiment", "testing", "a/b test"]),
                    target: Topic::ExperimentationProducts,
                    condition: SwitchCondition::Always,
                },
                SwitchRule {
                    name: "services",
                    predicate: Predicate::contains_any(&["service", "services", "consulting"]),
                    target: Topic::MmmServices,
                    condition: SwitchCondition::Always,
                },
            ],
        }
    }
}
