//! Topic enum naming the fixed content buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The three offering buckets the site content is sorted into.
///
/// Serialized with the bucket identifiers used in the content file
/// (`MMM_SERVICES`, `MMM_PRODUCTS`, `EXPERIMENTATION_PRODUCTS`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topic {
    MmmServices,
    MmmProducts,
    ExperimentationProducts,
}

impl Topic {
    /// Returns all topics in canonical order.
    pub fn all() -> &'static [Topic] {
        &[
            Topic::MmmServices,
            Topic::MmmProducts,
            Topic::ExperimentationProducts,
        ]
    }

    /// Returns the bucket identifier used in the content file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::MmmServices => "MMM_SERVICES",
            Topic::MmmProducts => "MMM_PRODUCTS",
            Topic::ExperimentationProducts => "EXPERIMENTATION_PRODUCTS",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("topic", format!("unknown bucket '{}'", s))
            })
    }
}

/// What a response is about: one bucket, or the whole site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseTopic {
    Bucket(Topic),
    General,
}

impl ResponseTopic {
    /// Tag used in logs and prompts (`GENERAL` for whole-site answers).
    pub fn tag(&self) -> &'static str {
        match self {
            ResponseTopic::Bucket(topic) => topic.as_str(),
            ResponseTopic::General => "GENERAL",
        }
    }
}

impl From<Topic> for ResponseTopic {
    fn from(topic: Topic) -> Self {
        ResponseTopic::Bucket(topic)
    }
}

impl fmt::Display for ResponseTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
