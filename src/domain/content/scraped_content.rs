//! The scraped-content document written by the scrape step and read at startup.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Topic;

use super::categorizer::Buckets;
use super::sections::Sections;

/// Serialized form of one scrape run.
///
/// Every field defaults so partially written or older files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedContent {
    /// Prefix of the main page text.
    pub main_content: String,
    /// Sentences sorted into topic buckets.
    pub categorized_content: Buckets,
    /// Heading text → text following that heading, in page order.
    pub sections: Sections,
    pub total_pages_scraped: u32,
    pub links_found: u32,
}

impl ScrapedContent {
    /// Built-in content used when the site cannot be reached.
    pub fn fallback() -> Self {
        let bucket = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let mut categorized_content = Buckets::new();
        categorized_content.insert(
            Topic::MmmServices,
            bucket(&[
                "Marketing Mix Modeling services for enterprises",
                "MMM consulting and implementation",
                "Custom MMM model development",
                "Marketing attribution analysis",
                "ROI optimization consulting",
            ]),
        );
        categorized_content.insert(
            Topic::MmmProducts,
            bucket(&[
                "ArymaEdge - State of the Art MMM Platform",
                "MMMGPT - AI-powered MMM assistant",
                "MMMDiagnose - MMM model validation tool",
                "MMM Budget Optimization tools",
                "MMM Validators and Bootstrapper",
            ]),
        );
        categorized_content.insert(
            Topic::ExperimentationProducts,
            bucket(&[
                "A/B testing and experimentation tools",
                "DiDetective - Causal inference platform",
                "Statistical testing solutions",
                "Experimental design tools",
                "Causal inference and incrementality testing",
            ]),
        );

        Self {
            main_content: "Aryma Labs provides Marketing Mix Modeling (MMM) services, products, \
                           and experimentation tools for enterprises."
                .to_string(),
            categorized_content,
            sections: Sections::new(),
            total_pages_scraped: 0,
            links_found: 0,
        }
    }

    /// Short human-readable statistics about the run.
    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            pages_scraped: self.total_pages_scraped,
            links_found: self.links_found,
            populated_topics: Topic::all()
                .iter()
                .copied()
                .filter(|t| {
                    self.categorized_content
                        .get(t)
                        .is_some_and(|entries| !entries.is_empty())
                })
                .collect(),
            section_count: self.sections.len(),
        }
    }
}

/// Counts shown by the `stats` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSummary {
    pub pages_scraped: u32,
    pub links_found: u32,
    pub populated_topics: Vec<Topic>,
    pub section_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_when_deserializing() {
        let content: ScrapedContent =
            serde_json::from_str(r#"{"main_content": "Hello"}"#).unwrap();

        assert_eq!(content.main_content, "Hello");
        assert!(content.categorized_content.is_empty());
        assert!(content.sections.is_empty());
        assert_eq!(content.total_pages_scraped, 0);
        assert_eq!(content.links_found, 0);
    }

    #[test]
    fn categorized_content_uses_bucket_identifiers_as_keys() {
        let json = r#"{
            "categorized_content": {
                "MMM_SERVICES": ["a", "a"],
                "EXPERIMENTATION_PRODUCTS": []
            }
        }"#;
        let content: ScrapedContent = serde_json::from_str(json).unwrap();

        assert_eq!(content.categorized_content[&Topic::MmmServices], vec!["a", "a"]);
        assert!(!content.categorized_content.contains_key(&Topic::MmmProducts));

        let out = serde_json::to_value(&content).unwrap();
        assert!(out["categorized_content"].get("MMM_SERVICES").is_some());
    }

    #[test]
    fn fallback_fills_every_bucket() {
        let content = ScrapedContent::fallback();
        assert_eq!(content.total_pages_scraped, 0);
        for topic in Topic::all() {
            assert_eq!(content.categorized_content[topic].len(), 5);
        }
    }

    #[test]
    fn summary_lists_only_populated_topics() {
        let mut content = ScrapedContent::fallback();
        content
            .categorized_content
            .insert(Topic::MmmProducts, Vec::new());
        content.total_pages_scraped = 4;
        content.links_found = 12;

        let summary = content.summary();
        assert_eq!(summary.pages_scraped, 4);
        assert_eq!(summary.links_found, 12);
        assert_eq!(
            summary.populated_topics,
            vec![Topic::MmmServices, Topic::ExperimentationProducts]
        );
    }
}
