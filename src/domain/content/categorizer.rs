//! Keyword categorizer that sorts corpus sentences into topic buckets.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::domain::foundation::Topic;

/// Bucket name → matched sentences, in discovery order.
pub type Buckets = BTreeMap<Topic, Vec<String>>;

static DEFAULT_KEYWORDS: Lazy<Vec<(Topic, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            Topic::MmmServices,
            vec![
                "mmm service",
                "media mix modeling service",
                "attribution service",
                "marketing mix modeling",
                "mmm consulting",
                "attribution modeling",
            ],
        ),
        (
            Topic::MmmProducts,
            vec![
                "mmm product",
                "media mix modeling tool",
                "attribution tool",
                "mmm platform",
                "marketing mix modeling software",
                "mmm solution",
            ],
        ),
        (
            Topic::ExperimentationProducts,
            vec![
                "experimentation",
                "a/b testing",
                "experiment",
                "test",
                "testing",
                "experimental design",
                "statistical testing",
                "causal inference",
            ],
        ),
    ]
});

/// Sorts sentences of a corpus into topic buckets by keyword membership.
///
/// A sentence is appended once for every keyword of a bucket it contains,
/// so the same sentence can appear several times in one bucket. Callers must
/// not assume bucket entries are unique.
#[derive(Debug, Clone)]
pub struct ContentCategorizer {
    keywords: Vec<(Topic, Vec<String>)>,
}

impl Default for ContentCategorizer {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS
                .iter()
                .map(|(topic, words)| (*topic, words.iter().map(|w| w.to_string()).collect()))
                .collect(),
        }
    }
}

impl ContentCategorizer {
    /// Creates a categorizer with the standard keyword table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions `corpus` into the three topic buckets.
    ///
    /// Every topic key is present in the result, empty when nothing matched.
    pub fn categorize(&self, corpus: &str) -> Buckets {
        let mut buckets: Buckets = Topic::all().iter().map(|t| (*t, Vec::new())).collect();

        let lowered = corpus.to_lowercase();
        if lowered.trim().is_empty() {
            return buckets;
        }

        let sentences: Vec<(&str, String)> = corpus
            .split('.')
            .map(|sentence| (sentence, sentence.to_lowercase()))
            .collect();

        for (topic, words) in &self.keywords {
            let bucket = buckets.entry(*topic).or_default();
            for keyword in words {
                if !lowered.contains(keyword.as_str()) {
                    continue;
                }
                bucket.extend(
                    sentences
                        .iter()
                        .filter(|(_, lower)| lower.contains(keyword.as_str()))
                        .map(|(original, _)| original.trim().to_string()),
                );
            }
        }

        tracing::debug!(
            services = buckets[&Topic::MmmServices].len(),
            products = buckets[&Topic::MmmProducts].len(),
            experimentation = buckets[&Topic::ExperimentationProducts].len(),
            "categorized corpus"
        );

        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_corpus_yields_three_empty_buckets() {
        let buckets = ContentCategorizer::new().categorize("");
        assert_eq!(buckets.len(), 3);
        assert!(buckets.values().all(Vec::is_empty));
    }

    #[test]
    fn whitespace_corpus_yields_three_empty_buckets() {
        let buckets = ContentCategorizer::new().categorize("   \n\t  ");
        assert_eq!(buckets.len(), 3);
        assert!(buckets.values().all(Vec::is_empty));
    }

    #[test]
    fn sentences_keep_original_casing_and_are_trimmed() {
        let corpus = "We offer Marketing Mix Modeling for brands.   Our MMM Platform is fast. ";
        let buckets = ContentCategorizer::new().categorize(corpus);

        assert_eq!(
            buckets[&Topic::MmmServices],
            vec!["We offer Marketing Mix Modeling for brands".to_string()]
        );
        assert_eq!(
            buckets[&Topic::MmmProducts],
            vec!["Our MMM Platform is fast".to_string()]
        );
        assert!(buckets[&Topic::ExperimentationProducts].is_empty());
    }

    #[test]
    fn sentence_matching_several_keywords_is_repeated() {
        // "testing" matches "a/b testing", "test" and "testing".
        let corpus = "Run A/B testing with us.";
        let buckets = ContentCategorizer::new().categorize(corpus);

        assert_eq!(
            buckets[&Topic::ExperimentationProducts],
            vec![
                "Run A/B testing with us".to_string(),
                "Run A/B testing with us".to_string(),
                "Run A/B testing with us".to_string(),
            ]
        );
    }

    #[test]
    fn insertion_order_follows_keyword_then_sentence_order() {
        let corpus = "Causal inference first. Experimentation second.";
        let buckets = ContentCategorizer::new().categorize(corpus);

        // "experimentation" and "experiment" come before "causal inference".
        assert_eq!(
            buckets[&Topic::ExperimentationProducts],
            vec![
                "Experimentation second".to_string(),
                "Experimentation second".to_string(),
                "Causal inference first".to_string(),
            ]
        );
    }

    proptest! {
        #[test]
        fn always_three_keys_with_sentences_from_corpus(corpus in ".{0,400}") {
            let buckets = ContentCategorizer::new().categorize(&corpus);
            prop_assert_eq!(buckets.len(), 3);

            let sentences: Vec<String> = corpus.split('.').map(|s| s.trim().to_string()).collect();
            for entries in buckets.values() {
                for entry in entries {
                    prop_assert!(sentences.contains(entry));
                }
            }
        }

        #[test]
        fn categorize_is_idempotent(
            corpus in "(MMM consulting|A/B testing|mmm platform|plain words| |\\.){0,30}"
        ) {
            let categorizer = ContentCategorizer::new();
            prop_assert_eq!(categorizer.categorize(&corpus), categorizer.categorize(&corpus));
        }
    }
}
