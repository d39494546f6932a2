//! Response Generator - Bounded generative call with a deterministic fallback.
//!
//! Every answer is attempted once through the [`AIProvider`] port, bounded by
//! a timeout. Any provider error, an elapsed timeout, or a reply that is too
//! short falls through to a fixed template chosen by the utterance intent.
//! The demo link is appended by the controller, not here.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{AiConfig, DisplayNames};
use crate::domain::foundation::{char_prefix, ResponseTopic};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Tunables for prompt size, the remote call and fallback excerpts.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Generated replies shorter than this (after trimming) count as failures.
    pub min_response_chars: usize,
    /// Characters of supporting content embedded in the prompt.
    pub content_budget_chars: usize,
    /// Characters of supporting content quoted by fallback text.
    pub fallback_excerpt_chars: usize,
    pub display_names: DisplayNames,
}

impl GeneratorSettings {
    pub fn from_config(ai: &AiConfig, display_names: &DisplayNames) -> Self {
        Self {
            timeout: ai.timeout(),
            max_tokens: ai.max_tokens,
            temperature: ai.temperature,
            min_response_chars: ai.min_response_chars,
            content_budget_chars: ai.content_budget_chars,
            fallback_excerpt_chars: ai.fallback_excerpt_chars,
            display_names: display_names.clone(),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from_config(&AiConfig::default(), &DisplayNames::default())
    }
}

/// Coarse reading of what the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptIntent {
    About,
    Contact,
    Product,
    Generic,
}

impl PromptIntent {
    /// Substring checks on the lower-cased utterance, first match wins.
    pub fn detect(utterance: &str) -> Self {
        let lowered = utterance.to_lowercase();
        if lowered.contains("about") || lowered.contains("what is") {
            PromptIntent::About
        } else if lowered.contains("contact") || lowered.contains("demo") {
            PromptIntent::Contact
        } else if lowered.contains("product") {
            PromptIntent::Product
        } else {
            PromptIntent::Generic
        }
    }
}

/// Why the fallback template was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No generative provider is configured.
    NoProvider,
    /// The provider returned an error; carries `AIError::kind()`.
    Provider(&'static str),
    /// The call did not finish within the configured timeout.
    TimedOut,
    /// The reply was shorter than the minimum length.
    TooShort { chars: usize },
}

/// Which path produced an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSource {
    Generative,
    Fallback(FallbackReason),
}

/// An answer together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResponse {
    pub text: String,
    pub source: ResponseSource,
}

/// Produces answers from supporting content.
pub struct ResponseGenerator {
    provider: Option<Arc<dyn AIProvider>>,
    settings: GeneratorSettings,
}

impl ResponseGenerator {
    pub fn new(provider: Option<Arc<dyn AIProvider>>, settings: GeneratorSettings) -> Self {
        Self { provider, settings }
    }

    /// Generator that always answers from templates.
    pub fn without_provider(settings: GeneratorSettings) -> Self {
        Self::new(None, settings)
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Answer text only.
    pub async fn generate(
        &self,
        utterance: &str,
        content: &str,
        topic: ResponseTopic,
        metadata: RequestMetadata,
    ) -> String {
        self.generate_detailed(utterance, content, topic, metadata)
            .await
            .text
    }

    /// Answer text plus the path that produced it.
    pub async fn generate_detailed(
        &self,
        utterance: &str,
        content: &str,
        topic: ResponseTopic,
        metadata: RequestMetadata,
    ) -> GeneratedResponse {
        let intent = PromptIntent::detect(utterance);
        let session_id = metadata.session_id;
        let trace_id = metadata.trace_id.clone();

        let reason = match self.try_generate(utterance, content, topic, intent, metadata).await {
            Ok(text) => {
                tracing::debug!(
                    session_id = %session_id,
                    trace_id = %trace_id,
                    topic = %topic,
                    chars = text.chars().count(),
                    "generative answer accepted"
                );
                return GeneratedResponse {
                    text,
                    source: ResponseSource::Generative,
                };
            }
            Err(reason) => reason,
        };

        if reason != FallbackReason::NoProvider {
            tracing::warn!(
                session_id = %session_id,
                trace_id = %trace_id,
                topic = %topic,
                reason = ?reason,
                "generative answer unavailable, using fallback"
            );
        }

        GeneratedResponse {
            text: self.fallback(intent, topic, content),
            source: ResponseSource::Fallback(reason),
        }
    }

    async fn try_generate(
        &self,
        utterance: &str,
        content: &str,
        topic: ResponseTopic,
        intent: PromptIntent,
        metadata: RequestMetadata,
    ) -> Result<String, FallbackReason> {
        let provider = self.provider.as_ref().ok_or(FallbackReason::NoProvider)?;

        let request = CompletionRequest::new(metadata)
            .with_system_prompt(self.build_prompt(intent, topic, content))
            .with_message(MessageRole::User, utterance)
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature);

        let response = tokio::time::timeout(self.settings.timeout, provider.complete(request))
            .await
            .map_err(|_| FallbackReason::TimedOut)?
            .map_err(|e| FallbackReason::Provider(e.kind()))?;

        let chars = response.content.trim().chars().count();
        if chars < self.settings.min_response_chars {
            return Err(FallbackReason::TooShort { chars });
        }

        Ok(response.content)
    }

    /// System prompt for one answer. Supporting content is cut to the
    /// configured budget.
    pub fn build_prompt(&self, intent: PromptIntent, topic: ResponseTopic, content: &str) -> String {
        let name = self.settings.display_names.name_for(topic);
        let instruction = match intent {
            PromptIntent::About => format!(
                "Give a short overview of Aryma Labs' {name}, using only the content below."
            ),
            PromptIntent::Contact => format!(
                "The user wants to get in touch about {name}. Briefly say what the team can \
                 help with and invite them to book a demo."
            ),
            PromptIntent::Product => format!(
                "Describe the {name} that fit the question and what each is used for, using \
                 only the content below."
            ),
            PromptIntent::Generic => format!(
                "Answer the user's question about {name} using only the content below."
            ),
        };

        let excerpt = char_prefix(content.trim(), self.settings.content_budget_chars);
        format!(
            "You are a helpful assistant for Aryma Labs, a marketing analytics company. \
             {instruction} Keep the answer under 150 words.\n\nContent:\n{excerpt}"
        )
    }

    /// Deterministic answer for `intent`, quoting the start of `content`.
    pub fn fallback(&self, intent: PromptIntent, topic: ResponseTopic, content: &str) -> String {
        let name = self.settings.display_names.name_for(topic);
        let excerpt = char_prefix(content.trim(), self.settings.fallback_excerpt_chars).trim_end();

        match intent {
            PromptIntent::About => with_excerpt(format!("Here is an overview of our {name}"), excerpt),
            PromptIntent::Contact => format!(
                "We'd be glad to talk with you about our {name}. Use the link below to reach \
                 our team or book a demo."
            ),
            PromptIntent::Product => with_excerpt(format!("Our {name} include"), excerpt),
            PromptIntent::Generic if excerpt.is_empty() => {
                format!("Thank you for your interest in our {name}.")
            }
            PromptIntent::Generic => {
                format!("Thank you for your interest in our {name}. {excerpt}...")
            }
        }
    }
}

fn with_excerpt(lead: String, excerpt: &str) -> String {
    if excerpt.is_empty() {
        format!("{lead}.")
    } else {
        format!("{lead}: {excerpt}...")
    }
}
