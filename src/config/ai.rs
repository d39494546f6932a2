//! Generative service configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Generative service configuration
///
/// Without an API key the agent answers from fallback templates only.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Hugging Face (or other OpenAI-compatible) API key
    pub api_key: Option<Secret<String>>,

    /// Chat completions endpoint root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Shorter generated answers are treated as failures
    #[serde(default = "default_min_response_chars")]
    pub min_response_chars: usize,

    /// Characters of supporting content embedded in the prompt
    #[serde(default = "default_content_budget")]
    pub content_budget_chars: usize,

    /// Characters of supporting content quoted by fallback answers
    #[serde(default = "default_fallback_excerpt")]
    pub fallback_excerpt_chars: usize,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAiBaseUrl(self.base_url.clone()));
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }

        if self.content_budget_chars == 0 {
            return Err(ValidationError::InvalidContentBudget);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            min_response_chars: default_min_response_chars(),
            content_budget_chars: default_content_budget(),
            fallback_excerpt_chars: default_fallback_excerpt(),
        }
    }
}

fn default_base_url() -> String {
    "https://router.huggingface.co/v1".to_string()
}

fn default_model() -> String {
    "meta-llama/Llama-3.1-8B-Instruct".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_tokens() -> u32 {
    250
}

fn default_temperature() -> f32 {
    0.7
}

fn default_min_response_chars() -> usize {
    20
}

fn default_content_budget() -> usize {
    1000
}

fn default_fallback_excerpt() -> usize {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_tokens, 250);
        assert_eq!(config.min_response_chars, 20);
        assert_eq!(config.content_budget_chars, 1000);
        assert_eq!(config.fallback_excerpt_chars, 200);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let config = AiConfig {
            api_key: Some(Secret::new("   ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_api_key());

        let config = AiConfig {
            api_key: Some(Secret::new("hf_xxx".to_string())),
            ..Default::default()
        };
        assert!(config.has_api_key());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_bad_temperature() {
        let config = AiConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemperature)
        ));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }

    #[test]
    fn test_validation_bad_base_url() {
        let config = AiConfig {
            base_url: "router.huggingface.co".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
