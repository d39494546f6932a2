//! Application configuration module
//!
//! Type-safe configuration loaded with the `config` and `dotenvy` crates.
//! Sources, lowest precedence first: built-in defaults, an optional
//! `aryma-agent.toml` in the working directory, then environment variables
//! with the `ARYMA_AGENT` prefix and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use aryma_agent::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Scraping {}", config.site.base_url);
//! ```

mod ai;
mod conversation;
mod error;
mod logging;
mod site;

pub use ai::AiConfig;
pub use conversation::ConversationConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use site::{DisplayNames, SiteConfig};

use serde::Deserialize;

/// Optional config file, resolved without extension by the `config` crate.
const CONFIG_FILE: &str = "aryma-agent";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// agent that answers from fallback templates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Target website and scrape limits
    #[serde(default)]
    pub site: SiteConfig,

    /// Generative service (Hugging Face router by default)
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub conversation: ConversationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `aryma-agent.toml` if present
    /// 3. Reads environment variables with `ARYMA_AGENT` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `ARYMA_AGENT__AI__API_KEY=hf_...` -> `ai.api_key = hf_...`
    /// - `ARYMA_AGENT__SITE__MAX_PAGES=5` -> `site.max_pages = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix("ARYMA_AGENT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.site.validate()?;
        self.ai.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
