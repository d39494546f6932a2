//! Target site configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use super::error::ValidationError;
use crate::domain::foundation::{ResponseTopic, Topic};

/// Website, scrape limits and the names shown to users.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site to scrape
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Link appended to every generated answer
    #[serde(default = "default_demo_url")]
    pub demo_url: String,

    /// Where the scraped content document is stored
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,

    /// Maximum number of linked pages followed per scrape
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Characters of combined page text kept as `main_content`
    #[serde(default = "default_main_content_chars")]
    pub main_content_chars: usize,

    /// Pause between page fetches
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Per-page fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Overrides the fetcher's default User-Agent
    pub user_agent: Option<String>,

    #[serde(default)]
    pub display_names: DisplayNames,
}

impl SiteConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate site configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidSiteUrl(self.base_url.clone()));
        }

        if !is_http_url(&self.demo_url) {
            return Err(ValidationError::InvalidDemoUrl(self.demo_url.clone()));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.content_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SITE__CONTENT_PATH"));
        }

        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            demo_url: default_demo_url(),
            content_path: default_content_path(),
            max_pages: default_max_pages(),
            main_content_chars: default_main_content_chars(),
            request_delay_ms: default_request_delay_ms(),
            fetch_timeout_secs: default_fetch_timeout(),
            user_agent: None,
            display_names: DisplayNames::default(),
        }
    }
}

/// Human-readable names for each topic, used in prompts and fallback text.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayNames {
    pub mmm_services: String,
    pub mmm_products: String,
    pub experimentation_products: String,
    pub general: String,
}

impl DisplayNames {
    pub fn name_for(&self, topic: ResponseTopic) -> &str {
        match topic {
            ResponseTopic::Bucket(Topic::MmmServices) => &self.mmm_services,
            ResponseTopic::Bucket(Topic::MmmProducts) => &self.mmm_products,
            ResponseTopic::Bucket(Topic::ExperimentationProducts) => {
                &self.experimentation_products
            }
            ResponseTopic::General => &self.general,
        }
    }
}

impl Default for DisplayNames {
    fn default() -> Self {
        Self {
            mmm_services: "MMM Services".to_string(),
            mmm_products: "MMM Products".to_string(),
            experimentation_products: "Experimentation Products".to_string(),
            general: "Aryma Labs Offerings".to_string(),
        }
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

fn default_base_url() -> String {
    "https://www.arymalabs.com".to_string()
}

fn default_demo_url() -> String {
    "https://www.arymalabs.com/#contact".to_string()
}

fn default_content_path() -> PathBuf {
    PathBuf::from("scraped_content.json")
}

fn default_max_pages() -> usize {
    10
}

fn default_main_content_chars() -> usize {
    2000
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_fetch_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, "https://www.arymalabs.com");
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.main_content_chars, 2000);
        assert_eq!(config.request_delay(), Duration::from_millis(1000));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display_names_per_topic() {
        let names = DisplayNames::default();
        assert_eq!(names.name_for(Topic::MmmServices.into()), "MMM Services");
        assert_eq!(names.name_for(Topic::MmmProducts.into()), "MMM Products");
        assert_eq!(
            names.name_for(Topic::ExperimentationProducts.into()),
            "Experimentation Products"
        );
        assert_eq!(names.name_for(ResponseTopic::General), "Aryma Labs Offerings");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = SiteConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSiteUrl(_))
        ));
    }

    #[test]
    fn test_demo_url_must_be_http() {
        let config = SiteConfig {
            demo_url: "ftp://arymalabs.com/demo".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDemoUrl(_))
        ));
    }

    #[test]
    fn test_zero_fetch_timeout_rejected() {
        let config = SiteConfig {
            fetch_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }
}
