//! Application configuration structures.
//!
//! Every fixed value the crawler depends on (User-Agent, endpoints,
//! selectors, blocklist tokens, cleaning toggles) lives here as explicit
//! immutable configuration so tests can substitute alternatives.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Search-results collection settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Article body extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Text normalization settings
    #[serde(default)]
    pub cleaning: CleaningConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.search.endpoint.trim().is_empty() {
            return Err(AppError::validation("search.endpoint is empty"));
        }
        if self.search.article_prefix.trim().is_empty() {
            return Err(AppError::validation("search.article_prefix is empty"));
        }
        if self.extract.body_selectors.is_empty() {
            return Err(AppError::validation("extract.body_selectors is empty"));
        }
        if self.extract.min_line_chars == 0 {
            return Err(AppError::validation("extract.min_line_chars must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests (mobile browser-like)
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Search-results collection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Mobile news search endpoint
    #[serde(default = "defaults::search_endpoint")]
    pub endpoint: String,

    /// URL prefix identifying article links in search results
    #[serde(default = "defaults::article_prefix")]
    pub article_prefix: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::search_endpoint(),
            article_prefix: defaults::article_prefix(),
        }
    }
}

/// Article body extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Candidate body containers, tried in order; first match wins
    #[serde(default = "defaults::body_selectors")]
    pub body_selectors: Vec<String>,

    /// Minimum character count for a line to count as body text
    #[serde(default = "defaults::min_line_chars")]
    pub min_line_chars: usize,

    /// Lines containing any of these tokens are dropped as boilerplate
    #[serde(default = "defaults::blocklist")]
    pub blocklist: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            body_selectors: defaults::body_selectors(),
            min_line_chars: defaults::min_line_chars(),
            blocklist: defaults::blocklist(),
        }
    }
}

/// Text normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Also strip outlet-credit phrases and remaining email addresses
    /// after the tagging pass
    #[serde(default = "defaults::strip_outlet_credits")]
    pub strip_outlet_credits: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            strip_outlet_credits: defaults::strip_outlet_credits(),
        }
    }
}

mod defaults {
    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 \
         Mobile/15A5341f Safari/604.1"
            .into()
    }
    pub fn timeout() -> u64 {
        5
    }

    // Search defaults
    pub fn search_endpoint() -> String {
        "https://m.search.naver.com/search.naver".into()
    }
    pub fn article_prefix() -> String {
        "https://n.news.naver.com/article/".into()
    }

    // Extraction defaults
    pub fn body_selectors() -> Vec<String> {
        vec![
            "#newsct_article".into(),
            "#articleBodyContents".into(),
            "#newsEndContents".into(),
        ]
    }
    pub fn min_line_chars() -> usize {
        30
    }
    pub fn blocklist() -> Vec<String> {
        vec![
            "구독".into(),
            "언론사".into(),
            "댓글".into(),
            "프리미엄".into(),
            "beta".into(),
        ]
    }

    // Cleaning defaults
    pub fn strip_outlet_credits() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.crawler.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_selectors() {
        let mut config = Config::default();
        config.extract.body_selectors.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [crawler]
            timeout_secs = 10

            [extract]
            min_line_chars = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.crawler.timeout_secs, 10);
        assert_eq!(config.extract.min_line_chars, 20);
        assert!(!config.crawler.user_agent.is_empty());
        assert_eq!(config.extract.body_selectors.len(), 3);
        assert!(config.cleaning.strip_outlet_credits);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert!(config.validate().is_ok());
    }
}
