//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/seoscribe/) and project (.seoscribe/)
//! level configuration.

use serde::{Deserialize, Serialize};

use crate::ai::ProviderConfig;
use crate::constants::{article, editor, network, outline, serp};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Search-results gateway settings
    pub serp: SerpConfig,

    /// LLM provider settings
    pub llm: ProviderConfig,

    /// Article generation defaults
    pub article: ArticleConfig,

    /// Editor surface settings
    pub editor: EditorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            serp: SerpConfig::default(),
            llm: ProviderConfig::default(),
            article: ArticleConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `Error::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.llm.timeout_secs == 0 {
            return Err(crate::types::Error::Config(
                "llm timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.serp.timeout_secs == 0 {
            return Err(crate::types::Error::Config(
                "serp timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.article.target_words < outline::MIN_TARGET_WORDS {
            return Err(crate::types::Error::Config(format!(
                "article target_words must be at least {}, got {}",
                outline::MIN_TARGET_WORDS,
                self.article.target_words
            )));
        }

        if self.editor.debounce_ms == 0 {
            return Err(crate::types::Error::Config(
                "editor debounce_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Search-Results Gateway Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerpConfig {
    /// SerpAPI endpoint
    pub api_base: String,

    /// Search engine parameter
    pub engine: String,

    /// Interface-language parameter (`hl`)
    pub locale: String,

    /// API key; never serialized to output for security
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SerpConfig {
    fn default() -> Self {
        Self {
            api_base: serp::DEFAULT_API_BASE.to_string(),
            engine: serp::DEFAULT_ENGINE.to_string(),
            locale: serp::DEFAULT_LOCALE.to_string(),
            api_key: None,
            timeout_secs: network::SERP_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Article Generation Defaults
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleConfig {
    /// Default advisory word count
    pub target_words: u32,

    /// Default writing tone
    pub tone: String,

    /// Default reader profile
    pub audience: String,

    /// Prefer tabular presentation for comparable/numeric content
    pub use_tables: bool,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            target_words: outline::DEFAULT_TARGET_WORDS,
            tone: article::DEFAULT_TONE.to_string(),
            audience: article::DEFAULT_AUDIENCE.to_string(),
            use_tables: true,
        }
    }
}

// =============================================================================
// Editor Surface Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Quiet window for search-on-type debouncing (milliseconds)
    pub debounce_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: editor::DEBOUNCE_MS,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tiny_target_words() {
        let mut config = Config::default();
        config.article.target_words = 50;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_skips_api_keys() {
        let mut config = Config::default();
        config.serp.api_key = Some("serp-secret".to_string());
        config.llm.api_key = Some("llm-secret".to_string());

        let toml = toml::to_string(&config).unwrap();
        assert!(!toml.contains("serp-secret"));
        assert!(!toml.contains("llm-secret"));
    }
}
