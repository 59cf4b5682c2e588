//! LLM Provider Abstraction
//!
//! Defines the LlmProvider trait for chat-style text completion.
//! All providers return [`Completion`] with token usage metrics for cost
//! visibility. A completion is one best-effort round trip: no retry, no
//! fallback chain; failures surface to the caller as-is.

mod ollama;
mod openai;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::constants::{generation, network};
use crate::types::{Error, Result};

// =============================================================================
// Completion Request / Response
// =============================================================================

/// A single system+user chat completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System message establishing the assistant's role
    pub system: String,
    /// User message carrying the task
    pub user: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Request strict-JSON output from the provider
    pub json_mode: bool,
}

impl CompletionRequest {
    /// Build a JSON-mode request (outline generation).
    pub fn json(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: generation::OUTLINE_TEMPERATURE,
            json_mode: true,
        }
    }

    /// Build a free-text request (article generation).
    pub fn text(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: generation::ARTICLE_TEMPERATURE,
            json_mode: false,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Complete LLM response: content plus usage and timing metrics.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Raw text content of the completion
    pub text: String,
    /// Token usage metrics
    pub usage: TokenUsage,
    /// Wall-clock response time
    pub elapsed: Duration,
    /// Model that produced the response
    pub model: String,
}

/// Token usage metrics for cost visibility
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (response)
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }

    /// Create from OpenAI-style usage response
    pub fn from_openai(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            input_tokens: prompt_tokens,
            output_tokens: completion_tokens,
        }
    }

    /// Create from Ollama-style usage response
    pub fn from_ollama(prompt_eval_count: u32, eval_count: u32) -> Self {
        Self {
            input_tokens: prompt_eval_count,
            output_tokens: eval_count,
        }
    }
}

/// Shared LLM provider type for concurrent access across editor actions.
pub type SharedProvider = Arc<dyn LlmProvider + Send + Sync>;

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for LLM providers
///
/// Note: API keys are handled securely - they are never serialized to
/// output and are redacted in debug output. Each provider converts the
/// key to SecretString internally for runtime protection.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider type: "openai", "ollama"
    pub provider: String,
    /// Model name (provider-specific)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API key (for OpenAI)
    /// Never serialized to output for security
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL (for custom endpoints)
    #[serde(default)]
    pub api_base: Option<String>,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

fn default_max_tokens() -> usize {
    4096
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            api_key: None,
            api_base: None,
            max_tokens: 4096,
        }
    }
}

// =============================================================================
// LLM Provider Trait
// =============================================================================

/// LLM Provider trait for chat completion with usage metrics
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one completion round trip.
    ///
    /// Returns [`Completion`] containing both the content and usage
    /// metrics. All providers must populate usage metrics.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is available
    async fn health_check(&self) -> Result<bool>;
}

/// Create a shared provider from configuration
pub fn create_provider(config: &ProviderConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiProvider::new(config.clone())?)),
        "ollama" => Ok(Arc::new(OllamaProvider::new(config.clone())?)),
        _ => Err(Error::Config(format!(
            "Unknown provider: {}. Supported: openai, ollama",
            config.provider
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_debug_redacts_key() {
        let config = ProviderConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_create_provider_rejects_unknown() {
        let config = ProviderConfig {
            provider: "palm".to_string(),
            ..Default::default()
        };
        assert!(create_provider(&config).is_err());
    }

    #[test]
    fn test_request_modes() {
        let json = CompletionRequest::json("sys", "user");
        assert!(json.json_mode);
        let text = CompletionRequest::text("sys", "user");
        assert!(!text.json_mode);
        assert!(text.temperature > json.temperature);
    }
}
