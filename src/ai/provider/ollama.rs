//! Ollama Local LLM Provider
//!
//! LLM provider for locally-running Ollama models.
//! Returns [`Completion`] with token usage metrics reported by Ollama.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{Completion, CompletionRequest, LlmProvider, ProviderConfig, TokenUsage};
use crate::types::{Error, Result};

const SERVICE: &str = "ollama";
const DEFAULT_API_BASE: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3:latest";

/// Ollama Local LLM Provider
pub struct OllamaProvider {
    api_base: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        // Validate endpoint URL for security (SSRF prevention)
        let api_base = Self::validate_endpoint(&api_base)?;

        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::network(SERVICE, format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_base,
            model,
            client,
        })
    }

    /// Validate endpoint URL for security (SSRF prevention)
    ///
    /// Only allows http/https schemes and warns for non-localhost endpoints.
    fn validate_endpoint(endpoint: &str) -> Result<String> {
        let url = url::Url::parse(endpoint).map_err(|e| {
            Error::Config(format!("Invalid Ollama endpoint URL '{}': {}", endpoint, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Ollama endpoint must use http or https scheme, got: {}",
                url.scheme()
            )));
        }

        if let Some(host) = url.host_str()
            && !matches!(host, "localhost" | "127.0.0.1" | "::1")
        {
            warn!(
                "Ollama endpoint is not localhost: {}. Ensure this is intentional.",
                host
            );
        }

        let mut result = url.to_string();
        if result.ends_with('/') {
            result.pop();
        }
        Ok(result)
    }

    fn build_request(&self, request: &CompletionRequest) -> GenerateRequest {
        GenerateRequest {
            model: self.model.clone(),
            system: request.system.clone(),
            prompt: request.user.clone(),
            stream: false,
            options: Some(GenerateOptions {
                temperature: request.temperature,
            }),
            format: request.json_mode.then(|| "json".to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        info!(
            "Completing with Ollama (model: {}, temperature: {}, json: {})",
            self.model, request.temperature, request.json_mode
        );

        let start_time = Instant::now();
        let body = self.build_request(request);
        let url = format!("{}/api/generate", self.api_base);

        debug!("Sending request to Ollama API");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::network(
                        SERVICE,
                        format!(
                            "failed to connect to Ollama at {}. Is Ollama running? Start with: ollama serve",
                            self.api_base
                        ),
                    )
                } else {
                    Error::transport(SERVICE, e)
                }
            })?;

        let elapsed = start_time.elapsed();

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(SERVICE, status, body));
        }

        let response_body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::schema(SERVICE, format!("failed to parse response: {e}")))?;

        let usage = TokenUsage::from_ollama(
            response_body.prompt_eval_count.unwrap_or(0),
            response_body.eval_count.unwrap_or(0),
        );

        debug!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            elapsed_ms = elapsed.as_millis() as u64,
            "Received response from Ollama"
        );

        Ok(Completion {
            text: response_body.response,
            usage,
            elapsed,
            model: self.model.clone(),
        })
    }

    fn name(&self) -> &str {
        SERVICE
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.api_base);

        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("Ollama API is available");
                Ok(true)
            }
            Ok(resp) => {
                warn!("Ollama API check failed: {}", resp.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Ollama API check failed: {}", e);
                Ok(false)
            }
        }
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    system: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    prompt_eval_count: Option<u32>,
    eval_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_accepts_localhost() {
        let result = OllamaProvider::validate_endpoint("http://localhost:11434");
        assert_eq!(result.unwrap(), "http://localhost:11434");
    }

    #[test]
    fn test_validate_endpoint_strips_trailing_slash() {
        let result = OllamaProvider::validate_endpoint("http://127.0.0.1:11434/");
        assert_eq!(result.unwrap(), "http://127.0.0.1:11434");
    }

    #[test]
    fn test_validate_endpoint_rejects_non_http() {
        assert!(OllamaProvider::validate_endpoint("file:///etc/passwd").is_err());
        assert!(OllamaProvider::validate_endpoint("not a url").is_err());
    }
}
