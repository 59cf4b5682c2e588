//! AI Integration Layer
//!
//! LLM provider abstraction, prompt construction, and response
//! validation for outline and article generation.

pub mod prompt;
pub mod provider;
pub mod validation;

pub use provider::{
    Completion, CompletionRequest, LlmProvider, OllamaProvider, OpenAiProvider, ProviderConfig,
    SharedProvider, TokenUsage, create_provider,
};
pub use validation::{ensure_outline_shape, extract_json_from_response};
