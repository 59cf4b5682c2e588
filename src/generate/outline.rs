//! Outline-Generation Gateway
//!
//! Sends keyword + search results to the LLM and expects strict JSON
//! matching the outline wire schema. Validation is shallow: only the
//! top-level `h2` array is checked; nested content deserializes with
//! defaults and flows through to the caller.

use serde_json::Value;
use tracing::{debug, info};

use crate::ai::{
    CompletionRequest, SharedProvider, ensure_outline_shape, extract_json_from_response, prompt,
};
use crate::types::{Error, Outline, Result, SearchResult};

/// Outline synthesis over a shared LLM provider.
pub struct OutlineGenerator {
    provider: SharedProvider,
}

impl OutlineGenerator {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Generate a full replacement outline.
    ///
    /// On any failure the caller's existing outline must remain
    /// unchanged; this function only ever returns a complete,
    /// syntactically valid tree. A `targetWords` value in the response
    /// supersedes the requested one.
    pub async fn generate(
        &self,
        keyword: &str,
        serp: &[SearchResult],
        target_words: u32,
    ) -> Result<Outline> {
        info!(keyword, target_words, "Generating outline");

        let request = CompletionRequest::json(
            prompt::outline_system(),
            prompt::outline_user(keyword, serp, target_words),
        );
        let completion = self.provider.complete(&request).await?;

        let service = self.provider.name();
        let value = extract_json_from_response(service, &completion.text)?;
        ensure_outline_shape(service, &value)?;

        let returned_target = value.get("targetWords").and_then(Value::as_u64);
        let mut outline: Outline = serde_json::from_value(value)
            .map_err(|e| Error::schema(service, format!("outline did not deserialize: {e}")))?;
        if returned_target.is_none() {
            outline.target_words = target_words;
        }

        debug!(
            sections = outline.sections.len(),
            target_words = outline.target_words,
            "Outline generated"
        );
        Ok(outline)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Completion, CompletionRequest, LlmProvider, TokenUsage};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider stub returning canned text and counting round trips.
    struct CannedProvider {
        reply: String,
        calls: AtomicUsize,
    }

    impl CannedProvider {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        async fn complete(&self, _request: &CompletionRequest) -> crate::types::Result<Completion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Completion {
                text: self.reply.clone(),
                usage: TokenUsage::default(),
                elapsed: std::time::Duration::ZERO,
                model: "canned".to_string(),
            })
        }

        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned"
        }

        async fn health_check(&self) -> crate::types::Result<bool> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_generate_parses_valid_outline() {
        let provider = CannedProvider::new(
            r#"{"h2": [{"title": "Intro", "h3": [{"title": "Why", "h4": ["Point"]}]}], "targetWords": 2500}"#,
        );
        let generator = OutlineGenerator::new(provider.clone());

        let outline = generator.generate("kw", &[], 3000).await.unwrap();
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.sections[0].subsections[0].points[0], "Point");
        // returned targetWords wins over the requested value
        assert_eq!(outline.target_words, 2500);
    }

    #[tokio::test]
    async fn test_generate_defaults_target_words_to_request() {
        let provider = CannedProvider::new(r#"{"h2": []}"#);
        let generator = OutlineGenerator::new(provider);

        let outline = generator.generate("kw", &[], 1800).await.unwrap();
        assert_eq!(outline.target_words, 1800);
    }

    #[tokio::test]
    async fn test_generate_rejects_bad_shape() {
        let provider = CannedProvider::new(r#"{"h2": "not-an-array"}"#);
        let generator = OutlineGenerator::new(provider);

        let err = generator.generate("kw", &[], 3000).await.unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[tokio::test]
    async fn test_generate_tolerates_sparse_sections() {
        let provider = CannedProvider::new(r#"{"h2": [{"title": "Only title"}]}"#);
        let generator = OutlineGenerator::new(provider);

        let outline = generator.generate("kw", &[], 3000).await.unwrap();
        assert!(outline.sections[0].subsections.is_empty());
    }
}
