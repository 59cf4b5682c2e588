//! Article-Generation Gateway
//!
//! Expands a finalized outline into a full Markdown article. Fails
//! before any network call when there is nothing to expand. The target
//! word count is advisory content in the prompt, not locally enforced.

use tracing::{debug, info};

use crate::ai::{CompletionRequest, SharedProvider, prompt};
use crate::constants::article::{DEFAULT_AUDIENCE, DEFAULT_TONE};
use crate::constants::outline::DEFAULT_TARGET_WORDS;
use crate::markdown;
use crate::types::{Error, Outline, Result};

/// Options shaping the article prompt.
#[derive(Debug, Clone)]
pub struct ArticleOptions {
    /// Advisory word count passed to the generation request
    pub target_words: u32,
    /// Writing tone
    pub tone: String,
    /// Reader profile
    pub audience: String,
    /// Prefer tabular presentation for comparable/numeric content
    pub use_tables: bool,
}

impl Default for ArticleOptions {
    fn default() -> Self {
        Self {
            target_words: DEFAULT_TARGET_WORDS,
            tone: DEFAULT_TONE.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            use_tables: true,
        }
    }
}

/// Article expansion over a shared LLM provider.
pub struct ArticleGenerator {
    provider: SharedProvider,
}

impl ArticleGenerator {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Expand the outline into Markdown prose.
    ///
    /// Fails with a precondition error, without touching the network,
    /// when the outline has no sections.
    pub async fn generate(
        &self,
        keyword: &str,
        outline: &Outline,
        options: &ArticleOptions,
    ) -> Result<String> {
        if outline.is_empty() {
            return Err(Error::Precondition(
                "the outline is empty; generate or add sections first".to_string(),
            ));
        }

        info!(
            keyword,
            target_words = options.target_words,
            use_tables = options.use_tables,
            "Generating article"
        );

        let plan = markdown::plan(outline);
        let request = CompletionRequest::text(
            prompt::article_system(
                &options.tone,
                &options.audience,
                options.use_tables,
                options.target_words,
            ),
            prompt::article_user(keyword, &plan),
        );

        let completion = self.provider.complete(&request).await?;
        debug!(chars = completion.text.len(), "Article generated");
        Ok(completion.text)
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

    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmProvider for CountingProvider {
        async fn complete(&self, request: &CompletionRequest) -> crate::types::Result<Completion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // echo the user prompt so tests can inspect what was sent
            Ok(Completion {
                text: request.user.clone(),
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
    async fn test_empty_outline_fails_without_network_call() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let generator = ArticleGenerator::new(provider.clone());

        let err = generator
            .generate("kw", &Outline::default(), &ArticleOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Precondition(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_embeds_outline_plan() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let generator = ArticleGenerator::new(provider.clone());

        let mut outline = Outline::default();
        outline.add_section();
        outline.set_section_title(0, "Intro");

        let text = generator
            .generate("kw", &outline, &ArticleOptions::default())
            .await
            .unwrap();

        assert!(text.contains("- H2: Intro"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
