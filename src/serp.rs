//! Search-Results Gateway
//!
//! One SerpAPI round trip per search, normalized into a small ranked
//! list. No retry; a non-success upstream status is surfaced to the
//! caller with the status and body intact.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::SerpConfig;
use crate::constants::serp::MAX_RESULTS;
use crate::types::{Error, Result, SearchResult};

const SERVICE: &str = "serp";

/// SerpAPI client with secure API key handling.
pub struct SerpClient {
    api_base: String,
    engine: String,
    locale: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl std::fmt::Debug for SerpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpClient")
            .field("api_base", &self.api_base)
            .field("engine", &self.engine)
            .field("locale", &self.locale)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl SerpClient {
    pub fn new(config: SerpConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .or_else(|| std::env::var("SERP_API_KEY").ok())
            .ok_or_else(|| {
                Error::Config(
                    "SerpAPI key not found. Set SERP_API_KEY env var or provide in config"
                        .to_string(),
                )
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::network(SERVICE, format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_base: config.api_base,
            engine: config.engine,
            locale: config.locale,
            api_key: SecretString::from(api_key_str),
            client,
        })
    }

    /// Fetch ranked results for a query.
    ///
    /// A blank query resolves to an empty list without issuing a network
    /// call. Results are truncated to the first ten and ranked 1-based in
    /// upstream order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            debug!("Blank query, skipping search round trip");
            return Ok(Vec::new());
        }

        info!(query, "Fetching search results");

        let url = format!("{}/search.json", self.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", self.engine.as_str()),
                ("hl", self.locale.as_str()),
                ("num", "10"),
                ("q", query),
                ("api_key", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| Error::transport(SERVICE, e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(SERVICE, status, body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::schema(SERVICE, format!("failed to parse response: {e}")))?;

        let results = normalize_results(&body);
        debug!(count = results.len(), "Normalized search results");
        Ok(results)
    }
}

/// Reduce an upstream response body to the normalized result shape.
///
/// The results list may arrive under `results` or `organic_results`
/// depending on how the response was proxied; both are accepted. Items
/// missing a title or link normalize to empty strings rather than being
/// dropped, preserving upstream ordering and ranks.
fn normalize_results(body: &Value) -> Vec<SearchResult> {
    let list = body
        .get("results")
        .and_then(Value::as_array)
        .or_else(|| body.get("organic_results").and_then(Value::as_array));

    let Some(list) = list else {
        return Vec::new();
    };

    list.iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(i, item)| {
            let title = item.get("title").and_then(Value::as_str).unwrap_or("");
            let url = item
                .get("link")
                .and_then(Value::as_str)
                .or_else(|| item.get("url").and_then(Value::as_str))
                .unwrap_or("");
            SearchResult::new(i as u32 + 1, title, url)
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_truncates_and_ranks() {
        let items: Vec<Value> = (0..15)
            .map(|i| json!({"title": format!("t{i}"), "link": format!("https://x/{i}")}))
            .collect();
        let body = json!({ "organic_results": items });

        let results = normalize_results(&body);
        assert_eq!(results.len(), 10);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.rank, i as u32 + 1);
            assert_eq!(r.title, format!("t{i}"));
        }
    }

    #[test]
    fn test_normalize_accepts_results_field() {
        let body = json!({
            "results": [{"title": "a", "link": "https://a"}]
        });
        let results = normalize_results(&body);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://a");
    }

    #[test]
    fn test_normalize_prefers_results_over_organic() {
        let body = json!({
            "results": [{"title": "from-results", "link": "https://a"}],
            "organic_results": [{"title": "from-organic", "link": "https://b"}]
        });
        let results = normalize_results(&body);
        assert_eq!(results[0].title, "from-results");
    }

    #[test]
    fn test_normalize_defaults_missing_fields() {
        let body = json!({ "organic_results": [{"position": 1}] });
        let results = normalize_results(&body);
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].url, "");
        assert_eq!(results[0].rank, 1);
    }

    #[test]
    fn test_normalize_unknown_shape_is_empty() {
        assert!(normalize_results(&json!({"data": []})).is_empty());
        assert!(normalize_results(&json!({"results": "nope"})).is_empty());
    }

    #[test]
    fn test_normalize_accepts_url_alias() {
        let body = json!({ "results": [{"title": "a", "url": "https://alias"}] });
        assert_eq!(normalize_results(&body)[0].url, "https://alias");
    }
}
