//! Search Result Types
//!
//! The normalized shape every upstream search response is reduced to.

use serde::{Deserialize, Serialize};

/// One ranked organic search result.
///
/// Immutable once fetched; the list it belongs to is fully replaced on
/// each search, never merged. `rank` is 1-based and matches the upstream
/// ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub rank: u32,
    pub title: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(rank: u32, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            rank,
            title: title.into(),
            url: url.into(),
        }
    }
}
