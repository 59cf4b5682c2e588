//! Prompt Construction
//!
//! System/user prompt pairs for the outline and article requests.
//! Structure constraints (heading counts, title truncation, the table
//! guidance switch) live here so the gateways stay thin.

use crate::constants::serp::{MAX_RESULTS, TITLE_MAX_CHARS};
use crate::types::SearchResult;

// =============================================================================
// Outline Generation
// =============================================================================

/// System message for outline generation.
pub fn outline_system() -> String {
    "You are an SEO editor. Given a keyword and the current top search results, \
     you produce a clear, non-redundant heading structure (H2/H3/H4) that serves \
     the reader. Always respond with valid JSON."
        .to_string()
}

/// User message for outline generation: keyword, target word count, the
/// top search results (titles truncated), requirements, and the exact
/// JSON schema the response must follow.
pub fn outline_user(keyword: &str, serp: &[SearchResult], target_words: u32) -> String {
    let serp_lines: String = serp
        .iter()
        .take(MAX_RESULTS)
        .map(|r| format!("- {}. {} | {}\n", r.rank, truncate(&r.title, TITLE_MAX_CHARS), r.url))
        .collect();

    format!(
        r##"Keyword: {keyword}
Target length: about {target_words} words

Top search results (title and URL):
{serp_lines}
Requirements:
- Output JSON only. Do not abbreviate or elide anything.
- Produce 4-6 H2 sections, 2-4 H3 subsections per H2, and 2-4 H4 points per H3.
- Choose H2 sections appropriately from introduction / practice / caveats / case studies / FAQ / summary, aiming for coverage and a logical reading path.
- Reflect topics and related keywords that recur in the search results in the H3/H4 entries. Avoid duplication; keep headings specific enough to stand on their own.

JSON schema:
{{
  "h2": [
    {{ "title": "H2 title",
      "h3": [
        {{ "title": "H3 title", "h4": ["H4-1", "H4-2"] }}
      ]
    }}
  ],
  "targetWords": {target_words}
}}
Return JSON exactly matching the schema above."##
    )
}

// =============================================================================
// Article Generation
// =============================================================================

/// System message for article generation. `use_tables` switches the
/// Markdown-table guidance block.
pub fn article_system(tone: &str, audience: &str, use_tables: bool, target_words: u32) -> String {
    let table_guidance = if use_tables {
        r##"- For columnar information (figures, pricing, comparisons, specs, pros/cons), strongly prefer a Markdown table so readers can compare at a glance.
- Add one or two sentences before each table explaining how to read it.
- Never leave table cells empty, and do not force a table where the content is thin."##
    } else {
        r##"- Keep table usage restrained; when structure is needed, prefer bullet lists and small headings."##
    };

    format!(
        r##"You are a professional SEO writer. You write trustworthy, readable articles that solve the searcher's problem.
Tone: {tone}
Audience: {audience}
Style: short paragraphs, concrete examples, and evidence; avoid padding.
Important: aim for about {target_words} words (within 10 percent), optimizing information density.
{table_guidance}"##
    )
}

/// User message for article generation: keyword plus the indented
/// outline plan produced by [`crate::markdown::plan`].
pub fn article_user(keyword: &str, plan: &str) -> String {
    format!(
        r##"Keyword: {keyword}

Following the outline below, write the article body as Markdown in the order lead paragraph -> each heading's body -> conclusion.
Outline:
{plan}

Requirements:
- Keep the heading levels H2/H3/H4 exactly (##, ###, ####).
- Avoid repetition and filler; use proper nouns, concrete examples, and numbers where they help.
- Where it fits, add a short bullet summary or one-line takeaway inside each H2.
- Produce the body only (no title, no meta description). Use plain Markdown without code blocks."##
    )
}

/// Truncate to at most `max_chars` characters on a char boundary.
fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_user_lists_results_in_rank_order() {
        let serp = vec![
            SearchResult::new(1, "First", "https://a.example"),
            SearchResult::new(2, "Second", "https://b.example"),
        ];
        let prompt = outline_user("side hustle taxes", &serp, 3000);
        let first = prompt.find("1. First").unwrap();
        let second = prompt.find("2. Second").unwrap();
        assert!(first < second);
        assert!(prompt.contains("Keyword: side hustle taxes"));
        assert!(prompt.contains("about 3000 words"));
    }

    #[test]
    fn test_outline_user_truncates_long_titles() {
        let long_title = "x".repeat(200);
        let serp = vec![SearchResult::new(1, long_title, "https://a.example")];
        let prompt = outline_user("kw", &serp, 3000);
        assert!(prompt.contains(&"x".repeat(TITLE_MAX_CHARS)));
        assert!(!prompt.contains(&"x".repeat(TITLE_MAX_CHARS + 1)));
    }

    #[test]
    fn test_article_system_table_switch() {
        let with = article_system("tone", "aud", true, 2000);
        let without = article_system("tone", "aud", false, 2000);
        assert!(with.contains("Markdown table"));
        assert!(!without.contains("strongly prefer"));
        assert!(without.contains("restrained"));
    }

    #[test]
    fn test_article_user_embeds_plan() {
        let prompt = article_user("kw", "- H2: Intro");
        assert!(prompt.contains("- H2: Intro"));
        assert!(prompt.contains("##, ###, ####"));
    }
}
