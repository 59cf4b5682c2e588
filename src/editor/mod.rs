//! Editor Surface
//!
//! Sequences user intents (debounced search-on-type, explicit
//! generate/edit/reorder/copy/export actions) into gateway calls, and
//! tracks one mutually-exclusive busy flag plus one error message per
//! asynchronous action family so a failure in one family never clobbers
//! another family's in-flight state.
//!
//! All state lives in [`EditorState`]; the interactive terminal loop in
//! [`session`] owns one instance for the lifetime of the session and is
//! its only mutator. Completions are applied last-write-wins: in-flight
//! requests are never cancelled, and whichever response arrives last
//! determines the slot's final value.

pub mod debounce;
pub mod session;

pub use debounce::Debouncer;
pub use session::EditorSession;

use crate::types::{Error, Keyword, Outline, SearchResult};

// =============================================================================
// Per-action State Machine
// =============================================================================

/// Lifecycle of one asynchronous action family:
/// Idle -> Pending -> {Success, Failed} -> Idle.
///
/// `Success` is a transient indicator; the session clears it back to
/// `Idle` after a fixed short duration without user interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
    Success,
    Failed(String),
}

impl ActionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Human-readable error message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// Editor State
// =============================================================================

/// The whole per-session editing state: the keyword, the latest search
/// results, the outline under edit, the latest generated article, the
/// generation options, and one [`ActionState`] per async action family.
#[derive(Debug, Default)]
pub struct EditorState {
    pub keyword: Keyword,
    pub serp: Vec<SearchResult>,
    pub outline: Outline,
    pub article: Option<String>,
    pub use_tables: bool,

    pub search: ActionState,
    pub outline_gen: ActionState,
    pub article_gen: ActionState,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            use_tables: true,
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Search family
    // -------------------------------------------------------------------------

    pub fn begin_search(&mut self) {
        self.search = ActionState::Pending;
    }

    /// Apply a search completion. The result list is fully replaced on
    /// success and left untouched on failure.
    pub fn finish_search(&mut self, result: crate::types::Result<Vec<SearchResult>>) {
        match result {
            Ok(items) => {
                self.serp = items;
                self.search = ActionState::Idle;
            }
            Err(err) => self.search = ActionState::Failed(user_message(&err)),
        }
    }

    // -------------------------------------------------------------------------
    // Outline-generation family
    // -------------------------------------------------------------------------

    pub fn begin_outline_gen(&mut self) {
        self.outline_gen = ActionState::Pending;
    }

    /// Apply an outline completion: full replace on success (including
    /// the target word count the response settled on), prior tree
    /// untouched on failure.
    pub fn finish_outline_gen(&mut self, result: crate::types::Result<Outline>) {
        match result {
            Ok(outline) => {
                self.outline = outline;
                self.outline_gen = ActionState::Success;
            }
            Err(err) => self.outline_gen = ActionState::Failed(user_message(&err)),
        }
    }

    /// Clear the transient success indicator once its flash period ends.
    pub fn clear_outline_flash(&mut self) {
        if self.outline_gen == ActionState::Success {
            self.outline_gen = ActionState::Idle;
        }
    }

    // -------------------------------------------------------------------------
    // Article-generation family
    // -------------------------------------------------------------------------

    pub fn begin_article_gen(&mut self) {
        self.article = None;
        self.article_gen = ActionState::Pending;
    }

    pub fn finish_article_gen(&mut self, result: crate::types::Result<String>) {
        match result {
            Ok(markdown) => {
                self.article = Some(markdown);
                self.article_gen = ActionState::Idle;
            }
            Err(err) => self.article_gen = ActionState::Failed(user_message(&err)),
        }
    }

    // -------------------------------------------------------------------------
    // Outline intents
    // -------------------------------------------------------------------------

    /// Reorder capability behind the drag affordance: a missing drop
    /// target (gesture cancelled outside any valid position) is a no-op.
    pub fn reorder_sections(&mut self, from: usize, to: Option<usize>) {
        let Some(to) = to else { return };
        self.outline.reorder_sections(from, to);
    }

    /// Set the target word count for generation, clamped to the floor.
    pub fn set_target_words(&mut self, words: u32) {
        self.outline.set_target_words(words);
    }

    pub fn target_words(&self) -> u32 {
        self.outline.target_words
    }
}

/// Render an error as the per-action human-readable message stored in
/// the editor state.
fn user_message(err: &Error) -> String {
    err.to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Error;

    fn outline_with_sections(n: usize) -> Outline {
        let mut outline = Outline::default();
        for i in 0..n {
            outline.add_section();
            outline.set_section_title(i, format!("s{i}"));
        }
        outline
    }

    #[test]
    fn test_search_success_replaces_list() {
        let mut state = EditorState::new();
        state.serp = vec![SearchResult::new(1, "old", "https://old")];
        state.begin_search();
        assert!(state.search.is_pending());

        state.finish_search(Ok(vec![SearchResult::new(1, "new", "https://new")]));
        assert_eq!(state.search, ActionState::Idle);
        assert_eq!(state.serp.len(), 1);
        assert_eq!(state.serp[0].title, "new");
    }

    #[test]
    fn test_search_failure_keeps_previous_results() {
        let mut state = EditorState::new();
        state.serp = vec![SearchResult::new(1, "kept", "https://kept")];
        state.begin_search();
        state.finish_search(Err(Error::upstream("serp", 401, "bad key")));

        assert!(state.search.error().unwrap().contains("401"));
        assert_eq!(state.serp[0].title, "kept");
    }

    #[test]
    fn test_failure_in_one_family_does_not_clobber_another() {
        let mut state = EditorState::new();
        state.begin_article_gen();
        state.begin_outline_gen();
        state.finish_outline_gen(Err(Error::schema("openai", "bad shape")));

        // the in-flight article generation is untouched
        assert!(state.article_gen.is_pending());
        assert!(state.outline_gen.error().is_some());
    }

    #[test]
    fn test_outline_failure_leaves_tree_unchanged() {
        let mut state = EditorState::new();
        state.outline = outline_with_sections(2);
        let before = state.outline.clone();

        state.begin_outline_gen();
        state.finish_outline_gen(Err(Error::schema("openai", "h2 not array")));
        assert_eq!(state.outline, before);
    }

    #[test]
    fn test_outline_success_flash_lifecycle() {
        let mut state = EditorState::new();
        state.begin_outline_gen();
        state.finish_outline_gen(Ok(outline_with_sections(3)));
        assert_eq!(state.outline_gen, ActionState::Success);
        assert_eq!(state.outline.sections.len(), 3);

        state.clear_outline_flash();
        assert_eq!(state.outline_gen, ActionState::Idle);
    }

    #[test]
    fn test_flash_clear_does_not_erase_failure() {
        let mut state = EditorState::new();
        state.finish_outline_gen(Err(Error::network("openai", "offline")));
        state.clear_outline_flash();
        assert!(state.outline_gen.error().is_some());
    }

    #[test]
    fn test_article_begin_clears_previous_article() {
        let mut state = EditorState::new();
        state.article = Some("old draft".to_string());
        state.begin_article_gen();
        assert!(state.article.is_none());

        state.finish_article_gen(Ok("## fresh".to_string()));
        assert_eq!(state.article.as_deref(), Some("## fresh"));
        assert_eq!(state.article_gen, ActionState::Idle);
    }

    #[test]
    fn test_last_write_wins_on_overlapping_completions() {
        let mut state = EditorState::new();
        state.begin_article_gen();
        state.finish_article_gen(Ok("first".to_string()));
        state.finish_article_gen(Ok("second".to_string()));
        assert_eq!(state.article.as_deref(), Some("second"));
    }

    #[test]
    fn test_reorder_with_missing_target_is_noop() {
        let mut state = EditorState::new();
        state.outline = outline_with_sections(3);
        let before = state.outline.clone();

        state.reorder_sections(0, None);
        assert_eq!(state.outline, before);

        state.reorder_sections(0, Some(2));
        let titles: Vec<_> = state.outline.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["s1", "s2", "s0"]);
    }

    #[test]
    fn test_target_words_clamped() {
        let mut state = EditorState::new();
        state.set_target_words(10);
        assert_eq!(state.target_words(), 200);
    }
}
