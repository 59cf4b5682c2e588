//! Outline Tree Model
//!
//! The three-level heading hierarchy (Section -> Subsection -> point)
//! representing an article's structure before prose is written, plus its
//! structural mutation operations.
//!
//! All mutations take indices derived from the currently rendered list.
//! An out-of-range index makes the operation a silent no-op; mutations
//! never panic. Sequence order is meaningful and is preserved through
//! every mutation and through serialization.
//!
//! Wire format (shared with the LLM outline response):
//!
//! ```json
//! {
//!   "h2": [
//!     { "title": "...", "h3": [ { "title": "...", "h4": ["..."] } ] }
//!   ],
//!   "targetWords": 3000
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::outline::{
    DEFAULT_POINT_TEXT, DEFAULT_SECTION_TITLE, DEFAULT_SUBSECTION_TITLE, DEFAULT_TARGET_WORDS,
    MIN_TARGET_WORDS,
};

// =============================================================================
// Tree Nodes
// =============================================================================

/// An H3-level subsection: a title plus its H4-level points.
///
/// Both fields default when absent so that a leniently parsed LLM
/// response never produces an unrepresentable node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "h4", default)]
    pub points: Vec<String>,
}

impl Subsection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: Vec::new(),
        }
    }
}

/// An H2-level section: a title plus its subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "h3", default)]
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subsections: Vec::new(),
        }
    }
}

// =============================================================================
// Outline
// =============================================================================

/// The root artifact: an ordered sequence of sections plus the target
/// word count for article generation.
///
/// Owned by the editor session for its duration; populated wholesale by
/// the outline-generation round trip (full replace, never a merge), then
/// mutated node-by-node by user actions, and discarded with the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    #[serde(rename = "h2", default)]
    pub sections: Vec<Section>,
    #[serde(rename = "targetWords", default = "default_target_words")]
    pub target_words: u32,
}

fn default_target_words() -> u32 {
    DEFAULT_TARGET_WORDS
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            target_words: DEFAULT_TARGET_WORDS,
        }
    }
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    // -------------------------------------------------------------------------
    // Section (H2) mutations
    // -------------------------------------------------------------------------

    /// Append a new section with the default placeholder title.
    pub fn add_section(&mut self) {
        self.sections.push(Section::new(DEFAULT_SECTION_TITLE));
    }

    pub fn set_section_title(&mut self, section: usize, title: impl Into<String>) {
        if let Some(s) = self.sections.get_mut(section) {
            s.title = title.into();
        }
    }

    pub fn remove_section(&mut self, section: usize) {
        if section < self.sections.len() {
            self.sections.remove(section);
        }
    }

    /// Move one section to a new position, preserving the relative order
    /// of all other sections. No-op when `from` is out of range; the
    /// insert position is clamped to the end of the sequence.
    ///
    /// Only top-level reordering is supported; subsections and points
    /// keep their authored order.
    pub fn reorder_sections(&mut self, from: usize, to: usize) {
        if from >= self.sections.len() {
            return;
        }
        let moved = self.sections.remove(from);
        let to = to.min(self.sections.len());
        self.sections.insert(to, moved);
    }

    // -------------------------------------------------------------------------
    // Subsection (H3) mutations
    // -------------------------------------------------------------------------

    pub fn add_subsection(&mut self, section: usize) {
        if let Some(s) = self.sections.get_mut(section) {
            s.subsections.push(Subsection::new(DEFAULT_SUBSECTION_TITLE));
        }
    }

    pub fn set_subsection_title(
        &mut self,
        section: usize,
        subsection: usize,
        title: impl Into<String>,
    ) {
        if let Some(sub) = self
            .sections
            .get_mut(section)
            .and_then(|s| s.subsections.get_mut(subsection))
        {
            sub.title = title.into();
        }
    }

    pub fn remove_subsection(&mut self, section: usize, subsection: usize) {
        if let Some(s) = self.sections.get_mut(section)
            && subsection < s.subsections.len()
        {
            s.subsections.remove(subsection);
        }
    }

    // -------------------------------------------------------------------------
    // Point (H4) mutations
    // -------------------------------------------------------------------------

    pub fn add_point(&mut self, section: usize, subsection: usize) {
        if let Some(sub) = self
            .sections
            .get_mut(section)
            .and_then(|s| s.subsections.get_mut(subsection))
        {
            sub.points.push(DEFAULT_POINT_TEXT.to_string());
        }
    }

    pub fn set_point(
        &mut self,
        section: usize,
        subsection: usize,
        point: usize,
        text: impl Into<String>,
    ) {
        if let Some(p) = self
            .sections
            .get_mut(section)
            .and_then(|s| s.subsections.get_mut(subsection))
            .and_then(|sub| sub.points.get_mut(point))
        {
            *p = text.into();
        }
    }

    pub fn remove_point(&mut self, section: usize, subsection: usize, point: usize) {
        if let Some(sub) = self
            .sections
            .get_mut(section)
            .and_then(|s| s.subsections.get_mut(subsection))
            && point < sub.points.len()
        {
            sub.points.remove(point);
        }
    }

    // -------------------------------------------------------------------------
    // Target word count
    // -------------------------------------------------------------------------

    /// Set the target word count, clamped to the minimum floor.
    pub fn set_target_words(&mut self, words: u32) {
        self.target_words = words.max(MIN_TARGET_WORDS);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three_sections() -> Outline {
        let mut outline = Outline::default();
        for title in ["A", "B", "C"] {
            outline.add_section();
            let last = outline.sections.len() - 1;
            outline.set_section_title(last, title);
        }
        outline
    }

    fn titles(outline: &Outline) -> Vec<&str> {
        outline.sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_add_section_uses_placeholder_title() {
        let mut outline = Outline::default();
        outline.add_section();
        assert_eq!(outline.sections.len(), 1);
        assert!(!outline.sections[0].title.is_empty());
        assert!(outline.sections[0].subsections.is_empty());
    }

    #[test]
    fn test_mutation_deltas() {
        let mut outline = Outline::default();
        outline.add_section();
        outline.add_subsection(0);
        outline.add_subsection(0);
        outline.add_point(0, 1);
        assert_eq!(outline.sections[0].subsections.len(), 2);
        assert_eq!(outline.sections[0].subsections[1].points.len(), 1);

        outline.remove_point(0, 1, 0);
        assert_eq!(outline.sections[0].subsections[1].points.len(), 0);
        outline.remove_subsection(0, 0);
        assert_eq!(outline.sections[0].subsections.len(), 1);
        outline.remove_section(0);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_out_of_range_mutations_are_noops() {
        let mut outline = three_sections();
        let before = outline.clone();

        outline.set_section_title(3, "X");
        outline.remove_section(7);
        outline.add_subsection(3);
        outline.set_subsection_title(0, 5, "X");
        outline.remove_subsection(1, 0);
        outline.add_point(0, 0);
        outline.set_point(0, 0, 0, "X");
        outline.remove_point(2, 9, 9);

        assert_eq!(outline, before);
    }

    #[test]
    fn test_sibling_order_preserved_outside_mutated_path() {
        let mut outline = three_sections();
        outline.add_subsection(1);
        outline.set_subsection_title(1, 0, "B.1");

        outline.set_section_title(1, "B'");
        assert_eq!(titles(&outline), vec!["A", "B'", "C"]);
        assert_eq!(outline.sections[1].subsections[0].title, "B.1");

        outline.remove_section(0);
        assert_eq!(titles(&outline), vec!["B'", "C"]);
    }

    #[test]
    fn test_reorder_sections() {
        let mut outline = three_sections();
        outline.reorder_sections(0, 2);
        assert_eq!(titles(&outline), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_out_of_range_from_is_noop() {
        let mut outline = three_sections();
        outline.reorder_sections(5, 0);
        assert_eq!(titles(&outline), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_clamps_target() {
        let mut outline = three_sections();
        outline.reorder_sections(0, 99);
        assert_eq!(titles(&outline), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_target_words_floor() {
        let mut outline = Outline::default();
        outline.set_target_words(50);
        assert_eq!(outline.target_words, 200);
        outline.set_target_words(4500);
        assert_eq!(outline.target_words, 4500);
    }

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{
            "h2": [
                {"title": "Intro", "h3": [{"title": "Why", "h4": ["Because"]}]},
                {"title": "FAQ"}
            ],
            "targetWords": 2400
        }"#;
        let outline: Outline = serde_json::from_str(json).unwrap();
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.target_words, 2400);
        // absent h3 defaults to empty
        assert!(outline.sections[1].subsections.is_empty());

        let value = serde_json::to_value(&outline).unwrap();
        assert!(value.get("h2").is_some());
        assert!(value["h2"][0].get("h3").is_some());
        assert_eq!(value["targetWords"], 2400);
    }

    #[test]
    fn test_missing_target_words_defaults() {
        let outline: Outline = serde_json::from_str(r#"{"h2": []}"#).unwrap();
        assert_eq!(outline.target_words, DEFAULT_TARGET_WORDS);
    }

    proptest! {
        /// Reordering matches a splice simulation for valid sources and
        /// leaves the tree untouched otherwise; it never panics.
        #[test]
        fn prop_reorder_preserves_others(len in 0usize..6, from in 0usize..8, to in 0usize..8) {
            let mut outline = Outline::default();
            for i in 0..len {
                outline.add_section();
                outline.set_section_title(i, format!("s{i}"));
            }
            let before: Vec<String> =
                outline.sections.iter().map(|s| s.title.clone()).collect();

            outline.reorder_sections(from, to);
            let after: Vec<String> =
                outline.sections.iter().map(|s| s.title.clone()).collect();

            if from >= len {
                prop_assert_eq!(after, before);
            } else {
                let mut expected = before;
                let moved = expected.remove(from);
                let clamped = to.min(expected.len());
                expected.insert(clamped, moved);
                prop_assert_eq!(after, expected);
            }
        }

        /// Out-of-range edits at every level never panic and never change
        /// the tree.
        #[test]
        fn prop_out_of_range_is_noop(section in 3usize..10, sub in 0usize..10, point in 0usize..10) {
            let mut outline = Outline::default();
            outline.add_section();
            outline.add_subsection(0);
            outline.add_point(0, 0);
            let before = outline.clone();

            outline.set_section_title(section, "x");
            outline.remove_section(section);
            outline.add_subsection(section);
            outline.set_subsection_title(section, sub, "x");
            outline.remove_subsection(section, sub);
            outline.add_point(section, sub);
            outline.set_point(section, sub, point, "x");
            outline.remove_point(section, sub, point);

            prop_assert_eq!(outline, before);
        }
    }
}
