//! Markdown Serialization
//!
//! Deterministic, side-effect-free rendering of an [`Outline`] into
//! heading-delimited Markdown, plus the indented plan listing embedded in
//! the article-generation prompt.
//!
//! Rendering is total: empty subsection or point sequences at any level
//! are valid input, and titles are emitted verbatim (they are plain
//! prose, not user-supplied Markdown, so no escaping is performed).

use crate::types::Outline;

/// Render the outline as `##`/`###`/`####` Markdown headings.
///
/// For each section a level-2 heading line; for each subsection a level-3
/// heading line followed by one level-4 heading line per point, then a
/// blank line; a blank line after each section. Trailing whitespace is
/// trimmed from the final output. Idempotent: re-rendering an unmodified
/// tree yields byte-identical output.
pub fn render(outline: &Outline) -> String {
    let mut lines: Vec<String> = Vec::new();
    for section in &outline.sections {
        lines.push(format!("## {}", section.title));
        for subsection in &section.subsections {
            lines.push(format!("### {}", subsection.title));
            for point in &subsection.points {
                lines.push(format!("#### {}", point));
            }
            lines.push(String::new());
        }
        lines.push(String::new());
    }
    lines.join("\n").trim().to_string()
}

/// Render the outline as the indented plan listing used inside the
/// article prompt:
///
/// ```text
/// - H2: Section title
///     - H3: Subsection title
///       - H4: Point
/// ```
pub fn plan(outline: &Outline) -> String {
    let mut out = String::new();
    for section in &outline.sections {
        out.push_str(&format!("- H2: {}\n", section.title));
        for subsection in &section.subsections {
            out.push_str(&format!("    - H3: {}\n", subsection.title));
            for point in &subsection.points {
                out.push_str(&format!("      - H4: {}\n", point));
            }
        }
    }
    out.trim_end().to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outline;

    #[test]
    fn test_render_empty_outline() {
        assert_eq!(render(&Outline::default()), "");
    }

    #[test]
    fn test_render_round_trip_built_tree() {
        let mut outline = Outline::default();
        outline.add_section();
        outline.set_section_title(0, "T2");
        outline.add_subsection(0);
        outline.set_subsection_title(0, 0, "T3");
        outline.add_point(0, 0);
        outline.set_point(0, 0, 0, "T4");

        assert_eq!(render(&outline), "## T2\n### T3\n#### T4");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut outline = Outline::default();
        outline.add_section();
        outline.add_subsection(0);
        outline.add_point(0, 0);

        let first = render(&outline);
        let second = render(&outline);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_total_on_sparse_trees() {
        // sections without subsections, subsections without points
        let outline: Outline = serde_json::from_str(
            r#"{"h2": [{"title": "A"}, {"title": "B", "h3": [{"title": "B.1"}]}]}"#,
        )
        .unwrap();
        assert_eq!(render(&outline), "## A\n\n## B\n### B.1");
    }

    #[test]
    fn test_render_emits_titles_verbatim() {
        let mut outline = Outline::default();
        outline.add_section();
        outline.set_section_title(0, "Cost *and* speed | 2026");
        assert_eq!(render(&outline), "## Cost *and* speed | 2026");
    }

    #[test]
    fn test_section_spacing() {
        let mut outline = Outline::default();
        outline.add_section();
        outline.set_section_title(0, "A");
        outline.add_subsection(0);
        outline.set_subsection_title(0, 0, "A.1");
        outline.add_section();
        outline.set_section_title(1, "B");

        // blank line after the subsection block and between sections
        assert_eq!(render(&outline), "## A\n### A.1\n\n\n## B");
    }

    #[test]
    fn test_plan_layout() {
        let mut outline = Outline::default();
        outline.add_section();
        outline.set_section_title(0, "Intro");
        outline.add_subsection(0);
        outline.set_subsection_title(0, 0, "Why it matters");
        outline.add_point(0, 0);
        outline.set_point(0, 0, 0, "Market size");

        assert_eq!(
            plan(&outline),
            "- H2: Intro\n    - H3: Why it matters\n      - H4: Market size"
        );
    }

    #[test]
    fn test_plan_empty() {
        assert_eq!(plan(&Outline::default()), "");
    }
}
