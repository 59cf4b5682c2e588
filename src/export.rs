//! Export Surface
//!
//! Saving the generated article as a UTF-8 Markdown file named from the
//! current keyword, and copying outline or article Markdown to the
//! system clipboard. Failures here are reported to the user immediately
//! rather than stored in editor state.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::export::FALLBACK_FILE_NAME;
use crate::types::{Error, Result};

/// Derive the article file name from the keyword.
///
/// Path-hostile characters are replaced so the name is safe on every
/// platform; a blank keyword falls back to the fixed default name.
pub fn article_file_name(keyword: &str) -> String {
    let sanitized: String = keyword
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{sanitized}.md")
    }
}

/// Write the article to `dir`, returning the path written.
pub fn save_article(dir: &Path, keyword: &str, markdown: &str) -> Result<PathBuf> {
    let path = dir.join(article_file_name(keyword));
    fs::write(&path, markdown)
        .map_err(|e| Error::Export(format!("could not write {}: {e}", path.display())))?;
    info!(path = %path.display(), "Article saved");
    Ok(path)
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Export(format!("clipboard unavailable: {e}")))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Export(format!("clipboard copy failed: {e}")))?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
