//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Search-results gateway constants
pub mod serp {
    /// Maximum number of results kept from an upstream response
    pub const MAX_RESULTS: usize = 10;

    /// Result titles are truncated to this many characters before being
    /// embedded in the outline prompt
    pub const TITLE_MAX_CHARS: usize = 80;

    /// Default SerpAPI endpoint
    pub const DEFAULT_API_BASE: &str = "https://serpapi.com";

    /// Default search engine parameter
    pub const DEFAULT_ENGINE: &str = "google";

    /// Default interface-language parameter (`hl`)
    pub const DEFAULT_LOCALE: &str = "en";
}

/// Outline model constants
pub mod outline {
    /// Floor applied when the user edits the target word count
    pub const MIN_TARGET_WORDS: u32 = 200;

    /// Default target word count for generation requests
    pub const DEFAULT_TARGET_WORDS: u32 = 3000;

    /// Title given to a freshly added section
    pub const DEFAULT_SECTION_TITLE: &str = "New section";

    /// Title given to a freshly added subsection
    pub const DEFAULT_SUBSECTION_TITLE: &str = "New subheading";

    /// Text given to a freshly added point
    pub const DEFAULT_POINT_TEXT: &str = "Supporting point";
}

/// Article generation option defaults
pub mod article {
    /// Default writing tone
    pub const DEFAULT_TONE: &str = "clear, practical, and approachable";

    /// Default reader profile
    pub const DEFAULT_AUDIENCE: &str = "search users, beginner to intermediate";
}

/// Editor surface constants
pub mod editor {
    /// Quiet window for search-on-type debouncing (milliseconds)
    pub const DEBOUNCE_MS: u64 = 600;

    /// How long the outline-generation success indicator stays lit
    /// before self-clearing (milliseconds)
    pub const SUCCESS_FLASH_MS: u64 = 900;
}

/// LLM generation constants
pub mod generation {
    /// Sampling temperature for outline generation (structured JSON)
    pub const OUTLINE_TEMPERATURE: f32 = 0.5;

    /// Sampling temperature for article generation (prose)
    pub const ARTICLE_TEMPERATURE: f32 = 0.7;
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Timeout for the short SerpAPI round trip (seconds)
    pub const SERP_TIMEOUT_SECS: u64 = 30;
}

/// Export surface constants
pub mod export {
    /// File name used when the keyword is blank
    pub const FALLBACK_FILE_NAME: &str = "article.md";
}
