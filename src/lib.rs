//! seoscribe - AI-Driven SEO Article Outline & Draft Generator
//!
//! Given a keyword, seoscribe fetches the current top search results,
//! asks an LLM completion endpoint for a hierarchical H2/H3/H4 outline,
//! lets the user edit and reorder that outline interactively, and then
//! asks the same endpoint to expand the finalized outline into a full
//! Markdown article.
//!
//! ## Core Pieces
//!
//! - **Outline Tree Model**: the nested heading structure and its
//!   index-addressed mutation operations
//! - **Markdown Serializer**: deterministic rendering of the tree into
//!   heading-delimited Markdown
//! - **Gateways**: one best-effort HTTP round trip each for search
//!   results, outline synthesis, and article expansion - no retries
//! - **Editor Surface**: a terminal session with debounced
//!   search-on-type and per-action busy/error state
//!
//! ## Quick Start
//!
//! ```ignore
//! use seoscribe::ai::create_provider;
//! use seoscribe::config::ConfigLoader;
//! use seoscribe::generate::OutlineGenerator;
//! use seoscribe::serp::SerpClient;
//!
//! let config = ConfigLoader::load()?;
//! let serp = SerpClient::new(config.serp.clone())?;
//! let provider = create_provider(&config.llm)?;
//! let results = serp.search("side hustle taxes").await?;
//! let outline = OutlineGenerator::new(provider)
//!     .generate("side hustle taxes", &results, 3000)
//!     .await?;
//! println!("{}", seoscribe::markdown::render(&outline));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: outline tree, search results, error taxonomy
//! - [`ai`]: LLM provider abstraction, prompts, response validation
//! - [`serp`]: search-results gateway
//! - [`generate`]: outline and article generation gateways
//! - [`editor`]: editor state machine, debouncer, interactive session
//! - [`markdown`]: outline serialization
//! - [`export`]: file save and clipboard copy
//! - [`config`]: layered configuration

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod editor;
pub mod export;
pub mod generate;
pub mod markdown;
pub mod serp;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{Error, ErrorKind, Result};

// Data Model
pub use types::{Keyword, Outline, SearchResult, Section, Subsection};

// =============================================================================
// Gateway Re-exports
// =============================================================================

pub use generate::{ArticleGenerator, ArticleOptions, OutlineGenerator};
pub use serp::SerpClient;

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    Completion, CompletionRequest, LlmProvider, OllamaProvider, OpenAiProvider, ProviderConfig,
    SharedProvider, TokenUsage, create_provider,
};

// =============================================================================
// Editor Re-exports
// =============================================================================

pub use editor::{ActionState, Debouncer, EditorSession, EditorState};
