//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/seoscribe/config.toml)
//! 3. Project config (.seoscribe/config.toml)
//! 4. Environment variables (SEOSCRIBE_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
