//! Generation Gateways
//!
//! The two LLM round trips: outline synthesis (strict JSON) and article
//! expansion (Markdown prose). Each is one best-effort request; failures
//! surface to the caller and existing state is never partially updated.

mod article;
mod outline;

pub use article::{ArticleGenerator, ArticleOptions};
pub use outline::OutlineGenerator;
