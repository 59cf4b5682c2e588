//! Outline Command
//!
//! One-shot outline synthesis: search the keyword, ask the LLM for a
//! heading structure, and print it as Markdown (or as wire-format JSON
//! for piping into `article --outline`).

use crate::ai::create_provider;
use crate::config::ConfigLoader;
use crate::generate::OutlineGenerator;
use crate::markdown;
use crate::serp::SerpClient;
use crate::types::Result;

pub async fn run(keyword: &str, target_words: Option<u32>, json: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    let target_words = target_words.unwrap_or(config.article.target_words);

    let serp_client = SerpClient::new(config.serp)?;
    let provider = create_provider(&config.llm)?;
    let generator = OutlineGenerator::new(provider);

    let serp = serp_client.search(keyword).await?;
    let outline = generator.generate(keyword, &serp, target_words).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
    } else {
        println!("{}", markdown::render(&outline));
    }

    Ok(())
}
