//! Serp Command
//!
//! One-shot search: fetch and print ranked results for a query.

use console::style;

use crate::config::ConfigLoader;
use crate::serp::SerpClient;
use crate::types::Result;

pub async fn run(query: &str, json: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    let client = SerpClient::new(config.serp)?;

    let results = client.search(query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("(no results)");
        return Ok(());
    }

    for result in &results {
        println!(
            "{:>3}. {}  {}",
            result.rank,
            result.title,
            style(&result.url).blue().underlined()
        );
    }

    Ok(())
}
