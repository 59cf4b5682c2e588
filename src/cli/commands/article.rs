//! Article Command
//!
//! One-shot article generation. With `--outline` the wire-format JSON
//! produced by `outline --json` is expanded directly; without it the
//! full pipeline runs first (search, then outline synthesis).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::ai::create_provider;
use crate::config::ConfigLoader;
use crate::export;
use crate::generate::{ArticleGenerator, ArticleOptions, OutlineGenerator};
use crate::serp::SerpClient;
use crate::types::{Outline, Result};

pub struct ArticleArgs {
    pub keyword: String,
    pub outline: Option<PathBuf>,
    pub target_words: Option<u32>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub no_tables: bool,
    pub output: Option<PathBuf>,
}

pub async fn run(args: ArticleArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let provider = create_provider(&config.llm)?;

    let outline = match &args.outline {
        Some(path) => read_outline(path)?,
        None => {
            let serp_client = SerpClient::new(config.serp.clone())?;
            let generator = OutlineGenerator::new(Arc::clone(&provider));
            let target_words = args.target_words.unwrap_or(config.article.target_words);
            let serp = serp_client.search(&args.keyword).await?;
            generator.generate(&args.keyword, &serp, target_words).await?
        }
    };

    let options = ArticleOptions {
        target_words: args.target_words.unwrap_or(outline.target_words),
        tone: args.tone.unwrap_or(config.article.tone),
        audience: args.audience.unwrap_or(config.article.audience),
        use_tables: !args.no_tables && config.article.use_tables,
    };

    let generator = ArticleGenerator::new(provider);
    let article = generator.generate(&args.keyword, &outline, &options).await?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &article)?;
            println!("Saved {}", path.display());
        }
        None => {
            let path = export::save_article(Path::new("."), &args.keyword, &article)?;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}

fn read_outline(path: &Path) -> Result<Outline> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_outline_wire_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.json");
        std::fs::write(
            &path,
            r#"{"h2": [{"title": "Intro", "h3": []}], "targetWords": 2000}"#,
        )
        .unwrap();

        let outline = read_outline(&path).unwrap();
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.target_words, 2000);
    }

    #[test]
    fn test_read_outline_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(read_outline(&path).is_err());
    }
}
