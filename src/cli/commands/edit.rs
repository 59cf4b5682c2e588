//! Edit Command
//!
//! Launch the interactive editing session.

use crate::config::ConfigLoader;
use crate::editor::EditorSession;
use crate::types::Result;

pub async fn run(keyword: Option<String>) -> Result<()> {
    let config = ConfigLoader::load()?;
    let session = EditorSession::new(&config)?;
    session.run(keyword).await
}
