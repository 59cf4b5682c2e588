//! Interactive Editing Session
//!
//! Line-oriented command loop that owns the [`EditorState`] for its
//! lifetime and is its only mutator. Gateway calls run as spawned tasks
//! reporting completion over an event channel; the loop applies each
//! completion to the matching action family. Stdin is drained on a
//! dedicated thread so the loop stays responsive while requests are in
//! flight.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use console::style;
use tokio::sync::mpsc;
use tracing::debug;

use super::{ActionState, Debouncer, EditorState};
use crate::cli::ui::Output;
use crate::config::Config;
use crate::constants::editor::SUCCESS_FLASH_MS;
use crate::export;
use crate::generate::{ArticleGenerator, ArticleOptions, OutlineGenerator};
use crate::markdown;
use crate::serp::SerpClient;
use crate::types::{Keyword, Outline, Result, SearchResult};

// =============================================================================
// Commands
// =============================================================================

/// One parsed line of user input. Paths are zero-based here; the parser
/// converts from the one-based indices shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the keyword (arms the debounced search)
    Keyword(String),
    /// Re-fetch search results for the current keyword immediately
    Search,
    /// Generate a replacement outline from keyword + search results
    GenerateOutline,
    /// Append a section / subsection / point under the given path
    Add(Vec<usize>),
    /// Retitle the node at the given path
    Set(Vec<usize>, String),
    /// Remove the node at the given path
    Remove(Vec<usize>),
    /// Reorder sections; a missing target is a no-op
    Move { from: usize, to: Option<usize> },
    /// Set the target word count
    Words(u32),
    /// Toggle table preference for article generation
    Tables(bool),
    /// Print the outline Markdown preview
    Preview,
    /// Print session status (keyword, results, busy flags)
    Show,
    /// Generate the article from the current outline
    GenerateArticle,
    /// Copy outline or article Markdown to the clipboard
    Copy(CopyTarget),
    /// Save the article to a file
    Save(Option<PathBuf>),
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Outline,
    Article,
}

/// Parse one input line. `Ok(None)` for a blank line; `Err` carries a
/// usage message for the user.
pub fn parse_command(line: &str) -> std::result::Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "kw" => Command::Keyword(rest.to_string()),
        "serp" => Command::Search,
        "gen" => Command::GenerateOutline,
        "add" => {
            let path = if rest.is_empty() { Vec::new() } else { parse_path(rest)? };
            if path.len() > 2 {
                return Err("add takes a section or section.subsection path".to_string());
            }
            Command::Add(path)
        }
        "set" => {
            let (path_str, text) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: set <path> <text>".to_string())?;
            let path = parse_path(path_str)?;
            if path.is_empty() || path.len() > 3 {
                return Err("set takes a path with one to three indices".to_string());
            }
            Command::Set(path, text.trim().to_string())
        }
        "rm" => {
            let path = parse_path(rest)?;
            if path.is_empty() || path.len() > 3 {
                return Err("rm takes a path with one to three indices".to_string());
            }
            Command::Remove(path)
        }
        "mv" => {
            let mut parts = rest.split_whitespace();
            let from = parts
                .next()
                .ok_or_else(|| "usage: mv <from> <to>".to_string())
                .and_then(parse_index)?;
            let to = parts.next().map(parse_index).transpose()?;
            Command::Move { from, to }
        }
        "words" => {
            let words: u32 = rest
                .parse()
                .map_err(|_| "usage: words <count>".to_string())?;
            Command::Words(words)
        }
        "tables" => match rest {
            "on" => Command::Tables(true),
            "off" => Command::Tables(false),
            _ => return Err("usage: tables on|off".to_string()),
        },
        "preview" => Command::Preview,
        "show" => Command::Show,
        "article" => Command::GenerateArticle,
        "copy" => match rest {
            "outline" => Command::Copy(CopyTarget::Outline),
            "article" => Command::Copy(CopyTarget::Article),
            _ => return Err("usage: copy outline|article".to_string()),
        },
        "save" => Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };

    Ok(Some(command))
}

/// Parse a one-based `1` / `1.2` / `1.2.3` path into zero-based indices.
fn parse_path(s: &str) -> std::result::Result<Vec<usize>, String> {
    s.split('.').map(parse_index).collect()
}

fn parse_index(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not an index"))?;
    if n == 0 {
        return Err("indices are 1-based".to_string());
    }
    Ok(n - 1)
}

// =============================================================================
// Events
// =============================================================================

/// Completion and timer events delivered back to the session loop.
enum Event {
    DebouncedSearch(String),
    SearchDone(Result<Vec<SearchResult>>),
    OutlineDone(Result<Outline>),
    ArticleDone(Result<String>),
    FlashExpired,
}

// =============================================================================
// Session
// =============================================================================

/// Interactive editing session over the three gateways.
pub struct EditorSession {
    state: EditorState,
    debouncer: Debouncer,
    serp: Arc<SerpClient>,
    outline_gen: Arc<OutlineGenerator>,
    article_gen: Arc<ArticleGenerator>,
    article_options: ArticleOptions,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    out: Output,
}

impl EditorSession {
    pub fn new(config: &Config) -> Result<Self> {
        let provider = crate::ai::create_provider(&config.llm)?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut state = EditorState::new();
        state.outline.set_target_words(config.article.target_words);
        state.use_tables = config.article.use_tables;

        Ok(Self {
            state,
            debouncer: Debouncer::new(Duration::from_millis(config.editor.debounce_ms)),
            serp: Arc::new(SerpClient::new(config.serp.clone())?),
            outline_gen: Arc::new(OutlineGenerator::new(Arc::clone(&provider))),
            article_gen: Arc::new(ArticleGenerator::new(provider)),
            article_options: ArticleOptions {
                target_words: config.article.target_words,
                tone: config.article.tone.clone(),
                audience: config.article.audience.clone(),
                use_tables: config.article.use_tables,
            },
            events_tx,
            events_rx,
            out: Output::new(),
        })
    }

    /// Run the session until `quit` or end of input.
    pub async fn run(mut self, initial_keyword: Option<String>) -> Result<()> {
        self.out.header("seoscribe editor");
        self.out
            .hint("Type a keyword with 'kw <text>', then 'gen' for an outline. 'help' lists commands.");

        if let Some(keyword) = initial_keyword {
            self.apply_keyword(keyword);
        }

        let mut lines_rx = spawn_stdin_reader();
        self.prompt();

        loop {
            tokio::select! {
                line = lines_rx.recv() => {
                    let Some(line) = line else { break };
                    match parse_command(&line) {
                        Ok(Some(Command::Quit)) => break,
                        Ok(Some(command)) => self.handle_command(command),
                        Ok(None) => {}
                        Err(usage) => self.out.warning(&usage),
                    }
                    self.prompt();
                }
                event = self.events_rx.recv() => {
                    // the session holds a sender, so the channel never closes here
                    if let Some(event) = event {
                        self.handle_event(event);
                        self.prompt();
                    }
                }
            }
        }

        // dropping the debouncer cancels any pending search timer
        Ok(())
    }

    fn prompt(&self) {
        use std::io::Write;
        print!("{} ", style(">").cyan().bold());
        let _ = std::io::stdout().flush();
    }

    // -------------------------------------------------------------------------
    // Command handling
    // -------------------------------------------------------------------------

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Keyword(text) => self.apply_keyword(text),
            Command::Search => self.start_search(self.state.keyword.as_str().to_string()),
            Command::GenerateOutline => self.start_outline_generation(),
            Command::Add(path) => {
                match path.as_slice() {
                    [] => self.state.outline.add_section(),
                    [i] => self.state.outline.add_subsection(*i),
                    [i, j] => self.state.outline.add_point(*i, *j),
                    _ => {}
                }
                self.print_outline_listing();
            }
            Command::Set(path, text) => {
                match path.as_slice() {
                    [i] => self.state.outline.set_section_title(*i, text),
                    [i, j] => self.state.outline.set_subsection_title(*i, *j, text),
                    [i, j, k] => self.state.outline.set_point(*i, *j, *k, text),
                    _ => {}
                }
                self.print_outline_listing();
            }
            Command::Remove(path) => {
                match path.as_slice() {
                    [i] => self.state.outline.remove_section(*i),
                    [i, j] => self.state.outline.remove_subsection(*i, *j),
                    [i, j, k] => self.state.outline.remove_point(*i, *j, *k),
                    _ => {}
                }
                self.print_outline_listing();
            }
            Command::Move { from, to } => {
                self.state.reorder_sections(from, to);
                self.print_outline_listing();
            }
            Command::Words(words) => {
                self.state.set_target_words(words);
                println!("Target words: {}", self.state.target_words());
            }
            Command::Tables(on) => {
                self.state.use_tables = on;
                println!("Tables: {}", if on { "on" } else { "off" });
            }
            Command::Preview => println!("{}", markdown::render(&self.state.outline)),
            Command::Show => self.print_status(),
            Command::GenerateArticle => self.start_article_generation(),
            Command::Copy(target) => self.copy(target),
            Command::Save(path) => self.save(path),
            Command::Help => print_help(),
            Command::Quit => {}
        }
    }

    fn apply_keyword(&mut self, text: String) {
        self.state.keyword = Keyword::new(text.clone());
        let tx = self.events_tx.clone();
        // only the last keystroke inside the quiet window triggers a search
        self.debouncer.call(move || {
            let _ = tx.send(Event::DebouncedSearch(text));
        });
    }

    fn start_search(&mut self, query: String) {
        self.state.begin_search();
        let client = Arc::clone(&self.serp);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.search(&query).await;
            let _ = tx.send(Event::SearchDone(result));
        });
    }

    fn start_outline_generation(&mut self) {
        self.state.begin_outline_gen();
        self.out.info("Generating outline...");
        let generator = Arc::clone(&self.outline_gen);
        let keyword = self.state.keyword.as_str().to_string();
        let serp = self.state.serp.clone();
        let target_words = self.state.target_words();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = generator.generate(&keyword, &serp, target_words).await;
            let _ = tx.send(Event::OutlineDone(result));
        });
    }

    fn start_article_generation(&mut self) {
        self.state.begin_article_gen();
        self.out.info("Generating article...");
        let generator = Arc::clone(&self.article_gen);
        let keyword = self.state.keyword.as_str().to_string();
        let outline = self.state.outline.clone();
        // tone and audience come from config; the live toggles come from
        // the session state at the moment generation is triggered
        let options = ArticleOptions {
            target_words: self.state.target_words(),
            use_tables: self.state.use_tables,
            ..self.article_options.clone()
        };
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = generator.generate(&keyword, &outline, &options).await;
            let _ = tx.send(Event::ArticleDone(result));
        });
    }

    fn copy(&self, target: CopyTarget) {
        let text = match target {
            CopyTarget::Outline => markdown::render(&self.state.outline),
            CopyTarget::Article => match &self.state.article {
                Some(article) => article.clone(),
                None => {
                    self.out.warning("No article yet. Run 'article' first.");
                    return;
                }
            },
        };
        // acknowledged inline, never stored in an action slot
        match export::copy_to_clipboard(&text) {
            Ok(()) => self.out.success("Copied to clipboard"),
            Err(e) => self.out.error(&e.to_string()),
        }
    }

    fn save(&self, path: Option<PathBuf>) {
        let Some(article) = &self.state.article else {
            self.out.warning("No article yet. Run 'article' first.");
            return;
        };
        let result = match path {
            Some(path) => std::fs::write(&path, article)
                .map(|_| path)
                .map_err(|e| crate::types::Error::Export(e.to_string())),
            None => export::save_article(std::path::Path::new("."), self.state.keyword.as_str(), article),
        };
        match result {
            Ok(path) => self.out.success(&format!("Saved {}", path.display())),
            Err(e) => self.out.error(&e.to_string()),
        }
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::DebouncedSearch(query) => {
                debug!(%query, "Debounced search firing");
                self.start_search(query);
            }
            Event::SearchDone(result) => {
                self.state.finish_search(result);
                match &self.state.search {
                    ActionState::Failed(message) => self.out.error(message),
                    _ => self.print_serp_listing(),
                }
            }
            Event::OutlineDone(result) => {
                self.state.finish_outline_gen(result);
                match &self.state.outline_gen {
                    ActionState::Failed(message) => self.out.error(message),
                    _ => {
                        self.out.success("Outline generated");
                        self.print_outline_listing();
                        let tx = self.events_tx.clone();
                        tokio::spawn(async move {
                            tokio::time::sleep(Duration::from_millis(SUCCESS_FLASH_MS)).await;
                            let _ = tx.send(Event::FlashExpired);
                        });
                    }
                }
            }
            Event::ArticleDone(result) => {
                self.state.finish_article_gen(result);
                match &self.state.article_gen {
                    ActionState::Failed(message) => self.out.error(message),
                    _ => {
                        if let Some(article) = &self.state.article {
                            self.out.section("Article preview");
                            println!("{article}");
                        }
                    }
                }
            }
            Event::FlashExpired => self.state.clear_outline_flash(),
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn print_serp_listing(&self) {
        if self.state.serp.is_empty() {
            println!("(no results)");
            return;
        }
        for result in &self.state.serp {
            println!(
                "{:>3}. {}  {}",
                result.rank,
                result.title,
                style(&result.url).blue().underlined()
            );
        }
    }

    fn print_outline_listing(&self) {
        if self.state.outline.is_empty() {
            println!("(outline is empty)");
            return;
        }
        for (i, section) in self.state.outline.sections.iter().enumerate() {
            println!("{}. {}", i + 1, style(&section.title).bold());
            for (j, subsection) in section.subsections.iter().enumerate() {
                println!("   {}.{} {}", i + 1, j + 1, subsection.title);
                for (k, point) in subsection.points.iter().enumerate() {
                    println!("      {}.{}.{} {}", i + 1, j + 1, k + 1, point);
                }
            }
        }
    }

    fn print_status(&self) {
        println!("Keyword:      {}", self.state.keyword);
        println!("Results:      {}", self.state.serp.len());
        println!("Sections:     {}", self.state.outline.sections.len());
        println!("Target words: {}", self.state.target_words());
        println!(
            "Tables:       {}",
            if self.state.use_tables { "on" } else { "off" }
        );
        println!("Search:       {}", describe(&self.state.search));
        println!("Outline:      {}", describe(&self.state.outline_gen));
        println!("Article:      {}", describe(&self.state.article_gen));
    }
}

fn describe(state: &ActionState) -> String {
    match state {
        ActionState::Idle => "idle".to_string(),
        ActionState::Pending => "working...".to_string(),
        ActionState::Success => "done ✓".to_string(),
        ActionState::Failed(message) => format!("failed: {message}"),
    }
}

fn print_help() {
    println!(
        "\
Commands:
  kw <text>           set the keyword (search fires after a short pause)
  serp                re-fetch search results now
  gen                 generate outline from keyword + results
  add [i[.j]]         add a section / subsection under i / point under i.j
  set <path> <text>   retitle the section, subsection, or point at <path>
  rm <path>           remove the node at <path>
  mv <from> <to>      move a section to a new position
  words <n>           set the target word count (min 200)
  tables on|off       prefer Markdown tables in the article
  preview             print the outline as Markdown
  show                print session status
  article             generate the article from the outline
  copy outline|article  copy Markdown to the clipboard
  save [path]         save the article (default: <keyword>.md)
  quit                leave the editor"
    );
}

/// Drain stdin on a dedicated thread; the channel closes on EOF.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword() {
        assert_eq!(
            parse_command("kw side hustle taxes").unwrap(),
            Some(Command::Keyword("side hustle taxes".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_add_paths() {
        assert_eq!(parse_command("add").unwrap(), Some(Command::Add(vec![])));
        assert_eq!(parse_command("add 2").unwrap(), Some(Command::Add(vec![1])));
        assert_eq!(
            parse_command("add 2.3").unwrap(),
            Some(Command::Add(vec![1, 2]))
        );
        assert!(parse_command("add 1.2.3").is_err());
    }

    #[test]
    fn test_parse_set_splits_path_and_text() {
        assert_eq!(
            parse_command("set 1.2 New subheading title").unwrap(),
            Some(Command::Set(vec![0, 1], "New subheading title".to_string()))
        );
        assert!(parse_command("set 1").is_err());
    }

    #[test]
    fn test_parse_move_with_and_without_target() {
        assert_eq!(
            parse_command("mv 1 3").unwrap(),
            Some(Command::Move { from: 0, to: Some(2) })
        );
        assert_eq!(
            parse_command("mv 1").unwrap(),
            Some(Command::Move { from: 0, to: None })
        );
    }

    #[test]
    fn test_parse_rejects_zero_index() {
        assert!(parse_command("rm 0").is_err());
        assert!(parse_command("mv 0 1").is_err());
    }

    #[test]
    fn test_parse_copy_targets() {
        assert_eq!(
            parse_command("copy outline").unwrap(),
            Some(Command::Copy(CopyTarget::Outline))
        );
        assert!(parse_command("copy serp").is_err());
    }

    #[test]
    fn test_parse_save_with_optional_path() {
        assert_eq!(parse_command("save").unwrap(), Some(Command::Save(None)));
        assert_eq!(
            parse_command("save out/draft.md").unwrap(),
            Some(Command::Save(Some(PathBuf::from("out/draft.md"))))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_command("frobnicate").is_err());
    }
}
