use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seoscribe")]
#[command(
    version,
    about = "AI-driven SEO article outline and draft generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch ranked search results for a query
    Serp {
        #[arg(help = "Free-text search query")]
        query: String,
        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },

    /// Generate an article outline for a keyword
    Outline {
        #[arg(help = "Keyword to build the outline around")]
        keyword: String,
        #[arg(long, help = "Advisory word count for the article")]
        target_words: Option<u32>,
        #[arg(long, help = "Print the outline as wire-format JSON")]
        json: bool,
    },

    /// Generate a full Markdown article
    Article {
        #[arg(help = "Keyword the article targets")]
        keyword: String,
        #[arg(long, help = "Outline JSON file (from 'outline --json'); omitted: run the full pipeline")]
        outline: Option<PathBuf>,
        #[arg(long, help = "Advisory word count")]
        target_words: Option<u32>,
        #[arg(long, help = "Writing tone override")]
        tone: Option<String>,
        #[arg(long, help = "Reader profile override")]
        audience: Option<String>,
        #[arg(long, help = "Do not prefer Markdown tables")]
        no_tables: bool,
        #[arg(long, short, help = "Output file (default: <keyword>.md)")]
        output: Option<PathBuf>,
    },

    /// Open the interactive outline editor
    Edit {
        #[arg(help = "Starting keyword")]
        keyword: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Edit configuration file with $EDITOR
    Edit {
        #[arg(long, short, help = "Edit global config")]
        global: bool,
    },
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mseoscribe encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serp { query, json } => {
            let rt = Runtime::new()?;
            rt.block_on(seoscribe::cli::commands::serp::run(&query, json))?;
        }
        Commands::Outline {
            keyword,
            target_words,
            json,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(seoscribe::cli::commands::outline::run(
                &keyword,
                target_words,
                json,
            ))?;
        }
        Commands::Article {
            keyword,
            outline,
            target_words,
            tone,
            audience,
            no_tables,
            output,
        } => {
            use seoscribe::cli::commands::article::ArticleArgs;

            let rt = Runtime::new()?;
            rt.block_on(seoscribe::cli::commands::article::run(ArticleArgs {
                keyword,
                outline,
                target_words,
                tone,
                audience,
                no_tables,
                output,
            }))?;
        }
        Commands::Edit { keyword } => {
            let rt = Runtime::new()?;
            rt.block_on(seoscribe::cli::commands::edit::run(keyword))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                seoscribe::cli::commands::config::show(global, &format)?;
            }
            ConfigAction::Path => {
                seoscribe::cli::commands::config::path()?;
            }
            ConfigAction::Edit { global } => {
                seoscribe::cli::commands::config::edit(global)?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    seoscribe::cli::commands::config::init_global(force)?;
                } else {
                    seoscribe::cli::commands::config::init_project()?;
                }
            }
        },
    }

    Ok(())
}
