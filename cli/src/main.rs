//! Command-line front end for the notes API.
//!
//! Without a subcommand this opens the interactive note board: the note list
//! with a composer on top, edit/delete per card, and reload on failure. The
//! one-shot subcommands run a single operation through the same board.
//!
//! Configuration via environment:
//! - NOTES_API_BASE: Base URL of the notes server (default: http://localhost:5000)
//! - NOTES_TIMEOUT_SECS: Request timeout in seconds (default: 30)
//! - LOG_LEVEL: Log level for diagnostics on stderr (default: warn)

mod commands;
mod render;
mod terminal;

use std::time::Duration;

use clap::{Parser, Subcommand};
use notes_client::config::DEFAULT_API_BASE;
use notes_client::{ClientConfig, HttpNotesApi};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    add::AddArgs, board::BoardArgs, edit::EditArgs, list::ListArgs, rm::RmArgs,
};

/// Notes from the command line
///
/// Run without a subcommand for the interactive board. One-shot subcommands
/// print JSON, or formatted text with --human.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server base URL
    #[arg(long, env = "NOTES_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "NOTES_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    timeout: u64,

    /// Log level for diagnostics written to stderr
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive note board (default)
    Board(BoardArgs),

    /// List notes
    List(ListArgs),

    /// Create a note
    Add(AddArgs),

    /// Edit a note's title and/or content
    Edit(EditArgs),

    /// Delete a note
    Rm(RmArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::new(&cli.url) {
        Ok(c) => c
            .with_timeout(Duration::from_secs(cli.timeout))
            .with_log_level(cli.log_level),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);

    let api = match HttpNotesApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Board(BoardArgs::default()));

    let result = match command {
        Commands::Board(args) => commands::board::execute(api, args).await,
        Commands::List(args) => commands::list::execute(api, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(api, cli.human, args).await,
        Commands::Edit(args) => commands::edit::execute(api, cli.human, args).await,
        Commands::Rm(args) => commands::rm::execute(api, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber on stderr so it never mixes with output.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
