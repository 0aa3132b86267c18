//! Command implementations for the notes CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod add;
pub mod board;
pub mod edit;
pub mod list;
pub mod rm;

use anyhow::{Result, bail};
use colored::Colorize;
use notes_client::notes_core::Note;
use notes_client::presentation::NoteCard;
use notes_client::{BoardState, HttpNotesApi, NoteBoard};
use serde::Serialize;

use crate::render;
use crate::terminal::TerminalPrompt;

/// Board used by one-shot commands.
pub type OneShotBoard = NoteBoard<HttpNotesApi, TerminalPrompt>;

/// Width of cards printed by one-shot commands.
const CARD_WIDTH: usize = 72;

/// Load the board and fail if the initial fetch failed.
pub async fn activate(api: HttpNotesApi, prompt: TerminalPrompt) -> Result<OneShotBoard> {
    let mut board = NoteBoard::new(api, prompt);
    board.load().await;

    if let BoardState::Error(failure) = board.state() {
        bail!("{}", failure);
    }
    Ok(board)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable + ?Sized>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Title:".cyan(), self.display_title());
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created_at));
        println!("  {} {}", "Updated:".cyan(), format_timestamp(&self.updated_at));
        println!();
        for line in self.display_content().lines() {
            println!("  {}", line);
        }
    }
}

impl HumanReadable for [Note] {
    fn print_human(&self) {
        println!("{}", "My Notes".green().bold());
        println!("{}", "=".repeat(CARD_WIDTH));
        println!();

        if self.is_empty() {
            println!("  {}", "(No notes yet)".dimmed());
            return;
        }

        for (index, note) in self.iter().enumerate() {
            render::card(index + 1, &NoteCard::new(note.clone()).view(CARD_WIDTH));
            println!("  {} {}", "ID:".cyan(), note.id);
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.len());
    }
}

/// Resolve content arguments: `-` reads stdin, `@path` reads a file.
pub fn read_content(arg: &str) -> Result<String> {
    if arg == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(path) = arg.strip_prefix('@') {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Ok(arg.to_string())
    }
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
