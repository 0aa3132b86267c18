//! RM command - Delete a note.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use notes_client::notes_core::NoteId;
use notes_client::{HttpNotesApi, Mutation};
use serde::Serialize;

use super::{HumanReadable, activate, output};
use crate::terminal::TerminalPrompt;

/// Arguments for the rm command.
#[derive(Args)]
pub struct RmArgs {
    /// Note ID to delete
    pub note_id: NoteId,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Result of a delete.
#[derive(Debug, Serialize)]
pub struct DeleteNoteResult {
    pub id: NoteId,
    pub message: String,
}

impl HumanReadable for DeleteNoteResult {
    fn print_human(&self) {
        println!("{}", "Note deleted successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
    }
}

/// Execute the rm command.
pub async fn execute(api: HttpNotesApi, human: bool, args: RmArgs) -> Result<()> {
    let mut board = activate(api, TerminalPrompt::one_shot(args.yes)).await?;

    match board.delete(&args.note_id).await {
        Mutation::Applied => output(
            &DeleteNoteResult {
                id: args.note_id,
                message: "Note deleted successfully".to_string(),
            },
            human,
        ),
        Mutation::Skipped => {
            eprintln!("Aborted.");
            Ok(())
        }
        Mutation::Failed => bail!("note {} was not deleted", args.note_id),
    }
}
