//! LIST command - List all notes.

use anyhow::Result;
use clap::Args;
use notes_client::HttpNotesApi;

use super::{activate, output};
use crate::terminal::TerminalPrompt;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// Execute the list command.
pub async fn execute(api: HttpNotesApi, human: bool, _args: ListArgs) -> Result<()> {
    let board = activate(api, TerminalPrompt::one_shot(false)).await?;

    output(board.notes(), human)
}
