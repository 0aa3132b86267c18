//! ADD command - Create a new note.

use anyhow::{Result, bail};
use clap::Args;
use notes_client::{HttpNotesApi, Mutation};

use super::{activate, output, read_content};
use crate::terminal::TerminalPrompt;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Title of the note
    #[arg(default_value = "")]
    pub title: String,

    /// Content of the note (use @filename to read from file, or - for stdin)
    #[arg(short, long, default_value = "")]
    pub content: String,
}

/// Execute the add command.
pub async fn execute(api: HttpNotesApi, human: bool, args: AddArgs) -> Result<()> {
    let content = read_content(&args.content)?;
    let mut board = activate(api, TerminalPrompt::one_shot(false)).await?;

    match board.create(&args.title, &content).await {
        Mutation::Applied => output(&board.notes()[0], human),
        Mutation::Skipped => bail!("nothing to save: title and content are both empty"),
        Mutation::Failed => bail!("note was not created"),
    }
}
