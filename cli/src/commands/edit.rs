//! EDIT command - Change a note's title and/or content.

use anyhow::{Result, anyhow, bail};
use clap::Args;
use notes_client::notes_core::NoteId;
use notes_client::presentation::NoteCard;
use notes_client::{HttpNotesApi, Mutation};

use super::{activate, output, read_content};
use crate::terminal::TerminalPrompt;

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Note ID to edit
    pub note_id: NoteId,

    /// New title (kept when omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content (use @filename to read from file, or - for stdin; kept when omitted)
    #[arg(short, long)]
    pub content: Option<String>,
}

/// Execute the edit command.
pub async fn execute(api: HttpNotesApi, human: bool, args: EditArgs) -> Result<()> {
    let content = args.content.as_deref().map(read_content).transpose()?;
    let mut board = activate(api, TerminalPrompt::one_shot(false)).await?;

    let note = board
        .note(&args.note_id)
        .cloned()
        .ok_or_else(|| anyhow!("note {} not found", args.note_id))?;

    let mut card = NoteCard::new(note);
    card.begin_edit();
    if let Some(title) = args.title {
        card.set_title_draft(title);
    }
    if let Some(content) = content {
        card.set_content_draft(content);
    }

    match card.save(&mut board).await {
        Mutation::Applied => match board.note(&args.note_id) {
            Some(updated) => output(updated, human),
            None => bail!("note {} disappeared after the update", args.note_id),
        },
        Mutation::Skipped | Mutation::Failed => bail!("note {} was not updated", args.note_id),
    }
}
