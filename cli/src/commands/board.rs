//! BOARD command - Interactive note board.
//!
//! Renders the list with the composer on top and reads one action per line
//! until `q` or end of input.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_client::presentation::{NoteCard, NoteComposer};
use notes_client::{HttpNotesApi, NoteBoard};

use crate::render;
use crate::terminal::{END_OF_TEXT, TerminalPrompt, is_yes, read_line, read_text};

type Board = NoteBoard<HttpNotesApi, TerminalPrompt>;

/// Edit input that empties a field.
const CLEAR_FIELD: &str = "-";

/// Arguments for the board command.
#[derive(Args)]
pub struct BoardArgs {
    /// Card width in columns
    #[arg(long, default_value_t = 60)]
    pub width: usize,
}

impl Default for BoardArgs {
    fn default() -> Self {
        Self { width: 60 }
    }
}

/// One line of board input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    New,
    Edit(usize),
    Delete(usize),
    Reload,
    Help,
    Quit,
}

impl Action {
    /// Parse input like `n`, `e 2`, `d3`. Card numbers are 1-based.
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let mut chars = input.chars();
        let verb = chars.next()?.to_ascii_lowercase();
        let rest = chars.as_str().trim();

        let card_number = || rest.parse::<usize>().ok().filter(|n| *n > 0);

        match verb {
            'n' if rest.is_empty() => Some(Self::New),
            'r' if rest.is_empty() => Some(Self::Reload),
            'h' | '?' if rest.is_empty() => Some(Self::Help),
            'q' if rest.is_empty() => Some(Self::Quit),
            'e' => card_number().map(Self::Edit),
            'd' => card_number().map(Self::Delete),
            _ => None,
        }
    }
}

/// Execute the board command.
pub async fn execute(api: HttpNotesApi, args: BoardArgs) -> Result<()> {
    let mut board = NoteBoard::new(api, TerminalPrompt::interactive());
    let mut composer = NoteComposer::new();

    render::loading();
    board.load().await;

    loop {
        render::page(&board, &composer, args.width);

        let Some(line) = read_line("> ")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(action) = Action::parse(&line) else {
            println!("{} {}", "Unknown command:".yellow(), line.trim());
            continue;
        };

        match action {
            Action::New => compose(&mut board, &mut composer).await?,
            Action::Edit(number) => match card_at(&board, number) {
                Some(mut card) => edit(&mut board, &mut card).await?,
                None => no_such_card(number),
            },
            Action::Delete(number) => match card_at(&board, number) {
                Some(card) => {
                    if card.delete(&mut board).await.is_applied() {
                        println!("{}", "Note deleted.".green());
                    }
                }
                None => no_such_card(number),
            },
            Action::Reload => {
                render::loading();
                board.reload().await;
            }
            Action::Help => render::help(),
            Action::Quit => break,
        }
    }

    Ok(())
}

fn card_at(board: &Board, number: usize) -> Option<NoteCard> {
    board
        .visible_notes()
        .get(number - 1)
        .cloned()
        .map(NoteCard::new)
}

fn no_such_card(number: usize) {
    println!("{} #{}", "No such note:".yellow(), number);
}

/// Expand the composer, collect drafts, then save or cancel.
async fn compose(board: &mut Board, composer: &mut NoteComposer) -> Result<()> {
    composer.expand();
    println!("{}", "New note".green().bold());

    let title = read_line("Title: ")?.unwrap_or_default();
    composer.set_title(title);

    let content = read_text(&format!(
        "Take a note... (end with a line containing only '{}')",
        END_OF_TEXT
    ))?;
    composer.set_content(content);

    if !composer.can_save() {
        println!("{}", "Nothing to save.".dimmed());
        composer.cancel();
        return Ok(());
    }

    let answer = read_line("Save? [Y/n] ")?.unwrap_or_default();
    if answer.trim().is_empty() || is_yes(&answer) {
        if composer.save(board).await.is_applied() {
            println!("{}", "Note saved.".green());
        }
    } else {
        composer.cancel();
        println!("{}", "Discarded.".dimmed());
    }

    Ok(())
}

/// New value for an edited field: `None` keeps it, `-` clears it.
fn field_edit(input: String) -> Option<String> {
    match input.as_str() {
        "" => None,
        CLEAR_FIELD => Some(String::new()),
        _ => Some(input),
    }
}

/// Edit one card.
async fn edit(board: &mut Board, card: &mut NoteCard) -> Result<()> {
    card.begin_edit();
    println!("{} {}", "Editing".green().bold(), card.note().display_title());

    let title = read_line(&format!("Title (Enter to keep, '{CLEAR_FIELD}' to clear): "))?;
    if let Some(title) = field_edit(title.unwrap_or_default()) {
        card.set_title_draft(title);
    }

    let content = read_text(&format!(
        "Content (end with '{END_OF_TEXT}', empty to keep, '{CLEAR_FIELD}' to clear):"
    ))?;
    if let Some(content) = field_edit(content) {
        card.set_content_draft(content);
    }

    let answer = read_line("Save? [Y/n] ")?.unwrap_or_default();
    if answer.trim().is_empty() || is_yes(&answer) {
        if card.save(board).await.is_applied() {
            println!("{}", "Note updated.".green());
        }
    } else {
        card.cancel();
        println!("{}", "Changes discarded.".dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_actions() {
        assert_eq!(Action::parse("n"), Some(Action::New));
        assert_eq!(Action::parse(" R "), Some(Action::Reload));
        assert_eq!(Action::parse("h"), Some(Action::Help));
        assert_eq!(Action::parse("?"), Some(Action::Help));
        assert_eq!(Action::parse("q"), Some(Action::Quit));
    }

    #[test]
    fn test_parse_card_actions() {
        assert_eq!(Action::parse("e 2"), Some(Action::Edit(2)));
        assert_eq!(Action::parse("d3"), Some(Action::Delete(3)));
        assert_eq!(Action::parse("E 10"), Some(Action::Edit(10)));
    }

    #[test]
    fn test_field_edit() {
        assert_eq!(field_edit(String::new()), None);
        assert_eq!(field_edit("-".to_string()), Some(String::new()));
        assert_eq!(field_edit("Groceries".to_string()), Some("Groceries".to_string()));
        assert_eq!(field_edit("- milk".to_string()), Some("- milk".to_string()));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Action::parse(""), None);
        assert_eq!(Action::parse("e"), None);
        assert_eq!(Action::parse("e 0"), None);
        assert_eq!(Action::parse("d x"), None);
        assert_eq!(Action::parse("nope"), None);
        assert_eq!(Action::parse("x"), None);
    }
}
