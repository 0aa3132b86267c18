//! Drawing the note board on the terminal.

use colored::Colorize;
use notes_client::presentation::{CardView, NoteCard, NoteComposer};
use notes_client::{BoardState, LoadFailure, NoteBoard, NotesApi, UserPrompt};

/// Print the whole board: header, composer, then the state-dependent body.
pub fn page<A: NotesApi, P: UserPrompt>(board: &NoteBoard<A, P>, composer: &NoteComposer, width: usize) {
    println!();
    println!("{}", "My Notes".green().bold());
    println!("{}", "=".repeat(width));

    if !composer.is_expanded() {
        println!("  {} {}", "[n]".cyan(), "Take a note...".dimmed());
        println!();
    }

    match board.state() {
        BoardState::Loading => loading(),
        BoardState::Error(failure) => load_error(failure),
        BoardState::Ready if board.visible_notes().is_empty() => empty(),
        BoardState::Ready => {
            for (index, note) in board.visible_notes().iter().enumerate() {
                card(index + 1, &NoteCard::new(note.clone()).view(width));
            }
        }
    }

    println!(
        "{}",
        "n new   e <#> edit   d <#> delete   r reload   h help   q quit".dimmed()
    );
}

pub fn loading() {
    println!("  {}", "Loading notes...".dimmed());
    println!();
}

fn load_error(failure: &LoadFailure) {
    println!("  {}", failure.message.red().bold());
    println!("  {}", failure.hint().dimmed());
    println!("  {} {}", "[r]".cyan(), "Retry");
    println!();
}

fn empty() {
    println!("  {}", "No notes yet".bold());
    println!("  {}", "Create your first note to get started!".dimmed());
    println!();
}

/// One card in read mode; `index` is what `e`/`d` refer to.
pub fn card(index: usize, view: &CardView) {
    let label = format!("#{}", index);
    for (i, line) in view.title.iter().enumerate() {
        if i == 0 {
            println!("  {} {}", label.yellow(), line.bold());
        } else {
            println!("  {} {}", " ".repeat(label.len()), line.bold());
        }
    }

    let indent = " ".repeat(label.len() + 3);
    for line in &view.content {
        println!("{}{}", indent, line);
    }

    match view.updated {
        Some(updated) => println!(
            "{}{} {}  {} {}",
            indent,
            "Created:".cyan(),
            view.created,
            "Updated:".cyan(),
            updated
        ),
        None => println!("{}{} {}", indent, "Created:".cyan(), view.created),
    }
    println!();
}

pub fn help() {
    println!("{}", "Commands".green().bold());
    println!("  {}        take a new note", "n".cyan());
    println!("  {}    edit card #", "e <#>".cyan());
    println!("  {}    delete card #", "d <#>".cyan());
    println!("  {}        reload all notes from the server", "r".cyan());
    println!("  {}        show this help", "h".cyan());
    println!("  {}        quit", "q".cyan());
}
