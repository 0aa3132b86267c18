//! Terminal input and the prompt the board uses for confirmations and alerts.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use notes_client::UserPrompt;

/// Line that ends multi-line input.
pub const END_OF_TEXT: &str = ".";

/// Print `prompt` and read one line without its line ending.
///
/// Returns `None` at end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let trimmed_len = input.trim_end_matches(['\n', '\r']).len();
    input.truncate(trimmed_len);
    Ok(Some(input))
}

/// Read lines until a lone `.` or end of input, joined with newlines.
pub fn read_text(prompt: &str) -> io::Result<String> {
    println!("{}", prompt);

    let mut lines = Vec::new();
    while let Some(line) = read_line("")? {
        if line == END_OF_TEXT {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Whether an answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// [`UserPrompt`] on stdin/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    /// Answer every confirmation with yes without asking.
    pub assume_yes: bool,
    /// Wait for Enter after each alert.
    pub acknowledge_alerts: bool,
}

impl TerminalPrompt {
    /// Prompt for the interactive board.
    pub fn interactive() -> Self {
        Self {
            assume_yes: false,
            acknowledge_alerts: true,
        }
    }

    /// Prompt for one-shot commands.
    pub fn one_shot(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            acknowledge_alerts: false,
        }
    }
}

impl UserPrompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} {} [y/N] ", "Warning:".yellow().bold(), message);
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(_) => is_yes(&input),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);

        if self.acknowledge_alerts {
            eprint!("{}", "Press Enter to continue...".dimmed());
            let _ = io::stderr().flush();
            let mut input = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut input) {
                tracing::warn!(error = %e, "could not read acknowledgement");
            }
        }
    }
}
