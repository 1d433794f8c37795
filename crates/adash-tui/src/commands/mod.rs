// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::app::ViewKind;
use std::path::PathBuf;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Close the app regardless of state
    Exit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Toggle display of dates in tables
    Dates,
    // Switch to a view
    View(ViewKind),
    // Apply a category filter to the active view ("all" clears it)
    Filter(String),
    // Export the active view's filtered records as JSON
    Export(Option<PathBuf>),
    // Mark every notification read
    ReadAll,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "dates" => Ok(Command::Dates),
            "read-all" | "readall" => Ok(Command::ReadAll),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "view" => match ViewKind::from_name(rest) {
                Some(view) => Ok(Command::View(view)),
                None => Err("usage: view <orders|users|documents|notifications>".to_string()),
            },
            "filter" => {
                if rest.is_empty() {
                    Err("usage: filter <value|all>".to_string())
                } else {
                    Ok(Command::Filter(rest.to_string()))
                }
            }
            "export" => {
                if rest.is_empty() {
                    Ok(Command::Export(None))
                } else {
                    Ok(Command::Export(Some(PathBuf::from(rest))))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
