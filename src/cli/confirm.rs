use crate::errors::{Result, StackSyncError};
use crate::stack::Confirm;
use console::Term;
use dialoguer::theme::SimpleTheme;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Rendered as `Confirm [y/n]: `
pub const PROMPT: &str = "Confirm [y/n]";

/// Only a lone `y` (surrounding whitespace aside) counts as agreement.
pub fn is_confirmation(input: &str) -> bool {
    input.trim() == "y"
}

/// Asks on the terminal, or reads one line from piped stdin
pub struct TerminalConfirm;

impl TerminalConfirm {
    fn read_interactive(&self) -> Result<String> {
        Input::<String>::with_theme(&SimpleTheme)
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| StackSyncError::prompt(e.to_string()))
    }

    fn read_piped(&self) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{PROMPT}: ")?;
        stdout.flush()?;

        // EOF reads as an empty answer
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self) -> Result<bool> {
        let input = if io::stdin().is_terminal() && Term::stderr().is_term() {
            self.read_interactive()?
        } else {
            self.read_piped()?
        };
        Ok(is_confirmation(&input))
    }
}
