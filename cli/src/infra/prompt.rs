//! Terminal implementation of the `OperatorPrompt` port.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use console::Term;

use crate::application::ports::OperatorPrompt;

/// Reads selections from stdin and clears/settles via the terminal.
pub struct TermPrompt {
    term: Term,
}

impl TermPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorPrompt for TermPrompt {
    fn read_selection(&self, prompt: &str) -> Result<String> {
        print!("\n{prompt}: ");
        std::io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading selection")?;
        anyhow::ensure!(read > 0, "end of input while reading selection");
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn clear_screen(&self) {
        let _ = self.term.clear_screen();
    }

    fn settle(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
