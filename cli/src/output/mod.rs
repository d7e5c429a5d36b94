//! Output formatting module

#![allow(dead_code)] // Helper methods not yet adopted by all callers

pub mod styles;
pub mod table;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
}

impl OutputContext {
    /// Create output context based on the environment.
    #[must_use]
    pub fn new() -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, is_tty }
    }

    /// Print a success message prefixed with `✓`.
    pub fn success(&self, msg: &str) {
        println!("  {} {msg}", "✓".style(self.styles.success));
    }

    /// Print a warning message prefixed with `⚠`.
    pub fn warn(&self, msg: &str) {
        println!("  {} {msg}", "⚠".style(self.styles.warning));
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`.
    pub fn info(&self, msg: &str) {
        println!("  {} {msg}", "ℹ".style(self.styles.info));
    }

    /// Print a section header.
    pub fn header(&self, msg: &str) {
        println!("  {}", msg.style(self.styles.header));
    }
}

impl Default for OutputContext {
    fn default() -> Self {
        Self::new()
    }
}
