//! Terminal output for the tartan CLI.
//!
//! Status lines go to stderr as a right-aligned coloured verb followed by
//! a message. Stdout carries only listings, so it can be piped.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::Colour;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Status printer for stderr.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Colour when stderr is a terminal.
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self {
            color,
            quiet: false,
        }
    }

    /// Suppress everything except errors.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Progress line, e.g. "     Weaving Royal Stewart".
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Completion line, e.g. "       Wrote dist/Wallace.png".
    pub fn success(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    pub fn warning(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(YELLOW, verb, message);
        }
    }

    /// Always printed, even when quiet.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Dim text, for secondary detail such as a thread count.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// A two-cell block painted in `colour` (24-bit ANSI background).
    /// Empty when colour output is off.
    pub fn swatch(&self, colour: Colour) -> String {
        if self.color {
            format!("\x1b[48;2;{};{};{}m  {RESET}", colour.r, colour.g, colour.b)
        } else {
            String::new()
        }
    }

    fn format_line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let line = self.format_line(color, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// `plural(1, "tartan", "tartans")` is "1 tartan".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Path relative to the working directory when it is inside it.
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(|p| p.display().to_string()))
        .map(|s| if s.is_empty() { ".".to_string() } else { s })
        .unwrap_or_else(|| path.display().to_string())
}
