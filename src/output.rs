//! Status and diagnostic printing for the jamgen CLI.
//!
//! Every line goes to stderr as a right-aligned verb followed by a message,
//! the way cargo reports progress. stdout is left for the JSON dump and help
//! text.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Colour of a line's verb, and whether `-quiet` hides the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Note,
    Warn,
    Fail,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Note => "\x1b[36m",
            Tone::Warn => "\x1b[33m",
            Tone::Fail => "\x1b[31m",
        }
    }

    /// Warnings and failures always print.
    pub fn is_chatter(self) -> bool {
        matches!(self, Tone::Progress | Tone::Note)
    }
}

/// Prints status lines to stderr, coloured when stderr is a terminal.
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
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// Drop progress and note lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// e.g. `    Scanning assets`
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Tone::Fail, verb, message);
    }

    /// Grey out secondary text such as diagnostic codes.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        if self.quiet && tone.is_chatter() {
            return;
        }
        let line = self.format_line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }

    fn format_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

/// `counted(1, "sprite", "sprites")` gives "1 sprite".
pub fn counted(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Show a path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
