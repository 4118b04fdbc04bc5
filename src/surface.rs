//! Editing surfaces hold the target document while its sections are rewritten.
//!
//! The pipeline only ever needs two operations from whatever owns the buffer: read the whole
//! text, and replace a half-open line range. [`LineBuffer`] is the in-memory implementation the
//! binary loads the target file into and writes back out afterwards.

use std::path::Path;
use std::{fs, io};

/// Target buffer that sections are rewritten into.
pub trait EditingSurface {
    /// Full current text of the buffer.
    fn text(&self) -> String;
    /// Replace lines `[start, end)` with the lines of `text`.
    fn replace_lines(&mut self, start: usize, end: usize, text: &str);
}

const LF: &str = "\n";
const CRLF: &str = "\r\n";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Line-addressed text buffer that remembers its line ending and whether the source ended in
/// one.
pub struct LineBuffer {
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            line_ending: LF,
            trailing_newline: false,
        }
    }
}

impl LineBuffer {
    #[must_use]
    /// Split text into lines, accepting `\n` and `\r\n` endings.
    ///
    /// A buffer whose first line ends in `\r\n` is written back with `\r\n` throughout.
    pub fn from_text(text: &str) -> Self {
        let line_ending = match text.find('\n') {
            Some(i) if text[..i].ends_with('\r') => CRLF,
            _ => LF,
        };
        Self {
            lines: text.lines().map(str::to_string).collect(),
            line_ending,
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Load a buffer from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::from_text(&fs::read_to_string(path)?))
    }

    /// Write the buffer back to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.text())
    }

    #[must_use]
    /// Lines currently held.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    /// Line ending used when the buffer is written out.
    pub fn line_ending(&self) -> &'static str {
        self.line_ending
    }
}

impl EditingSurface for LineBuffer {
    fn text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline && !self.lines.is_empty() {
            text.push_str(self.line_ending);
        }
        text
    }

    fn replace_lines(&mut self, start: usize, end: usize, text: &str) {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        let at_end = end == self.lines.len();
        drop(self.lines.splice(start..end, text.lines().map(str::to_string)));
        if at_end && text.ends_with('\n') {
            self.trailing_newline = true;
        }
    }
}

#[cfg(test)]
#[path = "tests/surface.rs"]
mod tests;
