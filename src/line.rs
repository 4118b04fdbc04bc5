//! Line classification for ATX headers and checkbox items.
//!
//! Every consumer of document text goes through [`LineKind::classify`] rather than slicing
//! on bracket positions itself, so header detection and checkbox detection agree everywhere.

/// Literal marker of a completed checkbox item.
pub const CHECKED_MARKER: &str = "- [x]";
/// Literal marker of an open checkbox item.
pub const UNCHECKED_MARKER: &str = "- [ ]";

const HEADER_MARKER: char = '#';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a single line of a document is, for sectioning and task extraction.
pub enum LineKind<'a> {
    /// An ATX header with the given marker run-length.
    Header(usize),
    /// A line containing the checked marker.
    CheckedItem(Checkbox<'a>),
    /// A line containing the unchecked marker.
    UncheckedItem(Checkbox<'a>),
    /// Anything else.
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A checkbox line split around its marker.
pub struct Checkbox<'a> {
    /// Everything up to and including the marker's closing bracket.
    pub prefix: &'a str,
    /// The item text after the marker, without the separating space.
    pub text: &'a str,
}

impl<'a> LineKind<'a> {
    #[must_use]
    /// Classify a raw line.
    ///
    /// Headers are one or more `#` followed by whitespace or the end of the line, so a bare
    /// `#tag` at the start of a line is not a header. The checked marker wins when a line
    /// carries both markers.
    pub fn classify(line: &'a str) -> Self {
        if let Some(depth) = header_depth(line) {
            return Self::Header(depth);
        }
        if let Some(item) = split_checkbox(line, CHECKED_MARKER) {
            return Self::CheckedItem(item);
        }
        if let Some(item) = split_checkbox(line, UNCHECKED_MARKER) {
            return Self::UncheckedItem(item);
        }
        Self::Other
    }

    #[must_use]
    /// Header depth, if this line is a header.
    pub fn depth(&self) -> Option<usize> {
        match self {
            Self::Header(depth) => Some(*depth),
            _ => None,
        }
    }
}

fn header_depth(line: &str) -> Option<usize> {
    let depth = line.chars().take_while(|c| *c == HEADER_MARKER).count();
    if depth == 0 {
        return None;
    }
    // Markers are ASCII so the char count is also the byte offset.
    match line[depth..].chars().next() {
        None | Some(' ' | '\t') => Some(depth),
        Some(_) => None,
    }
}

fn split_checkbox<'a>(line: &'a str, marker: &str) -> Option<Checkbox<'a>> {
    let at = line.find(marker)?;
    let (prefix, rest) = line.split_at(at + marker.len());
    Some(Checkbox {
        prefix,
        text: rest.strip_prefix(' ').unwrap_or(rest),
    })
}

#[cfg(test)]
#[path = "tests/line.rs"]
mod tests;
