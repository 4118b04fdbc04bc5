//! Section representation and indexing for ATX-headed documents.
//!
//! A section is a header line plus the lines that follow it. Each section tracks two end
//! coordinates: `body_end`, where the next header of any depth begins, and `end`, where the
//! next header of equal or shallower depth begins. The `body_end` ranges partition the
//! document; the `end` ranges absorb nested sub-sections and are what gets rewritten.

use crate::line::LineKind;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Header-delimited division of a document with line coordinates.
pub struct Section {
    /// Full header line, markers included (the lookup key).
    pub header: String,
    /// Marker run-length of the header, 0 for text before the first header.
    pub depth: usize,
    /// Line of the header itself (inclusive).
    pub start: usize,
    /// Line where the next header of any depth begins, or document end (exclusive).
    pub body_end: usize,
    /// Line where the next header of equal or shallower depth begins, or document end
    /// (exclusive).
    pub end: usize,
}

impl Section {
    #[must_use]
    /// Lines owned directly by this section, excluding nested sub-sections.
    pub fn body<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[self.start..self.body_end]
    }
}

#[derive(Debug, Default)]
/// Ordered sections of one document with lookup by header text.
pub struct SectionIndex {
    sections: Vec<Section>,
    by_header: HashMap<String, usize>,
}

impl SectionIndex {
    #[must_use]
    /// Index the sections of a document given as lines.
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        let depths: Vec<Option<usize>> = lines
            .iter()
            .map(|line| LineKind::classify(line.as_ref()).depth())
            .collect();

        let mut starts: Vec<(usize, usize)> = depths
            .iter()
            .enumerate()
            .filter_map(|(i, depth)| depth.map(|d| (i, d)))
            .collect();
        if !lines.is_empty() && depths[0].is_none() {
            starts.insert(0, (0, 0));
        }

        let mut index = Self::default();
        for (n, &(start, depth)) in starts.iter().enumerate() {
            let body_end = starts.get(n + 1).map_or(lines.len(), |&(next, _)| next);
            let end = if depth == 0 {
                body_end
            } else {
                starts[n + 1..]
                    .iter()
                    .find(|&&(_, d)| d <= depth)
                    .map_or(lines.len(), |&(next, _)| next)
            };
            let header = lines[start].as_ref().to_string();
            index.by_header.insert(header.clone(), index.sections.len());
            index.sections.push(Section {
                header,
                depth,
                start,
                body_end,
                end,
            });
        }
        index
    }

    #[must_use]
    /// Index a document given as text.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self::new(&lines)
    }

    #[must_use]
    /// Look up a section by its exact header line. The last duplicate wins.
    pub fn get(&self, header: &str) -> Option<&Section> {
        self.by_header.get(header).map(|&i| &self.sections[i])
    }

    /// Every section in document order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    #[must_use]
    /// Number of sections, duplicates included.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether the document had no lines.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
