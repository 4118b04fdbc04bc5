//! Markdown format implementation using tree-sitter-md.
//!
//! The block grammar wraps paragraph, list item and heading text in `inline` nodes, which is
//! exactly the prose we want to scan; fenced and indented code never contains one.

use crate::formats::Format;

/// Tree-sitter queries for markdown prose.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn prose_query(&self) -> &'static str {
        "(inline) @prose"
    }
}
