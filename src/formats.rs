//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over document formats by providing
//! the tree-sitter grammar and the query selecting prose nodes. Links and tags are only read
//! from prose, so code blocks and heading markers never produce spurious metadata.

pub mod markdown;

/// Grammar and queries needed to scan a document format for links and tags.
pub trait Format {
    /// Tree-sitter grammar for the format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing the nodes whose text may carry links and tags.
    fn prose_query(&self) -> &str;
}
