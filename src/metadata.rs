//! Outbound link and tag extraction for documents on disk.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::store::Metadata;
use regex::Regex;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

const WIKI_LINK: &str = r"\[\[([^\[\]|#]+)(?:#[^\[\]|]*)?(?:\|[^\[\]]*)?\]\]";
const TAG: &str = r"(?:^|\s)(#[\w/-]+)";

/// Reusable parser and patterns for pulling [`Metadata`] out of document text.
pub struct MetadataScanner {
    parser: Parser,
    query: Query,
    link: Regex,
    tag: Regex,
}

impl MetadataScanner {
    /// Build a scanner for the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the query does not compile.
    pub fn new(format: &dyn Format) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parse(e.to_string()))?;
        let query =
            Query::new(&language, format.prose_query()).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(Self {
            parser,
            query,
            link: Regex::new(WIKI_LINK).map_err(|e| Error::Parse(e.to_string()))?,
            tag: Regex::new(TAG).map_err(|e| Error::Parse(e.to_string()))?,
        })
    }

    /// Collect wiki-link targets and tags from the prose of `source`.
    ///
    /// Link targets drop any `#heading` suffix and `|alias`. Tags keep their leading `#` and
    /// must contain at least one non-digit character.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    pub fn scan(&mut self, source: &str) -> Result<Metadata> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::Parse("parser returned no tree".to_string()))?;

        let mut meta = Metadata::default();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), source.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let text = &source[capture.node.byte_range()];
                for caps in self.link.captures_iter(text) {
                    meta.links.insert(caps[1].trim().to_string());
                }
                for caps in self.tag.captures_iter(text) {
                    let tag = &caps[1];
                    if tag[1..].chars().any(|c| !c.is_ascii_digit()) {
                        meta.tags.insert(tag.to_string());
                    }
                }
            }
        }
        Ok(meta)
    }
}

#[cfg(test)]
#[path = "tests/metadata.rs"]
mod tests;
