//! The rewrite plan captures every section replacement of a run before any is applied.
//!
//! Building the whole plan first means the target buffer is never left half-updated by a
//! failure mid-run, and the plan can be printed as JSON for inspection instead of applied.

use crate::rewrite::replace_section;
use crate::surface::EditingSurface;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Header of the section receiving today's completed items.
pub const COMPLETE_HEADER: &str = "## `complete`";
/// Header of the section receiving open items grouped by tag.
pub const INCOMPLETE_HEADER: &str = "## `incomplete`";
/// Header of the section receiving the monthly task index.
pub const TASK_INDEX_HEADER: &str = "## `task_index`";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable, ordered collection of section replacements for one target document.
pub struct RewritePlan {
    /// Replacements in the order they are applied.
    pub edits: Vec<SectionEdit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// New body for one section, addressed by its header line.
pub struct SectionEdit {
    /// Exact header line of the section to replace.
    pub header: String,
    /// New section body, without the header.
    pub content: String,
}

impl RewritePlan {
    /// Queue a replacement.
    pub fn push(&mut self, header: &str, content: String) {
        self.edits.push(SectionEdit {
            header: header.to_string(),
            content,
        });
    }

    /// Apply every edit in order, returning the headers that were found and rewritten.
    pub fn apply(&self, surface: &mut dyn EditingSurface) -> Vec<String> {
        let mut applied = Vec::new();
        for edit in &self.edits {
            if replace_section(surface, &edit.header, &edit.content) {
                applied.push(edit.header.clone());
            }
        }
        info!(
            applied = applied.len(),
            planned = self.edits.len(),
            "rewrite plan applied"
        );
        applied
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
