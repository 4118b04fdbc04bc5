//! Whole-section replacement inside an editing surface.

use crate::section::SectionIndex;
use crate::surface::EditingSurface;
use tracing::debug;

/// Replace the named section, nested sub-sections included, with `content`.
///
/// The section is re-indexed from the surface's current text, so earlier rewrites in the same
/// run are accounted for. The replacement is the header line, the non-blank lines of
/// `content`, and one blank separator line. Returns `false` and leaves the surface untouched
/// when no section has that header.
pub fn replace_section(surface: &mut dyn EditingSurface, header: &str, content: &str) -> bool {
    let index = SectionIndex::from_text(&surface.text());
    let Some(section) = index.get(header) else {
        debug!(header, "section not present, skipping rewrite");
        return false;
    };

    let mut block = String::with_capacity(header.len() + content.len() + 2);
    block.push_str(header);
    block.push('\n');
    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        block.push_str(line);
        block.push('\n');
    }
    block.push('\n');

    debug!(
        header,
        start = section.start,
        end = section.end,
        "rewriting section"
    );
    surface.replace_lines(section.start, section.end, &block);
    true
}

#[cfg(test)]
#[path = "tests/rewrite.rs"]
mod tests;
