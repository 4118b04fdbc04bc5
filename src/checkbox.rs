//! Checkbox extraction from a run of section lines.

use crate::line::{Checkbox, LineKind};

const INDENT: &str = "    ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Rendered checkbox lines pulled out of one or more sections.
pub struct Extracted {
    /// Indented checked items.
    pub complete: Vec<String>,
    /// Indented unchecked items, emphasised when they came from the current section.
    pub incomplete: Vec<String>,
}

impl Extracted {
    /// Append the items of another extraction, preserving order.
    pub fn extend(&mut self, other: Self) {
        self.complete.extend(other.complete);
        self.incomplete.extend(other.incomplete);
    }
}

#[must_use]
/// Collect checkbox items from `lines`.
///
/// Checked items are only collected from the current section; unchecked items are collected
/// everywhere, and wrapped in `**` when `is_current_section` holds so today's open items
/// stand out once merged with everyone else's.
pub fn extract<S: AsRef<str>>(lines: &[S], is_current_section: bool) -> Extracted {
    let mut out = Extracted::default();
    for line in lines {
        let line = line.as_ref();
        match LineKind::classify(line) {
            LineKind::CheckedItem(_) if is_current_section => {
                out.complete.push(format!("{INDENT}{line}"));
            }
            LineKind::UncheckedItem(item) => {
                let rendered = if is_current_section {
                    emphasise(item).unwrap_or_else(|| line.to_string())
                } else {
                    line.to_string()
                };
                out.incomplete.push(format!("{INDENT}{rendered}"));
            }
            _ => {}
        }
    }
    out
}

fn emphasise(item: Checkbox<'_>) -> Option<String> {
    if item.text.trim().is_empty() {
        return None;
    }
    Some(format!("{} **{}**", item.prefix, item.text))
}

#[cfg(test)]
#[path = "tests/checkbox.rs"]
mod tests;
