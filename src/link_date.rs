//! Monthly index of documents that link to date-named notes.
//!
//! Daily notes are named like `02_June_2024`. Any document linking to one is listed under that
//! month. Link targets must contain an underscore to count as dates at all, which keeps
//! date-shaped link names such as `3 May 2020` out of the index even though the
//! components would parse.

use crate::ordered::{OrderedMap, OrderedSet};
use crate::store::{DocumentRef, Metadata};
use chrono::{Month, NaiveDate};
use tracing::debug;

/// Required separator for a link target to be considered a date.
pub const DATE_SEPARATOR: char = '_';

/// Month key to the distinct entry lines filed under it.
pub type MonthIndex = OrderedMap<String, OrderedSet<String>>;

fn is_component_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ')
}

/// Strip a non-empty run of component separators.
fn skip_separator(s: &str) -> Option<&str> {
    let rest = s.trim_start_matches(is_component_separator);
    (rest.len() < s.len()).then_some(rest)
}

/// Parse `day month year` separated by runs of `_`, `-` or space, with a full month name.
fn parse_components(target: &str) -> Option<NaiveDate> {
    let s = target.trim();

    let day_len = s.chars().take_while(char::is_ascii_digit).count();
    if !(1..=2).contains(&day_len) {
        return None;
    }
    let day: u32 = s[..day_len].parse().ok()?;

    let rest = skip_separator(&s[day_len..])?;
    let month_len = rest.chars().take_while(char::is_ascii_alphabetic).count();
    let month_name = &rest[..month_len];
    let month: Month = month_name.parse().ok()?;
    if !month.name().eq_ignore_ascii_case(month_name) {
        return None;
    }

    let year = skip_separator(&rest[month_len..])?;
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.number_from_month(), day)
}

#[must_use]
/// Date named by a link target, if it is a date link.
///
/// The target must parse as a date and also contain [`DATE_SEPARATOR`].
pub fn parse_link_date(target: &str) -> Option<NaiveDate> {
    let date = parse_components(target)?;
    target.contains(DATE_SEPARATOR).then_some(date)
}

#[must_use]
/// Bucket key for a date, e.g. `June 2024`.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn parse_month_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {key}"), "%d %B %Y").ok()
}

#[must_use]
/// Index line for a document: its wiki reference, then its tags if it has any.
pub fn entry_line(doc: &DocumentRef, meta: &Metadata) -> String {
    let mut line = format!("- {}", doc.wiki_ref());
    if !meta.tags.is_empty() {
        line.push(' ');
        line.push_str(&meta.tags.iter().cloned().collect::<Vec<_>>().join(", "));
    }
    line
}

/// Build the month index over documents whose path matches one of `prefixes`.
///
/// Entries keep first-insertion order within a month; months are ordered chronologically.
pub fn build_index<'a, I>(documents: I, prefixes: &[String]) -> MonthIndex
where
    I: IntoIterator<Item = (&'a DocumentRef, &'a Metadata)>,
{
    let mut index = MonthIndex::new();
    for (doc, meta) in documents {
        if !doc.matches_prefix(prefixes) {
            continue;
        }
        for link in &meta.links {
            let Some(date) = parse_link_date(link) else {
                continue;
            };
            debug!(document = %doc.name, link = %link, "dated link");
            index
                .entry_or_default(month_key(date))
                .insert(entry_line(doc, meta));
        }
    }
    index.sort_keys_by(|a, b| {
        let (a, b) = (parse_month_key(a), parse_month_key(b));
        a.is_none().cmp(&b.is_none()).then(a.cmp(&b))
    });
    index
}

#[must_use]
/// Render the index as `### Month Year` headings followed by their entries.
pub fn render(index: &MonthIndex) -> String {
    let mut out = String::new();
    for (month, entries) in index.iter() {
        if entries.is_empty() {
            continue;
        }
        out.push_str("### ");
        out.push_str(month);
        out.push('\n');
        for entry in entries.iter() {
            out.push_str(entry);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/link_date.rs"]
mod tests;
