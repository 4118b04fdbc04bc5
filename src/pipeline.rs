//! The aggregation pipeline: select documents, extract their checkboxes, group and render
//! them, then rewrite the target document's `complete`, `incomplete` and `task_index`
//! sections.
//!
//! Every document is read before any grouping starts, and the target surface is only touched
//! once the full [`RewritePlan`] exists. A document that fails to read is logged and left out;
//! a missing current document aborts the run before anything is written.

use crate::checkbox::{self, Extracted};
use crate::config::Config;
use crate::edit_plan::{RewritePlan, COMPLETE_HEADER, INCOMPLETE_HEADER, TASK_INDEX_HEADER};
use crate::error::{Error, Result};
use crate::grouping::{sort_keys, GroupKey};
use crate::link_date;
use crate::ordered::OrderedMap;
use crate::section::SectionIndex;
use crate::store::{DocumentRef, DocumentStore, Metadata};
use crate::surface::EditingSurface;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything a run needs from its host.
pub struct Context<'a> {
    /// Where source documents come from.
    pub store: &'a dyn DocumentStore,
    /// The target document being rewritten.
    pub surface: &'a mut dyn EditingSurface,
    /// Name of the document the run was started from.
    pub current: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
/// Outcome of aggregating a store, before or after applying it.
pub struct Aggregation {
    /// Section replacements, in application order.
    pub plan: RewritePlan,
    /// Names of documents that were selected and read.
    pub selected: Vec<String>,
    /// Names of selected documents that could not be read.
    pub unreadable: Vec<String>,
    /// Headers actually rewritten; empty until applied.
    pub applied: Vec<String>,
}

/// A selected document after its text has been read and its checkboxes pulled out.
struct Harvest {
    doc: DocumentRef,
    meta: Metadata,
    items: Extracted,
}

#[must_use]
/// Whether a document takes part in aggregation for `current`.
pub fn is_selected(doc: &DocumentRef, meta: &Metadata, config: &Config, current: &str) -> bool {
    if !doc.matches_prefix(&config.path_prefixes) || doc.name == config.index_document {
        return false;
    }
    meta.links.contains(current)
        || config
            .in_progress_tags
            .iter()
            .any(|tag| meta.tags.contains(tag))
}

#[must_use]
/// Checkbox items of a whole document, section by section.
///
/// A section counts as current when its header line mentions `current`.
pub fn extract_document(text: &str, current: &str) -> Extracted {
    let lines: Vec<&str> = text.lines().collect();
    let index = SectionIndex::new(&lines);
    let mut items = Extracted::default();
    for section in index.iter() {
        items.extend(checkbox::extract(
            section.body(&lines),
            section.header.contains(current),
        ));
    }
    items
}

fn group_incomplete(harvests: &[Harvest], excluded: &[String]) -> OrderedMap<GroupKey, String> {
    let mut buckets: OrderedMap<GroupKey, String> = OrderedMap::new();
    for harvest in harvests {
        if harvest.items.incomplete.is_empty() {
            continue;
        }
        let key = GroupKey::for_tags(&harvest.meta.tags, excluded);
        let bucket = buckets.entry_or_default(key);
        push_block(bucket, &harvest.doc, &harvest.items.incomplete);
    }
    let order = sort_keys(buckets.keys());
    buckets.reorder(order);
    buckets
}

fn push_block(out: &mut String, doc: &DocumentRef, lines: &[String]) {
    out.push_str("- ");
    out.push_str(&doc.wiki_ref());
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

fn render_incomplete(buckets: &OrderedMap<GroupKey, String>) -> String {
    let mut out = String::new();
    for (key, content) in buckets.iter() {
        if content.is_empty() {
            continue;
        }
        out.push_str("### ");
        out.push_str(key.as_str());
        out.push('\n');
        out.push_str(content);
    }
    out
}

fn render_complete(harvests: &[Harvest]) -> String {
    let mut out = String::new();
    for harvest in harvests.iter().filter(|h| !h.items.complete.is_empty()) {
        push_block(&mut out, &harvest.doc, &harvest.items.complete);
    }
    out
}

/// Build the rewrite plan for `current` without touching any target.
///
/// # Errors
///
/// Returns [`Error::MissingCurrentDocument`] if `current` is absent or empty.
pub fn aggregate(
    store: &dyn DocumentStore,
    config: &Config,
    current: Option<&str>,
) -> Result<Aggregation> {
    let current = current
        .filter(|name| !name.is_empty())
        .ok_or(Error::MissingCurrentDocument)?;

    let catalogue: Vec<(DocumentRef, Metadata)> = store
        .documents()
        .into_iter()
        .map(|doc| {
            let meta = store.metadata(&doc);
            (doc, meta)
        })
        .collect();

    let mut aggregation = Aggregation::default();
    let mut harvests = Vec::new();
    for (doc, meta) in &catalogue {
        if !is_selected(doc, meta, config, current) {
            continue;
        }
        match store.read(doc) {
            Ok(text) => {
                let items = extract_document(&text, current);
                debug!(
                    document = %doc.name,
                    complete = items.complete.len(),
                    incomplete = items.incomplete.len(),
                    "extracted"
                );
                aggregation.selected.push(doc.name.clone());
                harvests.push(Harvest {
                    doc: doc.clone(),
                    meta: meta.clone(),
                    items,
                });
            }
            Err(e) => {
                warn!(document = %doc.name, error = %e, "skipping unreadable document");
                aggregation.unreadable.push(doc.name.clone());
            }
        }
    }

    let buckets = group_incomplete(&harvests, &config.excluded_tags);
    aggregation
        .plan
        .push(COMPLETE_HEADER, render_complete(&harvests));
    aggregation
        .plan
        .push(INCOMPLETE_HEADER, render_incomplete(&buckets));

    let index = link_date::build_index(
        catalogue.iter().map(|(doc, meta)| (doc, meta)),
        &config.index_path_prefixes,
    );
    aggregation
        .plan
        .push(TASK_INDEX_HEADER, link_date::render(&index));

    info!(
        current,
        selected = aggregation.selected.len(),
        unreadable = aggregation.unreadable.len(),
        groups = buckets.len(),
        months = index.len(),
        "aggregation planned"
    );
    Ok(aggregation)
}

/// Aggregate the context's store and rewrite the target sections in place.
///
/// # Errors
///
/// Returns [`Error::MissingCurrentDocument`] if the context has no current document; the
/// surface is left untouched in that case.
pub fn run(ctx: Context<'_>, config: &Config) -> Result<Aggregation> {
    let mut aggregation = aggregate(ctx.store, config, ctx.current.as_deref())?;
    aggregation.applied = aggregation.plan.apply(ctx.surface);
    Ok(aggregation)
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
