//! Group keys derived from document tags, and their presentation order.

use std::collections::BTreeSet;
use std::fmt;

const DEFAULT_KEY: &str = "default";
const PRIORITY_MARKER: &str = "priority";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Bucket identity for a document's open tasks.
pub struct GroupKey(String);

impl GroupKey {
    #[must_use]
    /// The sentinel key for documents with no grouping tags.
    pub fn default_key() -> Self {
        Self(DEFAULT_KEY.to_string())
    }

    #[must_use]
    /// Key for a tag set after dropping `excluded` tags: the remaining tags sorted and
    /// joined with `", "`, or `default` if none remain.
    pub fn for_tags<'a, I>(tags: I, excluded: &[String]) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let kept: BTreeSet<&str> = tags
            .into_iter()
            .filter(|tag| !excluded.contains(tag))
            .map(String::as_str)
            .collect();
        if kept.is_empty() {
            Self::default_key()
        } else {
            Self(kept.into_iter().collect::<Vec<_>>().join(", "))
        }
    }

    #[must_use]
    /// Whether this is the `default` sentinel.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_KEY
    }

    #[must_use]
    /// Whether this key carries the priority marker.
    pub fn is_priority(&self) -> bool {
        self.0.contains(PRIORITY_MARKER)
    }

    #[must_use]
    /// Key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[must_use]
/// Presentation order for group keys.
///
/// Keys sort ascending with `default` last, then every priority key is moved to the front,
/// keeping the relative order they had.
pub fn sort_keys<'a, I>(keys: I) -> Vec<GroupKey>
where
    I: IntoIterator<Item = &'a GroupKey>,
{
    let mut sorted: Vec<GroupKey> = keys.into_iter().cloned().collect();
    sorted.sort_by(|a, b| a.is_default().cmp(&b.is_default()).then_with(|| a.cmp(b)));
    let (mut ordered, rest): (Vec<_>, Vec<_>) =
        sorted.into_iter().partition(GroupKey::is_priority);
    ordered.extend(rest);
    ordered
}

#[cfg(test)]
#[path = "tests/grouping.rs"]
mod tests;
