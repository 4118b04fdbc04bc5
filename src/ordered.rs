//! Insertion-ordered map and set.
//!
//! Both keep a key list alongside a lookup table, so iteration order is whatever the caller
//! inserted (or explicitly sorted) rather than a hashing accident.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Clone, Debug)]
/// Map that iterates in insertion order until explicitly reordered.
pub struct OrderedMap<K, V> {
    keys: Vec<K>,
    values: HashMap<K, V>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash, V> OrderedMap<K, V> {
    #[must_use]
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the value for `key`, inserting `V::default()` at the end if absent.
    pub fn entry_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.entry(key).or_default()
    }

    #[must_use]
    /// Value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    /// Keys in current order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Key/value pairs in current order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().filter_map(|k| self.values.get(k).map(|v| (k, v)))
    }

    /// Reorder keys with a comparator; values are untouched.
    pub fn sort_keys_by<F>(&mut self, compare: F)
    where
        F: FnMut(&K, &K) -> std::cmp::Ordering,
    {
        self.keys.sort_by(compare);
    }

    /// Replace the key order wholesale. Keys not already present are ignored.
    pub fn reorder(&mut self, order: Vec<K>) {
        self.keys = order
            .into_iter()
            .filter(|k| self.values.contains_key(k))
            .collect();
    }

    #[must_use]
    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Clone, Debug)]
/// Set that iterates in first-insertion order.
pub struct OrderedSet<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> OrderedSet<T> {
    /// Insert `item` unless already present. Returns whether it was new.
    pub fn insert(&mut self, item: T) -> bool {
        if self.seen.insert(item.clone()) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Items in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    #[must_use]
    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/ordered.rs"]
mod tests;
