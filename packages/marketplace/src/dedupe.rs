//! First-seen deduplication over extraction results.

use std::collections::HashSet;
use std::hash::Hash;

/// Collapse `items` to the first-seen item per identity, preserving
/// original order. Items whose key function returns `None` are dropped.
///
/// Idempotent: running it over its own output is a no-op.
pub fn dedupe_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| match key(item) {
            Some(k) => seen.insert(k),
            None => false,
        })
        .collect()
}
