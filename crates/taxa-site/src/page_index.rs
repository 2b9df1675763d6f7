//! Reverse mapping from pages to the categories that list them.

use std::collections::{BTreeSet, HashMap};

/// Maps a page's source URI to the keys of every category it was
/// registered under.
///
/// Keys are kept in a set, so registering a page twice under the same
/// category records it once here even though the category lists it twice.
#[derive(Debug, Default)]
pub struct PageIndex {
    entries: HashMap<String, BTreeSet<String>>,
}

impl PageIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `page` belongs to category `key`.
    pub fn insert(&mut self, page: &str, key: &str) {
        self.entries
            .entry(page.to_owned())
            .or_default()
            .insert(key.to_owned());
    }

    /// Category keys recorded for `page`.
    #[must_use]
    pub fn categories_of(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(page)
    }

    /// Check if `page` belongs to at least one category.
    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.entries.contains_key(page)
    }

    /// Number of categorized pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no page has been categorized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
