//! Build-scoped category state.

use crate::graph::{CategoryGraph, CategoryNode, PageRef};
use crate::page_index::PageIndex;

/// The category graph together with its page index.
///
/// Owned by one build; [`clear`](Self::clear) resets it between builds.
#[derive(Debug, Default)]
pub struct CategoryStore {
    graph: CategoryGraph,
    pages: PageIndex,
}

impl CategoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a page to the category at `segments`.
    ///
    /// Creates any missing categories along the path, appends the page to
    /// the leaf category (duplicates are kept) and records the leaf key in
    /// the page index. Returns the leaf category, or `None` when `segments`
    /// is empty.
    pub fn register_page<S: AsRef<str>>(
        &mut self,
        segments: &[S],
        page: &str,
        title: &str,
    ) -> Option<&CategoryNode> {
        let idx = self.graph.ensure_path_index(segments)?;
        let node = self.graph.node_mut(idx);
        node.pages.push(PageRef {
            title: title.to_owned(),
            url: page.to_owned(),
        });
        self.pages.insert(page, &node.key);
        Some(node)
    }

    /// The category graph.
    #[must_use]
    pub fn graph(&self) -> &CategoryGraph {
        &self.graph
    }

    /// The page to category index.
    #[must_use]
    pub fn pages(&self) -> &PageIndex {
        &self.pages
    }

    /// Forget every category and page.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.pages.clear();
    }
}
