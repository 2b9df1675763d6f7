//! Category graph store.
//!
//! Categories form a forest keyed by their full path. A node's key is its
//! segments joined with [`KEY_SEPARATOR`], so `["Animals", "Birds"]` lives
//! under `"Animals-Birds"` with `"Animals"` as its parent.
//!
//! # Architecture
//!
//! Nodes are stored in a flat `Vec<CategoryNode>` in creation order with a
//! `HashMap` from key to index. Parent and children relationships are kept
//! as keys on the nodes themselves:
//! - O(1) key lookups via the `index` map
//! - O(d) lineage building where d is the category depth
//! - deterministic iteration (insertion order) for rendering

use std::collections::HashMap;

use crate::slug::slugify;

/// Joiner between path segments in a category key.
pub const KEY_SEPARATOR: char = '-';

/// A page attached to a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRef {
    /// Page title (may be empty).
    pub title: String,
    /// Source URI of the page (e.g., "animals/sparrow.md").
    pub url: String,
}

/// A category in the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    /// Full path key (segments joined with [`KEY_SEPARATOR`]).
    pub key: String,
    /// Display name (last path segment).
    pub name: String,
    /// URL-safe identifier derived from `key`.
    pub slug: String,
    /// Key of the parent category, `None` for roots.
    pub parent: Option<String>,
    /// Keys of direct subcategories in insertion order, without duplicates.
    pub children: Vec<String>,
    /// Pages declared directly in this category, in registration order.
    pub pages: Vec<PageRef>,
}

impl CategoryNode {
    fn new(key: String, name: &str, parent: Option<String>) -> Self {
        Self {
            slug: slugify(&key),
            key,
            name: name.to_owned(),
            parent,
            children: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// File name of the category's generated document.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}

/// The set of all known categories.
#[derive(Debug, Default)]
pub struct CategoryGraph {
    nodes: Vec<CategoryNode>,
    index: HashMap<String, usize>,
}

impl CategoryGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure every prefix of `segments` exists as a node.
    ///
    /// Missing nodes are created with their parent link set and are added to
    /// the parent's children (once). Existing nodes are left untouched apart
    /// from the children link. Returns the node for the full path, or `None`
    /// if `segments` is empty.
    pub fn ensure_path<S: AsRef<str>>(&mut self, segments: &[S]) -> Option<&CategoryNode> {
        let idx = self.ensure_path_index(segments)?;
        Some(&self.nodes[idx])
    }

    pub(crate) fn ensure_path_index<S: AsRef<str>>(&mut self, segments: &[S]) -> Option<usize> {
        let mut key = String::new();
        let mut parent: Option<usize> = None;

        for segment in segments {
            let name = segment.as_ref();
            let parent_key = parent.map(|_| key.clone());
            if parent.is_some() {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(name);

            let existing = self.index.get(&key).copied();
            let idx = match existing {
                Some(idx) => idx,
                None => self.insert(CategoryNode::new(key.clone(), name, parent_key)),
            };

            if let Some(parent_idx) = parent {
                let children = &mut self.nodes[parent_idx].children;
                if !children.contains(&key) {
                    children.push(key.clone());
                }
            }
            parent = Some(idx);
        }

        parent
    }

    fn insert(&mut self, node: CategoryNode) -> usize {
        tracing::info!(
            "Defined new category \"{}\" with slug \"{}\"",
            node.name,
            node.slug
        );
        let idx = self.nodes.len();
        self.index.insert(node.key.clone(), idx);
        self.nodes.push(node);
        idx
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut CategoryNode {
        &mut self.nodes[idx]
    }

    /// Look up a category by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CategoryNode> {
        self.index.get(key).map(|&idx| &self.nodes[idx])
    }

    /// Check if a category with `key` exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Categories whose parent is `parent` (`None` selects the roots).
    ///
    /// Order is creation order; callers sort for presentation.
    #[must_use]
    pub fn children_of(&self, parent: Option<&str>) -> Vec<&CategoryNode> {
        self.nodes
            .iter()
            .filter(|node| node.parent.as_deref() == parent)
            .collect()
    }

    /// Ancestors of `key` from the root down to the node itself.
    ///
    /// Returns an empty list for unknown keys. Parent keys are always
    /// strictly shorter than their child's key, so the walk terminates.
    #[must_use]
    pub fn lineage(&self, key: &str) -> Vec<&CategoryNode> {
        let mut lineage = Vec::new();
        let mut current = self.get(key);
        while let Some(node) = current {
            lineage.push(node);
            current = node.parent.as_deref().and_then(|p| self.get(p));
        }
        lineage.reverse();
        lineage
    }

    /// All categories in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryNode> {
        self.nodes.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no category was defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every category.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(nodes: &[&'a CategoryNode]) -> Vec<&'a str> {
        nodes.iter().map(|n| n.key.as_str()).collect()
    }

    #[test]
    fn test_ensure_path_creates_prefixes() {
        let mut graph = CategoryGraph::new();

        let leaf = graph.ensure_path(&["Animals", "Birds", "Sparrows"]).unwrap();
        assert_eq!(leaf.key, "Animals-Birds-Sparrows");
        assert_eq!(leaf.name, "Sparrows");
        assert_eq!(leaf.parent.as_deref(), Some("Animals-Birds"));

        assert_eq!(graph.len(), 3);
        let root = graph.get("Animals").unwrap();
        assert_eq!(root.parent, None);
        assert_eq!(root.children, vec!["Animals-Birds"]);
        assert_eq!(
            graph.get("Animals-Birds").unwrap().children,
            vec!["Animals-Birds-Sparrows"]
        );
    }

    #[test]
    fn test_ensure_path_is_idempotent() {
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["Animals", "Birds"]);
        graph.ensure_path(&["Animals", "Birds"]);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.get("Animals").unwrap().children, vec!["Animals-Birds"]);
    }

    #[test]
    fn test_ensure_path_sets_slug() {
        let mut graph = CategoryGraph::new();
        let node = graph.ensure_path(&["Café Culture"]).unwrap();
        assert_eq!(node.slug, "cafe-culture");
        assert_eq!(node.file_name(), "cafe-culture.md");

        // Nested slugs include the whole path.
        let node = graph.ensure_path(&["Animals", "Birds"]).unwrap();
        assert_eq!(node.slug, "animals-birds");
    }

    #[test]
    fn test_ensure_path_empty_segments() {
        let mut graph = CategoryGraph::new();
        let segments: [&str; 0] = [];

        assert!(graph.ensure_path(&segments).is_none());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_children_dedup_preserves_insertion_order() {
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["Animals", "Mammals"]);
        graph.ensure_path(&["Animals", "Birds"]);
        graph.ensure_path(&["Animals", "Mammals"]);

        assert_eq!(
            graph.get("Animals").unwrap().children,
            vec!["Animals-Mammals", "Animals-Birds"]
        );
    }

    #[test]
    fn test_children_of_roots_and_nested() {
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["Animals", "Birds"]);
        graph.ensure_path(&["Plants"]);

        assert_eq!(keys(&graph.children_of(None)), vec!["Animals", "Plants"]);
        assert_eq!(
            keys(&graph.children_of(Some("Animals"))),
            vec!["Animals-Birds"]
        );
        assert!(graph.children_of(Some("Plants")).is_empty());
        assert!(graph.children_of(Some("Unknown")).is_empty());
    }

    #[test]
    fn test_every_parent_exists() {
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["A", "B", "C", "D"]);
        graph.ensure_path(&["A", "X"]);
        graph.ensure_path(&["Q", "R"]);

        for node in graph.iter() {
            if let Some(parent) = &node.parent {
                let parent = graph.get(parent).unwrap();
                assert!(parent.children.contains(&node.key));
            }
            for child in &node.children {
                assert_eq!(
                    graph.get(child).unwrap().parent.as_deref(),
                    Some(node.key.as_str())
                );
            }
        }
    }

    #[test]
    fn test_lineage_root_to_leaf() {
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["Animals", "Birds", "Sparrows"]);

        assert_eq!(
            keys(&graph.lineage("Animals-Birds-Sparrows")),
            vec!["Animals", "Animals-Birds", "Animals-Birds-Sparrows"]
        );
        assert_eq!(keys(&graph.lineage("Animals")), vec!["Animals"]);
        assert!(graph.lineage("Missing").is_empty());
    }

    #[test]
    fn test_key_collision_reuses_node() {
        // A single segment containing the joiner maps to the same key as
        // the two-segment path; the first definition wins.
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["A-B"]);
        graph.ensure_path(&["A", "B"]);

        assert_eq!(graph.len(), 2);
        let node = graph.get("A-B").unwrap();
        assert_eq!(node.name, "A-B");
        assert_eq!(node.parent, None);
        assert_eq!(graph.get("A").unwrap().children, vec!["A-B"]);
        assert_eq!(keys(&graph.lineage("A-B")), vec!["A-B"]);
    }

    #[test]
    fn test_segments_are_verbatim() {
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["Animals", " Birds"]);

        let node = graph.get("Animals- Birds").unwrap();
        assert_eq!(node.name, " Birds");
        assert_eq!(node.slug, "animals-birds");
    }

    #[test]
    fn test_clear() {
        let mut graph = CategoryGraph::new();
        graph.ensure_path(&["Animals"]);
        graph.clear();

        assert!(graph.is_empty());
        assert!(!graph.contains("Animals"));
    }
}
