//! Markdown generation for category pages.
//!
//! Produces three kinds of output from a [`CategoryGraph`]:
//! - one document per category (name, parent, subcategories, pages)
//! - the index document listing the whole hierarchy with page counts
//! - the back-reference block appended to every categorized page
//!
//! All listings are in natural order so output is stable across runs.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::graph::{CategoryGraph, CategoryNode};
use crate::natural;
use crate::options::CategoryOptions;
use crate::url::relative_url;

/// Deepest hierarchy level rendered in the index.
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// Indentation per hierarchy level.
const INDENT: &str = "    ";

/// Renders category documents for one build.
pub struct Renderer<'a> {
    graph: &'a CategoryGraph,
    options: &'a CategoryOptions,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(graph: &'a CategoryGraph, options: &'a CategoryOptions) -> Self {
        Self { graph, options }
    }

    /// Indented bullet lines for the whole hierarchy.
    ///
    /// Each line is `- [name](./slug.md) (count)` where `count` is the number
    /// of pages declared directly in that category.
    #[must_use]
    pub fn hierarchy(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.hierarchy_level(None, 0, &mut lines);
        lines
    }

    fn hierarchy_level(&self, parent: Option<&str>, depth: usize, lines: &mut Vec<String>) {
        let mut nodes = self.graph.children_of(parent);
        if nodes.is_empty() {
            return;
        }
        if depth >= MAX_HIERARCHY_DEPTH {
            tracing::warn!(
                "Category hierarchy deeper than {MAX_HIERARCHY_DEPTH} levels, not rendering below {}",
                parent.unwrap_or_default()
            );
            return;
        }

        natural::sort_by_key(&mut nodes, |n| n.name.as_str());
        for node in nodes {
            lines.push(format!(
                "{}- [{}](./{}) ({})",
                INDENT.repeat(depth),
                node.name,
                node.file_name(),
                node.pages.len()
            ));
            self.hierarchy_level(Some(&node.key), depth + 1, lines);
        }
    }

    /// The index document listing every category.
    #[must_use]
    pub fn index_document(&self) -> String {
        let joined = self.hierarchy().join("\n");
        if self.options.verbose {
            tracing::info!("Generated category hierarchy:\n{joined}");
        }
        format!(
            "# All Categories\n\n\nThere are a total of {} categories(s):\n\n{joined}\n",
            self.graph.len()
        )
    }

    /// The document for a single category.
    #[must_use]
    pub fn category_document(&self, node: &CategoryNode) -> String {
        let mut doc = String::new();
        let _ = write!(doc, "# Category: {}\n\n", node.name);

        if let Some(parent) = node.parent.as_deref().and_then(|key| self.graph.get(key)) {
            let _ = write!(
                doc,
                "Parent category: [{}](./{})\n\n",
                parent.name,
                parent.file_name()
            );
        }

        let mut children: Vec<&CategoryNode> = node
            .children
            .iter()
            .filter_map(|key| self.graph.get(key))
            .collect();
        if !children.is_empty() {
            natural::sort_by_key(&mut children, |c| c.key.as_str());
            let lines: Vec<String> = children
                .iter()
                .map(|c| format!("- [{}](./{})", c.name, c.file_name()))
                .collect();
            let _ = write!(doc, "## Subcategories\n\n{}\n\n", lines.join("\n"));
        }

        let _ = write!(doc, "## Pages in category \"{}\"\n\n", node.name);
        if node.pages.is_empty() {
            doc.push_str("This category has no pages.");
        } else {
            let mut pages: Vec<_> = node.pages.iter().collect();
            natural::sort_by_key(&mut pages, |p| p.title.as_str());
            let lines: Vec<String> = pages
                .iter()
                .map(|p| format!("- [{}](../{})", p.title, p.url))
                .collect();
            doc.push_str(&lines.join("\n"));
        }
        doc.push_str("\n\n");

        if self.options.generate_index {
            doc.push_str("[All Categories](./index.md)\n\n");
        }
        doc
    }

    /// Append the back-reference block for `src_uri` to `markdown`.
    ///
    /// `keys` are the categories the page belongs to; unknown keys are
    /// ignored. Links are relative to the page's location.
    #[must_use]
    pub fn backlinks(&self, markdown: &str, src_uri: &str, keys: &BTreeSet<String>) -> String {
        let base = relative_url(&self.options.base_name, src_uri);

        let mut owners: Vec<&CategoryNode> =
            keys.iter().filter_map(|key| self.graph.get(key)).collect();
        natural::sort_by_key(&mut owners, |n| n.key.as_str());

        let lines: Vec<String> = owners
            .iter()
            .map(|node| {
                if self.options.show_breadcrumbs {
                    let separator = format!(" {} ", self.options.breadcrumb_separator);
                    let trail: Vec<String> = self
                        .graph
                        .lineage(&node.key)
                        .iter()
                        .map(|n| Self::link(n, &base))
                        .collect();
                    format!("- {}", trail.join(&separator))
                } else {
                    format!("- {}", Self::link(node, &base))
                }
            })
            .collect();

        format!(
            "{markdown}\n## {}\n\n{}",
            self.options.section_title,
            lines.join("\n")
        )
    }

    fn link(node: &CategoryNode, base: &str) -> String {
        format!("[{}]({base}/{})", node.name, node.file_name())
    }
}
