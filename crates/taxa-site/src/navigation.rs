//! Site navigation tree.
//!
//! A minimal model of the host's navigation: pages are leaves with a URL,
//! directories become sections titled from the directory name. The
//! category build only ever removes its own section from this tree.

use serde::Serialize;
use taxa_storage::{Files, OutputFile, directory_url};

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Site URL for pages, `None` for sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// A page entry.
    #[must_use]
    pub fn page(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: Some(url.into()),
            children: Vec::new(),
        }
    }

    /// A section entry.
    #[must_use]
    pub fn section(title: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            url: None,
            children,
        }
    }

    /// Check if this item groups other items.
    #[must_use]
    pub fn is_section(&self) -> bool {
        self.url.is_none() || !self.children.is_empty()
    }
}

/// Top-level navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Navigation items in display order.
    pub items: Vec<NavItem>,
}

impl Navigation {
    /// Build navigation from documentation pages and generated files.
    ///
    /// Items appear in the order of `files`: scanned pages first, then
    /// generated files. Each directory becomes a section at the position of
    /// its first entry.
    #[must_use]
    pub fn from_files(files: &Files) -> Self {
        let uris = files
            .documentation_pages()
            .map(|doc| doc.src_uri.clone())
            .chain(files.generated().iter().map(OutputFile::src_uri));

        let mut items = Vec::new();
        for uri in uris {
            insert(&mut items, &uri, &uri);
        }
        Self { items }
    }

    /// Remove the first top-level section titled `name` (case-insensitive).
    ///
    /// Returns the removed section, if any. Pages with a matching title are
    /// left alone.
    pub fn remove_section(&mut self, name: &str) -> Option<NavItem> {
        let name = name.to_lowercase();
        let pos = self
            .items
            .iter()
            .position(|item| item.is_section() && item.title.to_lowercase() == name)?;
        Some(self.items.remove(pos))
    }
}

fn insert(items: &mut Vec<NavItem>, rest: &str, uri: &str) {
    if let Some((dir, tail)) = rest.split_once('/') {
        let title = title_from_name(dir);
        let pos = match items
            .iter()
            .position(|item| item.url.is_none() && item.title == title)
        {
            Some(pos) => pos,
            None => {
                items.push(NavItem::section(title, Vec::new()));
                items.len() - 1
            }
        };
        insert(&mut items[pos].children, tail, uri);
        return;
    }

    let stem = rest.rsplit_once('.').map_or(rest, |(stem, _)| stem);
    let title = if stem == "index" {
        if uri == rest { "Home".to_owned() } else { "Overview".to_owned() }
    } else {
        title_from_name(stem)
    };
    items.push(NavItem::page(title, directory_url(uri)));
}

/// Title-case a file or directory name (`getting-started` -> `Getting Started`).
fn title_from_name(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
