//! Category declarations from page front matter.
//!
//! Each documentation page may list the categories it belongs to:
//!
//! ```text
//! ---
//! title: Sparrow
//! categories:
//!   - Animals|Birds
//!   - Garden
//! ---
//! ```
//!
//! Every entry is split on the configured separator into a category path
//! and the page is registered under the leaf of that path.

use serde_yaml::Value;
use taxa_storage::{Files, Storage, markdown_title, split_front_matter};

use crate::error::BuildError;
use crate::store::CategoryStore;

/// Front matter key holding the category list.
const CATEGORIES_KEY: &str = "categories";

/// Counters collected while scanning pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Documentation pages inspected.
    pub pages: usize,
    /// Pages registered under at least one category.
    pub categorized: usize,
    /// Pages whose `categories` value was not a list.
    pub malformed: usize,
}

/// Register every documentation page in `files` under its declared
/// categories.
///
/// Pages without front matter or without a `categories` key are skipped.
/// A `categories` value that is not a list is reported and the page is
/// skipped. Scalar entries (numbers, booleans) are converted to text;
/// nested lists and mappings are skipped with a warning.
///
/// # Errors
///
/// Returns [`BuildError::Storage`] if a page cannot be read.
pub fn define_categories(
    storage: &dyn Storage,
    files: &Files,
    separator: char,
    store: &mut CategoryStore,
) -> Result<ScanReport, BuildError> {
    let mut report = ScanReport::default();

    for doc in files.documentation_pages() {
        report.pages += 1;
        let raw = storage.read(&doc.src_uri)?;
        let (body, meta) = split_front_matter(&raw);

        let Some(declared) = meta.get(CATEGORIES_KEY) else {
            continue;
        };
        let Value::Sequence(entries) = declared else {
            tracing::error!(
                "The categories object at {} was not a list, but {}",
                doc.src_uri,
                yaml_kind(declared)
            );
            report.malformed += 1;
            continue;
        };

        let title = meta
            .get_str("title")
            .map(ToOwned::to_owned)
            .or_else(|| markdown_title(body))
            .unwrap_or_default();

        let mut registered = false;
        for entry in entries {
            let Some(text) = entry_text(entry) else {
                tracing::warn!(
                    "Skipping {} category entry in {}",
                    yaml_kind(entry),
                    doc.src_uri
                );
                continue;
            };
            let segments: Vec<&str> = text.split(separator).collect();
            registered |= store
                .register_page(&segments, &doc.src_uri, &title)
                .is_some();
        }
        if registered {
            report.categorized += 1;
        }
    }

    Ok(report)
}

/// Text of a scalar category entry.
fn entry_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "True" } else { "False" }.to_owned()),
        _ => None,
    }
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
