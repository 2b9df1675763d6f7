//! Front matter and title extraction for markdown pages.
//!
//! Pages may start with a YAML block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Sparrow
//! categories:
//!   - Animals|Birds
//! ---
//! # Sparrow
//! ```
//!
//! [`split_front_matter`] separates that block from the body. Anything that
//! isn't a well-formed YAML mapping is treated as "no metadata" and left in
//! the body untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A-{3}[ \t]*\r?\n(.*?\r?\n)(?:\.{3}|-{3})[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Page metadata parsed from a front matter block.
///
/// Values are kept as raw YAML so callers can distinguish a list from a
/// scalar and report declarations of the wrong shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    values: Mapping,
}

impl Metadata {
    /// Wrap an already-parsed mapping.
    #[must_use]
    pub fn from_mapping(values: Mapping) -> Self {
        Self { values }
    }

    /// Raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value for `key` if it is a YAML string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Whether `key` is present (even if null).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no metadata was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split raw page text into `(body, metadata)`.
///
/// When the page has no front matter block, or the block is not a YAML
/// mapping, returns the full input as body and empty metadata. Blank lines
/// directly after the block are dropped from the body.
#[must_use]
pub fn split_front_matter(raw: &str) -> (&str, Metadata) {
    let Some(caps) = FRONT_MATTER_RE.captures(raw) else {
        return (raw, Metadata::default());
    };

    match serde_yaml::from_str::<Value>(&caps[1]) {
        Ok(Value::Mapping(values)) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            let body = raw[end..].trim_start_matches('\n');
            (body, Metadata::from_mapping(values))
        }
        Ok(_) => (raw, Metadata::default()),
        Err(e) => {
            tracing::debug!("ignoring invalid front matter: {e}");
            (raw, Metadata::default())
        }
    }
}

/// Extract the page title from a leading level-1 heading.
///
/// Only the first non-blank line is considered; it must be an ATX heading
/// (`# Title`). Returns `None` otherwise.
#[must_use]
pub fn markdown_title(body: &str) -> Option<String> {
    let line = body.lines().map(str::trim).find(|l| !l.is_empty())?;
    if !line.starts_with("# ") {
        return None;
    }
    let title = line.trim_start_matches(['#', ' ']);
    (!title.is_empty()).then(|| title.to_owned())
}
