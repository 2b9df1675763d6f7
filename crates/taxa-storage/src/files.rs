//! The host's file collection.
//!
//! [`Files`] holds the documents found by a storage scan plus every
//! [`OutputFile`] generated during the build. Generated files are staged in a
//! source directory of their own and published next to normal content.

use std::path::{Path, PathBuf};

use crate::storage::Document;

/// Descriptor of a file generated during the build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    /// Output path relative to `src_dir` (e.g., "categories/birds.md").
    pub path: PathBuf,
    /// Directory the generated file was written under.
    pub src_dir: PathBuf,
    /// Site directory the file is published to.
    pub dest_dir: PathBuf,
    /// Publish `foo.md` as `foo/` rather than `foo.md`.
    pub use_directory_urls: bool,
}

impl OutputFile {
    /// Location of the generated source file.
    #[must_use]
    pub fn abs_src_path(&self) -> PathBuf {
        self.src_dir.join(&self.path)
    }

    /// Location the file is published to (same layout as the source).
    #[must_use]
    pub fn dest_path(&self) -> PathBuf {
        self.dest_dir.join(&self.path)
    }

    /// The path as a `/`-separated source URI.
    #[must_use]
    pub fn src_uri(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    /// Site URL of the file.
    ///
    /// With directory URLs `a/b.md` becomes `a/b/` and `a/index.md` becomes `a/`.
    #[must_use]
    pub fn url(&self) -> String {
        let uri = self.src_uri();
        if self.use_directory_urls {
            directory_url(&uri)
        } else {
            uri
        }
    }
}

/// Directory-style URL of a source URI.
///
/// `a/b.md` becomes `a/b/`, `a/index.md` becomes `a/` and `index.md` becomes
/// the empty string. The `.md` extension matches case-insensitively, like the
/// page classification of storage backends. Other URIs are returned unchanged.
#[must_use]
pub fn directory_url(src_uri: &str) -> String {
    let Some(stem) = strip_markdown_extension(src_uri) else {
        return src_uri.to_owned();
    };
    if stem == "index" {
        String::new()
    } else if let Some(dir) = stem.strip_suffix("/index") {
        format!("{dir}/")
    } else {
        format!("{stem}/")
    }
}

fn strip_markdown_extension(uri: &str) -> Option<&str> {
    let split = uri.len().checked_sub(3)?;
    let (stem, ext) = (uri.get(..split)?, uri.get(split..)?);
    ext.eq_ignore_ascii_case(".md").then_some(stem)
}

/// Scanned documents plus generated output files.
#[derive(Debug, Default)]
pub struct Files {
    documents: Vec<Document>,
    generated: Vec<OutputFile>,
}

impl Files {
    /// Create a collection from scanned documents.
    #[must_use]
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            generated: Vec::new(),
        }
    }

    /// All scanned documents (pages and assets).
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Scanned markdown documentation pages.
    pub fn documentation_pages(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|d| d.is_documentation_page())
    }

    /// Files generated during the build, in insertion order.
    #[must_use]
    pub fn generated(&self) -> &[OutputFile] {
        &self.generated
    }

    /// Append a generated file.
    pub fn push(&mut self, file: OutputFile) {
        self.generated.push(file);
    }

    /// Find a generated file by its output path.
    #[must_use]
    pub fn find_generated(&self, path: &Path) -> Option<&OutputFile> {
        self.generated.iter().find(|f| f.path == path)
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len() + self.generated.len()
    }

    /// True if there are no documents and nothing was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
