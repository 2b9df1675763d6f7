//! Document discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use taxa_storage::Document;

use crate::source::classify;

/// Discovers documents by walking the filesystem.
///
/// Hidden files and directories (leading `.`) are skipped. Every other
/// regular file becomes a [`Document`]; no content is read at this stage.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a new Scanner rooted at `source_dir`.
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the filesystem and return documents sorted by source URI.
    ///
    /// Returns an empty Vec if the source directory doesn't exist.
    pub fn scan(&self) -> Vec<Document> {
        let mut documents = Vec::new();
        if self.source_dir.exists() {
            self.scan_directory(&self.source_dir, &mut documents);
        }
        documents.sort_by(|a, b| a.src_uri.cmp(&b.src_uri));
        documents
    }

    /// Scan a directory and collect documents, recursing into subdirectories.
    fn scan_directory(&self, dir_path: &Path, documents: &mut Vec<Document>) {
        let Ok(entries) = fs::read_dir(dir_path) else {
            tracing::warn!("Cannot read directory {}", dir_path.display());
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            let file_name = entry.file_name();
            if file_name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                self.scan_directory(&path, documents);
            } else if file_type.is_file()
                && let Some(doc) = classify(path, &file_name, &self.source_dir)
            {
                documents.push(doc);
            }
        }
    }
}
