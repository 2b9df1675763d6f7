//! Filesystem storage implementation for Taxa.
//!
//! This crate provides [`FsStorage`], a filesystem-based implementation of the
//! [`Storage`](taxa_storage::Storage) trait. It handles:
//!
//! - Recursive directory scanning for pages and assets
//! - Reading page source with path traversal protection
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use taxa_storage::Storage;
//! use taxa_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for doc in storage.scan()? {
//!     println!("{}", doc.src_uri);
//! }
//! ```

mod scanner;
mod source;

use std::fs;
use std::path::{Component, Path, PathBuf};

use scanner::Scanner;
use taxa_storage::{Document, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Scans a source directory recursively. Markdown files are documentation
/// pages; every other non-hidden file is an asset.
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
    /// Scanner for document discovery.
    scanner: Scanner,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self {
            scanner: Scanner::new(source_dir.clone()),
            source_dir,
        }
    }

    /// Root directory of this storage.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Validate that a source URI doesn't escape the source directory.
    ///
    /// Rejects URIs containing parent directory components (`..`) or
    /// absolute paths.
    fn validate_uri(src_uri: &str) -> Result<(), StorageError> {
        let escapes = Path::new(src_uri)
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(src_uri)
                .with_backend(BACKEND));
        }
        Ok(())
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        let documents = self.scanner.scan();
        tracing::debug!(
            count = documents.len(),
            "Scanned {}",
            self.source_dir.display()
        );
        Ok(documents)
    }

    fn read(&self, src_uri: &str) -> Result<String, StorageError> {
        Self::validate_uri(src_uri)?;
        let full_path = self.source_dir.join(src_uri);
        fs::read_to_string(&full_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(src_uri))).with_backend(BACKEND))
    }

    fn exists(&self, src_uri: &str) -> bool {
        Self::validate_uri(src_uri).is_ok() && self.source_dir.join(src_uri).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_storage() -> (tempfile::TempDir, FsStorage) {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        (temp_dir, storage)
    }

    #[test]
    fn test_read_page() {
        let (temp_dir, storage) = create_storage();
        fs::create_dir(temp_dir.path().join("animals")).unwrap();
        fs::write(temp_dir.path().join("animals/birds.md"), "# Birds").unwrap();

        assert_eq!(storage.read("animals/birds.md").unwrap(), "# Birds");
        assert!(storage.exists("animals/birds.md"));
    }

    #[test]
    fn test_read_missing() {
        let (_temp_dir, storage) = create_storage();

        let err = storage.read("missing.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.backend, Some("Fs"));
        assert!(!storage.exists("missing.md"));
    }

    #[test]
    fn test_read_rejects_traversal() {
        let (_temp_dir, storage) = create_storage();

        let err = storage.read("../etc/passwd").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
        assert!(!storage.exists("../etc/passwd"));
    }

    #[test]
    fn test_read_rejects_absolute() {
        let (_temp_dir, storage) = create_storage();

        let err = storage.read("/etc/passwd").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_scan_returns_sorted_documents() {
        let (temp_dir, storage) = create_storage();
        fs::write(temp_dir.path().join("b.md"), "# B").unwrap();
        fs::write(temp_dir.path().join("a.md"), "# A").unwrap();

        let uris: Vec<_> = storage
            .scan()
            .unwrap()
            .into_iter()
            .map(|d| d.src_uri)
            .collect();

        assert_eq!(uris, vec!["a.md", "b.md"]);
    }
}
