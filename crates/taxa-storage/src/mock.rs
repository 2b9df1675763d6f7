//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::storage::{Document, DocumentKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores documents and content in memory. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use taxa_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_page("guide.md", "---\ncategories: [Guides]\n---\n# User Guide\n");
///
/// let docs = storage.scan().unwrap();
/// let content = storage.read("guide.md").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: RwLock<Vec<Document>>,
    contents: RwLock<HashMap<String, String>>,
    unreadable: RwLock<Vec<String>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a markdown page with content.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, src_uri: impl Into<String>, content: impl Into<String>) -> Self {
        let src_uri: String = src_uri.into();
        self.documents
            .write()
            .unwrap()
            .push(Document::page(src_uri.clone(), mock_path(&src_uri)));
        self.contents
            .write()
            .unwrap()
            .insert(src_uri, content.into());
        self
    }

    /// Add a non-markdown asset.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_asset(self, src_uri: impl Into<String>) -> Self {
        let src_uri: String = src_uri.into();
        let path = mock_path(&src_uri);
        self.documents
            .write()
            .unwrap()
            .push(Document::asset(src_uri, path));
        self
    }

    /// Add a page that is listed by `scan()` but fails on `read()`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_unreadable_page(self, src_uri: impl Into<String>) -> Self {
        let src_uri: String = src_uri.into();
        self.documents
            .write()
            .unwrap()
            .push(Document::page(src_uri.clone(), mock_path(&src_uri)));
        self.unreadable.write().unwrap().push(src_uri);
        self
    }
}

/// Fake absolute path for a source URI.
fn mock_path(src_uri: &str) -> PathBuf {
    PathBuf::from("/mock").join(src_uri)
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        let mut documents = self.documents.read().unwrap().clone();
        documents.sort_by(|a, b| a.src_uri.cmp(&b.src_uri));
        Ok(documents)
    }

    fn read(&self, src_uri: &str) -> Result<String, StorageError> {
        if self.unreadable.read().unwrap().iter().any(|u| u == src_uri) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(src_uri)
                .with_backend(BACKEND));
        }
        let is_page = self
            .documents
            .read()
            .unwrap()
            .iter()
            .any(|d| d.src_uri == src_uri && d.kind == DocumentKind::Page);
        if !is_page {
            return Err(StorageError::not_found(src_uri).with_backend(BACKEND));
        }
        self.contents
            .read()
            .unwrap()
            .get(src_uri)
            .cloned()
            .ok_or_else(|| StorageError::not_found(src_uri).with_backend(BACKEND))
    }

    fn exists(&self, src_uri: &str) -> bool {
        self.documents
            .read()
            .unwrap()
            .iter()
            .any(|d| d.src_uri == src_uri)
    }
}
