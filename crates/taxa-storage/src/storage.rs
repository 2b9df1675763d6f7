//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for abstracting document scanning and retrieval,
//! along with [`StorageError`] for unified error handling across backends.
//!
//! # Source URI Convention
//!
//! Documents are identified by their **source URI**: the `/`-separated path of
//! the source file relative to the documentation root, extension included:
//! - `"index.md"` - home page
//! - `"guide.md"` - standalone page
//! - `"animals/birds.md"` - nested page
//! - `"img/logo.png"` - asset
//!
//! The source URI is the stable page identifier used by the category engine.

use std::path::PathBuf;

/// What role a scanned file plays in the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    /// Markdown documentation page.
    Page,
    /// Any other file copied to the site as-is.
    Asset,
}

/// A file discovered by a storage scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Source URI (e.g., "guide.md", "animals/birds.md").
    pub src_uri: String,
    /// Absolute path of the source file, for backends that have one.
    pub abs_src_path: PathBuf,
    /// Page or asset.
    pub kind: DocumentKind,
}

impl Document {
    /// Create a markdown page entry.
    #[must_use]
    pub fn page(src_uri: impl Into<String>, abs_src_path: impl Into<PathBuf>) -> Self {
        Self {
            src_uri: src_uri.into(),
            abs_src_path: abs_src_path.into(),
            kind: DocumentKind::Page,
        }
    }

    /// Create an asset entry.
    #[must_use]
    pub fn asset(src_uri: impl Into<String>, abs_src_path: impl Into<PathBuf>) -> Self {
        Self {
            src_uri: src_uri.into(),
            abs_src_path: abs_src_path.into(),
            kind: DocumentKind::Asset,
        }
    }

    /// Whether this entry is a markdown documentation page.
    #[must_use]
    pub fn is_documentation_page(&self) -> bool {
        self.kind == DocumentKind::Page
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for document scanning and retrieval.
///
/// All `src_uri` parameters are source URIs as returned in [`Document::src_uri`].
pub trait Storage: Send + Sync {
    /// Scan and return all documents, sorted by source URI.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if scanning fails (e.g., permission denied).
    fn scan(&self) -> Result<Vec<Document>, StorageError>;

    /// Read the raw text of a document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the document doesn't exist or can't be read.
    fn read(&self, src_uri: &str) -> Result<String, StorageError>;

    /// Check if a document exists at the given source URI.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, src_uri: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_document_page() {
        let doc = Document::page("animals/birds.md", "/docs/animals/birds.md");

        assert_eq!(doc.src_uri, "animals/birds.md");
        assert_eq!(doc.abs_src_path, PathBuf::from("/docs/animals/birds.md"));
        assert!(doc.is_documentation_page());
    }

    #[test]
    fn test_document_asset() {
        let doc = Document::asset("img/logo.png", "/docs/img/logo.png");

        assert_eq!(doc.kind, DocumentKind::Asset);
        assert!(!doc.is_documentation_page());
    }

    #[test]
    fn test_storage_error_new() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert!(err.path.as_deref().is_none());
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_storage_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::new(StorageErrorKind::NotFound).with_source(io_err);

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "file not found");
    }

    #[test]
    fn test_storage_error_not_found() {
        let err = StorageError::not_found("guide.md");

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(Path::new("guide.md")));
    }

    #[test]
    fn test_storage_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = StorageError::io(io_err, None);

        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
    }

    #[test]
    fn test_storage_error_io_other() {
        let io_err = std::io::Error::other("disk on fire");
        let err = StorageError::io(io_err, Some(PathBuf::from("guide.md")));

        assert_eq!(err.kind, StorageErrorKind::Other);
        assert_eq!(err.path.as_deref(), Some(Path::new("guide.md")));
    }

    #[test]
    fn test_storage_error_display_simple() {
        let err = StorageError::new(StorageErrorKind::InvalidPath);

        assert_eq!(err.to_string(), "Invalid path");
    }

    #[test]
    fn test_storage_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::new(StorageErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/foo/bar")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (path: /foo/bar)"
        );
    }

    #[test]
    fn test_storage_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorageError>();
    }
}
