//! Storage abstraction and host file model for Taxa.
//!
//! This crate provides the contracts the category engine consumes from its
//! host build pipeline:
//!
//! - [`Storage`] trait with `scan()`, `read()`, and `exists()` methods
//! - [`Document`] entries discovered by a scan, and the [`Files`] collection
//!   generated [`OutputFile`]s are appended to
//! - Front matter and title utilities ([`split_front_matter`], [`markdown_title`])
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! Backends live in their own crates (see `taxa-storage-fs`).
//!
//! # Example
//!
//! ```ignore
//! use taxa_storage::{Files, Storage};
//!
//! let files = Files::new(storage.scan()?);
//! for doc in files.documentation_pages() {
//!     let raw = storage.read(&doc.src_uri)?;
//!     let (body, meta) = taxa_storage::split_front_matter(&raw);
//! }
//! ```

mod files;
mod metadata;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use files::{Files, OutputFile, directory_url};
pub use metadata::{Metadata, markdown_title, split_front_matter};
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Document, DocumentKind, Storage, StorageError, StorageErrorKind};
