//! Category taxonomy for Taxa documentation sites.
//!
//! This crate provides:
//! - [`CategoryBuild`]: the build lifecycle the host drives through hooks
//! - [`CategoryGraph`] and [`PageIndex`]: the category hierarchy and the
//!   reverse page to category mapping, owned together by a [`CategoryStore`]
//! - [`Renderer`]: category documents, the index and page back-references
//! - [`Navigation`]: the navigation tree the generated section can be
//!   removed from
//! - Utilities: [`slugify`], [`relative_url`] and natural ordering
//!   ([`natural`])
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use taxa_site::{CategoryBuild, CategoryOptions};
//! use taxa_storage::{Files, Storage};
//! use taxa_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! let mut files = Files::new(storage.scan()?);
//!
//! let mut build = CategoryBuild::new(CategoryOptions::default());
//! build.initialize()?;
//! build.generate(&storage, &mut files)?;
//! let markdown = build.render_page("# Sparrow\n", "animals/sparrow.md")?;
//! build.finish()?;
//! # Ok(())
//! # }
//! ```

mod error;
mod graph;
mod lifecycle;
pub mod natural;
mod navigation;
mod options;
mod page_index;
mod renderer;
mod scanner;
mod slug;
mod store;
mod url;

pub use error::BuildError;
pub use graph::{CategoryGraph, CategoryNode, KEY_SEPARATOR, PageRef};
pub use lifecycle::{BuildPhase, CategoryBuild};
pub use navigation::{NavItem, Navigation};
pub use options::CategoryOptions;
pub use page_index::PageIndex;
pub use renderer::{MAX_HIERARCHY_DEPTH, Renderer};
pub use scanner::{ScanReport, define_categories};
pub use slug::slugify;
pub use store::CategoryStore;
pub use url::relative_url;
