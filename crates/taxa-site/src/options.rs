//! Settings for a category build.

use std::path::PathBuf;

/// Options controlling scanning, rendering and scratch-directory handling.
///
/// Defaults match a `taxa.toml` without a `[categories]` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptions {
    /// Generate the `index.md` overview of all categories.
    pub generate_index: bool,
    /// Log the rendered hierarchy.
    pub verbose: bool,
    /// Remove the generated section from site navigation.
    pub no_nav: bool,
    /// Name of the scratch directory and of the output URL prefix.
    pub base_name: String,
    /// Heading of the back-reference block appended to pages.
    pub section_title: String,
    /// Separator between path segments in a category entry.
    pub category_separator: char,
    /// Keep the scratch directory after the build.
    pub debug_fs: bool,
    /// Render back-references as the full category lineage.
    pub show_breadcrumbs: bool,
    /// Text placed between lineage links.
    pub breadcrumb_separator: String,
    /// Directory the scratch directory is created in.
    pub work_dir: PathBuf,
    /// Directory generated files are published to.
    pub site_dir: PathBuf,
}

impl Default for CategoryOptions {
    fn default() -> Self {
        Self {
            generate_index: true,
            verbose: false,
            no_nav: false,
            base_name: "categories".to_owned(),
            section_title: "Categories".to_owned(),
            category_separator: '|',
            debug_fs: false,
            show_breadcrumbs: false,
            breadcrumb_separator: ">".to_owned(),
            work_dir: PathBuf::from("."),
            site_dir: PathBuf::from("site"),
        }
    }
}

impl CategoryOptions {
    /// Scratch directory holding generated documents.
    #[must_use]
    pub fn scratch_dir(&self) -> PathBuf {
        self.work_dir.join(&self.base_name)
    }
}
