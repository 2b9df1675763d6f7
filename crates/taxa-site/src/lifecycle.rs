//! Category build lifecycle.
//!
//! A [`CategoryBuild`] is driven by the host through a fixed sequence of
//! hooks:
//!
//! ```text
//! Idle ──initialize──▶ Initialized ──generate──▶ Rendering ──finish──▶ Finalized
//!                                      (Scanning)     │
//!                                                 render_page (per page)
//! ```
//!
//! `abort` moves any in-progress build straight to `Finalized`. Reaching
//! `Finalized` is the only point where state is discarded: the category
//! store is cleared and the scratch directory removed (unless `debug_fs` is
//! set). A build dropped before reaching it cleans up on drop; residue left
//! by a killed process is removed by the next `initialize`.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use taxa_storage::{Files, OutputFile, Storage};

use crate::error::BuildError;
use crate::navigation::Navigation;
use crate::options::CategoryOptions;
use crate::renderer::Renderer;
use crate::scanner::{ScanReport, define_categories};
use crate::store::CategoryStore;

/// File name of the generated index document.
const INDEX_FILE: &str = "index.md";

/// Phase of a [`CategoryBuild`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildPhase {
    Idle,
    Initialized,
    Scanning,
    Rendering,
    Finalized,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Initialized => "initialized",
            Self::Scanning => "scanning",
            Self::Rendering => "rendering",
            Self::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// One category build: owns the category store and the scratch directory.
///
/// # Example
///
/// ```ignore
/// let mut build = CategoryBuild::new(options);
/// build.initialize()?;
/// build.generate(&storage, &mut files)?;
/// for page in pages {
///     let markdown = build.render_page(&page.body, &page.src_uri)?;
/// }
/// build.finish()?;
/// ```
#[derive(Debug)]
pub struct CategoryBuild {
    options: CategoryOptions,
    phase: BuildPhase,
    store: CategoryStore,
    scratch_dir: PathBuf,
}

impl CategoryBuild {
    /// Create an idle build.
    #[must_use]
    pub fn new(options: CategoryOptions) -> Self {
        Self {
            scratch_dir: options.scratch_dir(),
            options,
            phase: BuildPhase::Idle,
            store: CategoryStore::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    #[must_use]
    pub fn options(&self) -> &CategoryOptions {
        &self.options
    }

    /// Categories and page index collected so far.
    #[must_use]
    pub fn store(&self) -> &CategoryStore {
        &self.store
    }

    /// Directory generated documents are written to.
    #[must_use]
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Prepare a fresh build.
    ///
    /// Starts from an empty store and (re)creates the scratch directory. A
    /// directory left by an earlier run is removed first unless `debug_fs`
    /// is set. Allowed from `Idle` and `Finalized`, so one controller can
    /// run consecutive builds.
    pub fn initialize(&mut self) -> Result<(), BuildError> {
        if !matches!(self.phase, BuildPhase::Idle | BuildPhase::Finalized) {
            return Err(self.phase_error("initialize", BuildPhase::Idle));
        }

        self.store = CategoryStore::new();
        if self.scratch_dir.exists() {
            self.clean_scratch_dir()?;
        }
        fs::create_dir_all(&self.scratch_dir)
            .map_err(|e| BuildError::io(&self.scratch_dir, e))?;
        tracing::debug!("Created {}", self.scratch_dir.display());

        self.phase = BuildPhase::Initialized;
        Ok(())
    }

    /// Drop the generated section from `nav` when `no_nav` is set.
    pub fn filter_navigation(&self, nav: &mut Navigation) {
        if !self.options.no_nav {
            return;
        }
        if nav.remove_section(&self.options.base_name).is_some() {
            tracing::debug!("Removed {} from navigation", self.options.base_name);
        }
    }

    /// Scan pages for categories and write the generated documents.
    ///
    /// Every category document, and the index when enabled, is written to
    /// the scratch directory and appended to `files`.
    pub fn generate(
        &mut self,
        storage: &dyn Storage,
        files: &mut Files,
    ) -> Result<ScanReport, BuildError> {
        self.expect_phase("generate", BuildPhase::Initialized)?;

        self.phase = BuildPhase::Scanning;
        let report = define_categories(
            storage,
            files,
            self.options.category_separator,
            &mut self.store,
        )?;
        tracing::debug!(
            pages = report.pages,
            categorized = report.categorized,
            malformed = report.malformed,
            "Scanned category declarations"
        );

        self.phase = BuildPhase::Rendering;
        let renderer = Renderer::new(self.store.graph(), &self.options);
        let mut written = HashSet::new();
        for node in self.store.graph().iter() {
            let file_name = node.file_name();
            if !written.insert(file_name.clone()) {
                tracing::warn!(
                    "Category \"{}\" overwrites {file_name} generated for another category",
                    node.key
                );
            }
            self.write_document(&file_name, &renderer.category_document(node))?;
            files.push(self.output_file(&file_name));
        }

        if self.options.generate_index {
            self.write_document(INDEX_FILE, &renderer.index_document())?;
            files.push(self.output_file(INDEX_FILE));
        }

        Ok(report)
    }

    /// Append the back-reference block to a categorized page.
    ///
    /// Pages without categories are returned unchanged.
    pub fn render_page(&self, markdown: &str, src_uri: &str) -> Result<String, BuildError> {
        self.expect_phase("render_page", BuildPhase::Rendering)?;

        let Some(keys) = self.store.pages().categories_of(src_uri) else {
            return Ok(markdown.to_owned());
        };
        Ok(Renderer::new(self.store.graph(), &self.options).backlinks(markdown, src_uri, keys))
    }

    /// Complete a successful build.
    pub fn finish(&mut self) -> Result<(), BuildError> {
        self.expect_phase("finish", BuildPhase::Rendering)?;
        tracing::info!("Defined {} categories.", self.store.graph().len());
        self.finalize()
    }

    /// Abandon the build after a failure.
    ///
    /// Does nothing for a build that is idle or already finalized.
    pub fn abort(&mut self) -> Result<(), BuildError> {
        if matches!(self.phase, BuildPhase::Idle | BuildPhase::Finalized) {
            return Ok(());
        }
        tracing::debug!("Aborting category build while {}", self.phase);
        self.finalize()
    }

    fn finalize(&mut self) -> Result<(), BuildError> {
        self.store.clear();
        self.phase = BuildPhase::Finalized;
        self.clean_scratch_dir()
    }

    fn clean_scratch_dir(&self) -> Result<(), BuildError> {
        if self.options.debug_fs {
            tracing::info!("Debugging: Not removing temporary directory.");
            return Ok(());
        }
        match fs::remove_dir_all(&self.scratch_dir) {
            Ok(()) => {
                tracing::debug!("Removed {}", self.scratch_dir.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BuildError::io(&self.scratch_dir, e)),
        }
    }

    fn write_document(&self, file_name: &str, contents: &str) -> Result<(), BuildError> {
        let path = self.scratch_dir.join(file_name);
        fs::write(&path, contents).map_err(|e| BuildError::io(&path, e))?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    fn output_file(&self, file_name: &str) -> OutputFile {
        OutputFile {
            path: Path::new(&self.options.base_name).join(file_name),
            src_dir: self.options.work_dir.clone(),
            dest_dir: self.options.site_dir.clone(),
            use_directory_urls: true,
        }
    }

    fn expect_phase(&self, hook: &'static str, expected: BuildPhase) -> Result<(), BuildError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.phase_error(hook, expected))
        }
    }

    fn phase_error(&self, hook: &'static str, expected: BuildPhase) -> BuildError {
        BuildError::Phase {
            hook,
            expected,
            actual: self.phase,
        }
    }
}

impl Drop for CategoryBuild {
    fn drop(&mut self) {
        if matches!(self.phase, BuildPhase::Idle | BuildPhase::Finalized) {
            return;
        }
        tracing::warn!("Category build dropped while {}, cleaning up", self.phase);
        if let Err(e) = self.finalize() {
            tracing::warn!("Failed to clean up category build: {e}");
        }
    }
}
