//! `taxa build` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use taxa_config::{CliSettings, Config};
use taxa_site::{CategoryBuild, Navigation, ScanReport};
use taxa_storage::{Files, Storage, split_front_matter};
use taxa_storage_fs::FsStorage;

use super::category_options_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Navigation dump written next to the published pages.
const NAV_FILE: &str = "nav.json";

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover taxa.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the published site (overrides config).
    #[arg(long)]
    site_dir: Option<PathBuf>,

    /// Enable verbose output (category definitions and hierarchy).
    #[arg(short, long)]
    verbose: bool,

    /// Keep the scratch directory after the build.
    #[arg(long)]
    debug_fs: bool,

    /// Do not generate the categories index page.
    #[arg(long)]
    no_index: bool,
}

/// Counts reported after a successful build.
struct BuildSummary {
    report: ScanReport,
    categories: usize,
    generated: usize,
}

impl BuildArgs {
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            site_dir: self.site_dir.clone(),
            verbose: self.verbose.then_some(true),
            debug_fs: self.debug_fs.then_some(true),
            generate_index: self.no_index.then_some(false),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Execute the build command.
///
/// # Errors
///
/// Returns an error if scanning, generation or publishing fails. The
/// scratch directory is cleaned up either way.
pub(crate) fn execute(config: &Config) -> Result<(), CliError> {
    let output = Output::new();
    let source_dir = &config.docs_resolved.source_dir;
    let site_dir = &config.docs_resolved.site_dir;

    output.info(&format!("Source: {}", source_dir.display()));
    output.info(&format!("Site: {}", site_dir.display()));

    let storage = FsStorage::new(source_dir.clone());
    let mut build = CategoryBuild::new(category_options_from_config(config));

    let summary = match publish(&storage, &mut build, site_dir) {
        Ok(summary) => summary,
        Err(err) => {
            if let Err(cleanup) = build.abort() {
                output.warning(&format!("Cleanup failed: {cleanup}"));
            }
            return Err(err);
        }
    };
    build.finish()?;

    if summary.report.malformed > 0 {
        output.warning(&format!(
            "{} page(s) declared categories that were not a list",
            summary.report.malformed
        ));
    }
    output.success(&format!(
        "Published {} pages with {} categories ({} generated files) to {}",
        summary.report.pages,
        summary.categories,
        summary.generated,
        site_dir.display()
    ));
    Ok(())
}

/// Run the host pipeline: scan, generate, render pages and copy everything
/// into `site_dir`.
fn publish(
    storage: &FsStorage,
    build: &mut CategoryBuild,
    site_dir: &Path,
) -> Result<BuildSummary, CliError> {
    let mut files = Files::new(storage.scan()?);

    build.initialize()?;
    let report = build.generate(storage, &mut files)?;

    let mut nav = Navigation::from_files(&files);
    build.filter_navigation(&mut nav);

    for doc in files.documents() {
        let dest = site_dir.join(&doc.src_uri);
        create_parent(&dest)?;
        if doc.is_documentation_page() {
            let raw = storage.read(&doc.src_uri)?;
            let (body, _) = split_front_matter(&raw);
            fs::write(&dest, build.render_page(body, &doc.src_uri)?)?;
        } else {
            fs::copy(&doc.abs_src_path, &dest)?;
        }
        tracing::debug!("Published {}", dest.display());
    }

    for file in files.generated() {
        let dest = file.dest_path();
        create_parent(&dest)?;
        fs::copy(file.abs_src_path(), &dest)?;
        tracing::debug!("Published {}", dest.display());
    }

    fs::create_dir_all(site_dir)?;
    fs::write(site_dir.join(NAV_FILE), serde_json::to_string_pretty(&nav)?)?;

    Ok(BuildSummary {
        report,
        categories: build.store().graph().len(),
        generated: files.generated().len(),
    })
}

fn create_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taxa_site::CategoryOptions;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_publish_writes_site() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        let site = temp_dir.path().join("site");
        write(
            &docs,
            "animals/dog.md",
            "---\ncategories: [Animals]\n---\n# Dog\n",
        );
        write(&docs, "img/logo.png", "png");

        let storage = FsStorage::new(docs);
        let mut build = CategoryBuild::new(CategoryOptions {
            work_dir: temp_dir.path().to_path_buf(),
            site_dir: site.clone(),
            ..CategoryOptions::default()
        });

        let summary = publish(&storage, &mut build, &site).unwrap();
        build.finish().unwrap();

        assert_eq!(summary.report.pages, 1);
        assert_eq!(summary.categories, 1);
        assert_eq!(summary.generated, 2);
        assert_eq!(
            fs::read_to_string(site.join("animals/dog.md")).unwrap(),
            "# Dog\n\n## Categories\n\n- [Animals](../categories/animals.md)"
        );
        assert_eq!(fs::read_to_string(site.join("img/logo.png")).unwrap(), "png");
        assert!(site.join("categories/animals.md").is_file());
        assert!(site.join("categories/index.md").is_file());
        assert!(site.join(NAV_FILE).is_file());
        assert!(!temp_dir.path().join("categories").exists());
    }

    #[test]
    fn test_publish_no_nav_hides_section() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        let site = temp_dir.path().join("site");
        write(&docs, "guide.md", "---\ncategories: [Guides]\n---\n# Guide\n");

        let storage = FsStorage::new(docs);
        let mut build = CategoryBuild::new(CategoryOptions {
            no_nav: true,
            work_dir: temp_dir.path().to_path_buf(),
            site_dir: site.clone(),
            ..CategoryOptions::default()
        });

        publish(&storage, &mut build, &site).unwrap();
        build.finish().unwrap();

        let nav = fs::read_to_string(site.join(NAV_FILE)).unwrap();
        assert_eq!(
            nav,
            "{\n  \"items\": [\n    {\n      \"title\": \"Guide\",\n      \"url\": \"guide/\"\n    }\n  ]\n}"
        );
    }
}
