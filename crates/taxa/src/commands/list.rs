//! `taxa list` command implementation.

use std::path::PathBuf;

use clap::Args;
use taxa_config::{CliSettings, Config};
use taxa_site::{CategoryOptions, CategoryStore, Renderer, define_categories};
use taxa_storage::{Files, Storage};
use taxa_storage_fs::FsStorage;

use super::category_options_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover taxa.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl ListArgs {
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..CliSettings::default()
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Execute the list command.
pub(crate) fn execute(config: &Config) -> Result<(), CliError> {
    let output = Output::new();
    let storage = FsStorage::new(config.docs_resolved.source_dir.clone());
    let options = category_options_from_config(config);

    let lines = hierarchy(&storage, &options)?;
    if lines.is_empty() {
        output.warning("No categories defined.");
        return Ok(());
    }

    output.heading(&options.section_title);
    for line in &lines {
        output.print(line);
    }
    Ok(())
}

/// Scan `storage` and render the category hierarchy.
fn hierarchy(storage: &dyn Storage, options: &CategoryOptions) -> Result<Vec<String>, CliError> {
    let files = Files::new(storage.scan()?);
    let mut store = CategoryStore::new();
    define_categories(storage, &files, options.category_separator, &mut store)?;
    Ok(Renderer::new(store.graph(), options).hierarchy())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hierarchy_from_docs() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("a.md"),
            "---\ncategories: [\"Animals|Birds\", Plants]\n---\n# A\n",
        )
        .unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let lines = hierarchy(&storage, &CategoryOptions::default()).unwrap();

        assert_eq!(
            lines,
            vec![
                "- [Animals](./animals.md) (0)",
                "    - [Birds](./animals-birds.md) (1)",
                "- [Plants](./plants.md) (1)",
            ]
        );
        assert!(!temp_dir.path().join("categories").exists());
    }
}
