//! Configuration management for Taxa.
//!
//! Parses `taxa.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [docs]
//! source_dir = "docs"
//! site_dir = "site"
//!
//! [categories]
//! base_name = "categories"
//! category_separator = "|"
//! show_breadcrumbs = true
//! ```

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site output directory.
    pub site_dir: Option<PathBuf>,
    /// Override verbose logging flag.
    pub verbose: Option<bool>,
    /// Override scratch directory preservation flag.
    pub debug_fs: Option<bool>,
    /// Override index generation flag.
    pub generate_index: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "taxa.toml";

/// Separator used when `category_separator` is unset.
const DEFAULT_CATEGORY_SEPARATOR: char = '|';

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    #[serde(default)]
    docs: DocsConfigRaw,
    /// Category generation options.
    pub categories: CategoriesConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    site_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// Output directory for the built site.
    pub site_dir: PathBuf,
    /// Directory the scratch output is created in (config dir or CWD).
    pub work_dir: PathBuf,
}

/// Category generation options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CategoriesConfig {
    /// Generate the `index.md` listing of all categories.
    pub generate_index: bool,
    /// Log category definitions and the rendered hierarchy.
    pub verbose: bool,
    /// Remove the categories section from the site navigation.
    pub no_nav: bool,
    /// Name of the scratch directory and of the generated URL prefix.
    pub base_name: String,
    /// Heading of the category block appended to each page.
    pub section_title: String,
    /// Character splitting a category entry into path segments.
    pub category_separator: String,
    /// Keep the scratch directory after the build.
    pub debug_fs: bool,
    /// Render the full lineage of each category on pages.
    pub show_breadcrumbs: bool,
    /// Glyph placed between breadcrumb links.
    pub breadcrumb_separator: String,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            generate_index: true,
            verbose: false,
            no_nav: false,
            base_name: "categories".to_owned(),
            section_title: "Categories".to_owned(),
            category_separator: DEFAULT_CATEGORY_SEPARATOR.to_string(),
            debug_fs: false,
            show_breadcrumbs: false,
            breadcrumb_separator: ">".to_owned(),
        }
    }
}

impl CategoriesConfig {
    /// The category path separator as a character.
    ///
    /// Falls back to `|` when the configured value is empty; [`Config::validate`]
    /// rejects that case for loaded files.
    #[must_use]
    pub fn separator(&self) -> char {
        self.category_separator
            .chars()
            .next()
            .unwrap_or(DEFAULT_CATEGORY_SEPARATOR)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Absolute, lexically normalized form of `path`.
fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `taxa.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated once the overrides are in place.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Scratch directory for generated category documents.
    #[must_use]
    pub fn scratch_dir(&self) -> PathBuf {
        self.docs_resolved.work_dir.join(&self.categories.base_name)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(site_dir) = &settings.site_dir {
            self.docs_resolved.site_dir.clone_from(site_dir);
        }
        if let Some(verbose) = settings.verbose {
            self.categories.verbose = verbose;
        }
        if let Some(debug_fs) = settings.debug_fs {
            self.categories.debug_fs = debug_fs;
        }
        if let Some(generate_index) = settings.generate_index {
            self.categories.generate_index = generate_index;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            categories: CategoriesConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                site_dir: base.join("site"),
                work_dir: base.to_path_buf(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] after CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_categories()?;
        self.validate_scratch_dir()
    }

    /// The scratch directory is wiped on every build, so it must not overlap
    /// the source or site directory.
    fn validate_scratch_dir(&self) -> Result<(), ConfigError> {
        let scratch = normalize(&self.scratch_dir());
        let dirs = [
            ("docs.source_dir", &self.docs_resolved.source_dir),
            ("docs.site_dir", &self.docs_resolved.site_dir),
        ];

        for (field, dir) in dirs {
            let dir = normalize(dir);
            if scratch.starts_with(&dir) || dir.starts_with(&scratch) {
                return Err(ConfigError::Validation(format!(
                    "scratch directory {} overlaps {field} {}, choose another categories.base_name",
                    scratch.display(),
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Validate category options.
    fn validate_categories(&self) -> Result<(), ConfigError> {
        let categories = &self.categories;

        if categories.category_separator.chars().count() != 1 {
            return Err(ConfigError::Validation(format!(
                "categories.category_separator must be a single character, got {:?}",
                categories.category_separator
            )));
        }

        require_non_empty(&categories.base_name, "categories.base_name")?;
        if categories.base_name.contains(['/', '\\'])
            || matches!(categories.base_name.as_str(), "." | "..")
        {
            return Err(ConfigError::Validation(format!(
                "categories.base_name must be a plain directory name, got {:?}",
                categories.base_name
            )));
        }

        require_non_empty(&categories.section_title, "categories.section_title")?;
        require_non_empty(
            &categories.breadcrumb_separator,
            "categories.breadcrumb_separator",
        )?;

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            site_dir: resolve(self.docs.site_dir.as_deref(), "site"),
            work_dir: config_dir.to_path_buf(),
        };
    }
}
