//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod list;

pub(crate) use build::BuildArgs;
pub(crate) use list::ListArgs;

use taxa_config::Config;
use taxa_site::CategoryOptions;

/// Category build options from the loaded configuration.
pub(crate) fn category_options_from_config(config: &Config) -> CategoryOptions {
    let categories = &config.categories;
    CategoryOptions {
        generate_index: categories.generate_index,
        verbose: categories.verbose,
        no_nav: categories.no_nav,
        base_name: categories.base_name.clone(),
        section_title: categories.section_title.clone(),
        category_separator: categories.separator(),
        debug_fs: categories.debug_fs,
        show_breadcrumbs: categories.show_breadcrumbs,
        breadcrumb_separator: categories.breadcrumb_separator.clone(),
        work_dir: config.docs_resolved.work_dir.clone(),
        site_dir: config.docs_resolved.site_dir.clone(),
    }
}
