//! Source file classification for document discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use taxa_storage::Document;

/// Classify a discovered file as a [`Document`].
///
/// `.md` files become pages, everything else becomes an asset. Returns
/// `None` if `path` is not inside `source_dir`.
///
/// Note: This function assumes the caller has already filtered out
/// hidden files and directories.
pub(crate) fn classify(path: PathBuf, filename: &OsStr, source_dir: &Path) -> Option<Document> {
    let rel_path = path.strip_prefix(source_dir).ok()?;
    let src_uri = path_to_src_uri(rel_path);

    let is_markdown = Path::new(filename)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("md"));

    Some(if is_markdown {
        Document::page(src_uri, path)
    } else {
        Document::asset(src_uri, path)
    })
}

/// Convert a relative file path to a `/`-separated source URI.
///
/// # Examples
///
/// - `index.md` -> `"index.md"`
/// - `animals/birds.md` -> `"animals/birds.md"`
/// - `animals\birds.md` (Windows) -> `"animals/birds.md"`
pub(crate) fn path_to_src_uri(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use taxa_storage::DocumentKind;

    use super::*;

    /// Helper to classify a file path under a source dir.
    fn classify_at(source_dir: &str, file_path: &str) -> Option<Document> {
        let source = Path::new(source_dir);
        let path = source.join(file_path);
        let filename = OsString::from(Path::new(file_path).file_name().unwrap_or_default());
        classify(path, &filename, source)
    }

    #[test]
    fn test_md_files_are_pages() {
        let doc = classify_at("/docs", "guide.md").unwrap();
        assert_eq!(doc.kind, DocumentKind::Page);
        assert_eq!(doc.src_uri, "guide.md");
        assert_eq!(doc.abs_src_path, PathBuf::from("/docs/guide.md"));
    }

    #[test]
    fn test_uppercase_extension_is_page() {
        let doc = classify_at("/docs", "README.MD").unwrap();
        assert_eq!(doc.kind, DocumentKind::Page);
    }

    #[test]
    fn test_other_files_are_assets() {
        let doc = classify_at("/docs", "img/logo.png").unwrap();
        assert_eq!(doc.kind, DocumentKind::Asset);
        assert_eq!(doc.src_uri, "img/logo.png");
    }

    #[test]
    fn test_nested_page() {
        let doc = classify_at("/docs", "a/b/c/doc.md").unwrap();
        assert_eq!(doc.src_uri, "a/b/c/doc.md");
    }

    #[test]
    fn test_outside_source_dir() {
        let filename = OsString::from("x.md");
        assert!(classify(PathBuf::from("/elsewhere/x.md"), &filename, Path::new("/docs")).is_none());
    }

    #[test]
    fn test_path_to_src_uri() {
        assert_eq!(path_to_src_uri(Path::new("index.md")), "index.md");
        assert_eq!(
            path_to_src_uri(Path::new("animals/birds.md")),
            "animals/birds.md"
        );
    }
}
