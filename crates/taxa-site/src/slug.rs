//! URL-safe identifiers for category names.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Convert a category name into a slug.
///
/// The name is compatibility-decomposed (NFKD) and reduced to ASCII, so
/// accented letters lose their marks and other non-ASCII characters are
/// dropped. Anything that is not a word character, whitespace or hyphen is
/// then removed, the result is trimmed and lower-cased, and runs of
/// whitespace and hyphens collapse to a single `-`.
///
/// Pure and total: an all-symbol name yields the empty slug.
///
/// # Examples
///
/// ```
/// use taxa_site::slugify;
///
/// assert_eq!(slugify("Café #1"), "cafe-1");
/// assert_eq!(slugify("  Hello   World  "), "hello-world");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let ascii: String = name.nfkd().filter(char::is_ascii).collect();
    let cleaned = DISALLOWED_RE.replace_all(&ascii, "");
    let lowered = cleaned.trim().to_lowercase();
    SEPARATOR_RUN_RE.replace_all(&lowered, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Animals"), "animals");
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_strips_accents_and_symbols() {
        assert_eq!(slugify("Café #1"), "cafe-1");
        assert_eq!(slugify("Ünïcödé"), "unicode");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("  Hello   World  "), "hello-world");
        assert_eq!(slugify("a - - b"), "a-b");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("snake_case 2024"), "snake_case-2024");
    }

    #[test]
    fn test_slugify_drops_non_latin() {
        assert_eq!(slugify("日本 Guide"), "guide");
    }

    #[test]
    fn test_slugify_all_symbols_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_compatibility_forms() {
        // Ligature and full-width forms decompose to plain ASCII.
        assert_eq!(slugify("ﬁle"), "file");
        assert_eq!(slugify("ＡＢＣ"), "abc");
    }

    #[test]
    fn test_slugify_output_alphabet() {
        for name in ["Mixed CASE & stuff", "x--y", "émoji 🎉 party", "a/b\\c"] {
            let slug = slugify(name);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "unexpected character in {slug:?}"
            );
            assert!(!slug.contains("--"), "separator run in {slug:?}");
        }
    }
}
