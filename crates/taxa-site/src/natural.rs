//! Natural ("human") ordering of strings.
//!
//! `"Item 2"` sorts before `"Item 10"`: each string is split into runs of
//! ASCII digits and runs of everything else, digit runs compare by numeric
//! value and other runs compare as plain strings. Two strings that only
//! differ in leading zeros fall back to ordinary string comparison, so the
//! ordering is total and sorting is deterministic.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Iterator over digit and non-digit runs of a string.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(run)
        } else {
            Chunk::Text(run)
        })
    }
}

fn chunks(s: &str) -> Chunks<'_> {
    Chunks { rest: s }
}

/// Compare two digit runs by value, without parsing into a fixed-width integer.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_chunks(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => compare_numeric(x, y),
        (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
    }
}

/// Natural-order comparison of two strings.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_chunks(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Sort `items` in natural order of the string returned by `key`.
pub fn sort_by_key<T, F>(items: &mut [T], mut key: F)
where
    F: FnMut(&T) -> &str,
{
    items.sort_by(|a, b| compare(key(a), key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        sort_by_key(&mut items, |s| *s);
        items
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(
            sorted(vec!["Item 10", "Item 2", "Item 1"]),
            vec!["Item 1", "Item 2", "Item 10"]
        );
    }

    #[test]
    fn test_plain_strings_compare_lexically() {
        assert_eq!(sorted(vec!["b", "a", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(sorted(vec!["beta", "Alpha", "alpha"]), vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("Item", "Item 1"), Ordering::Less);
        assert_eq!(compare("a1", "a"), Ordering::Greater);
    }

    #[test]
    fn test_leading_zeros_are_total() {
        assert_eq!(compare("v007", "v7"), "v007".cmp("v7"));
        assert_eq!(compare("v7", "v007"), "v7".cmp("v007"));
        assert_eq!(compare("v007", "v8"), Ordering::Less);
    }

    #[test]
    fn test_digits_before_text() {
        assert_eq!(compare("1abc", "abc"), Ordering::Less);
    }

    #[test]
    fn test_large_numbers_do_not_overflow() {
        assert_eq!(
            compare("id 123456789012345678901234567890", "id 99"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(compare("Birds|2", "Birds|2"), Ordering::Equal);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_key_on_structs() {
        let mut pages = vec![("Page 12", 1), ("Page 3", 2)];
        sort_by_key(&mut pages, |p| p.0);
        assert_eq!(pages, vec![("Page 3", 2), ("Page 12", 1)]);
    }
}
