//! Relative links between site locations.

/// Split a `/`-separated path into normalized segments.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment.
fn segments(path: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts
}

/// Link to `url` as seen from the page at `other`.
///
/// When the last component of `other` looks like a file (contains a `.`) it
/// is dropped, so the link is relative to the page's directory. A trailing
/// `/` on `url` is kept.
///
/// # Examples
///
/// ```
/// use taxa_site::relative_url;
///
/// assert_eq!(relative_url("categories", "animals/dog.md"), "../categories");
/// assert_eq!(relative_url("categories", "index.md"), "categories");
/// ```
#[must_use]
pub fn relative_url(url: &str, other: &str) -> String {
    let base = match other.rsplit_once('/') {
        Some((dir, last)) if last.contains('.') => dir,
        None if other.contains('.') => "",
        _ => other,
    };

    let target = segments(url);
    let from = segments(base);
    let common = target
        .iter()
        .zip(&from)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    parts.extend_from_slice(&target[common..]);

    let mut relative = if parts.is_empty() {
        ".".to_owned()
    } else {
        parts.join("/")
    };
    if url.ends_with('/') {
        relative.push('/');
    }
    relative
}
