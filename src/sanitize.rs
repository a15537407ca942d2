const REPLACEMENT: char = '_';

fn is_hostile(c: char) -> bool {
    matches!(c, '/' | '\\' | '?' | '*' | ':' | '"' | '<' | '>' | '|') || c.is_control()
}

/// Turns a remote title into a single path segment.
///
/// Never fails and is idempotent. Distinct titles may map to the same
/// segment; the later write then wins.
pub fn sanitize(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if is_hostile(c) { REPLACEMENT } else { c })
        .collect();

    match cleaned.as_str() {
        "" | "." => "_".to_owned(),
        ".." => "__".to_owned(),
        _ => cleaned,
    }
}
