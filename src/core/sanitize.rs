// src/core/sanitize.rs

/// Canonical form for any scraped string: `None` → "", tabs/newlines → spaces,
/// whitespace runs collapsed to one space, trimmed.
pub fn normalize(s: Option<&str>) -> String {
    s.map(normalize_ws).unwrap_or_default()
}

/// Collapse sequences of whitespace (tabs and newlines included) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case-insensitive substring test (Unicode lowercase on both sides).
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
