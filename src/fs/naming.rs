//! Folder name sanitization.

/// Sanitize a spreadsheet value into a safe folder name.
///
/// Keeps alphanumerics plus space, `-`, `_` and `.`, drops everything else,
/// and trims trailing whitespace. Values that end up empty, or that consist
/// only of dots (`.` and `..` would resolve outside the tree), fall back to
/// the given placeholder.
pub fn sanitize_name(raw: &str, fallback: &str) -> String {
    let sanitized: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.'))
        .collect();

    let sanitized = sanitized.trim_end().to_string();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        return fallback.to_string();
    }

    sanitized
}
