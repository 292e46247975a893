//! Column-name escaping
//!
//! Higher layers quote column identifiers with backticks before they reach
//! rule lookup, so names containing dotted paths or stray backticks stay
//! unambiguous. The validator itself only ever sees resolved names.

/// Strips a wrapping backtick pair from a column name, if present
pub fn remove_escape(column: &str) -> &str {
    if column.len() >= 2 && column.starts_with('`') && column.ends_with('`') {
        &column[1..column.len() - 1]
    } else {
        column
    }
}

/// Escapes a column name when it needs quoting.
///
/// A name is wrapped in backticks when it contains more than one dot (a
/// nested path) or a stray backtick; an already-wrapped or plain name is
/// returned unchanged.
pub fn escape(column: &str) -> String {
    if column.len() >= 2 && column.starts_with('`') && column.ends_with('`') {
        return column.to_string();
    }
    if column.matches('.').count() > 1 {
        return format!("`{}`", column);
    }
    if column.contains('`') {
        return format!("`{}`", column.trim_matches('`'));
    }
    column.to_string()
}
