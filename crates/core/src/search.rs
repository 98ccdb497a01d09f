//! Question search helpers.
//!
//! Search is a case-insensitive substring match on the question text. The
//! PostgreSQL store matches with `ILIKE`, the in-memory store with
//! [`matches_term`]; both must agree on which questions match.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and the escape character itself so they match literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%term%` pattern for `ILIKE ... ESCAPE '\'`.
///
/// # Examples
///
/// ```
/// use trivia_core::search::contains_pattern;
/// assert_eq!(contains_pattern("title"), "%title%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// Case-insensitive substring test. An empty term matches everything.
pub fn matches_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
