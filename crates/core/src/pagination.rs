//! Page slicing for question listings.
//!
//! Pages are 1-based. Requests past the end of a listing yield an empty
//! page rather than an error; callers decide whether that is a 404.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the client sends no page, or one that cannot be parsed.
pub const DEFAULT_PAGE: u32 = 1;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return the `page`-th slice of `items`, `page_size` items wide.
///
/// `page` 0 is treated as page 1. The slice is empty when the page starts at
/// or beyond the end of `items`.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let page = page.max(DEFAULT_PAGE) as usize;
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Parse a raw `?page=` value.
///
/// Absent, non-numeric and sub-1 values all fall back to [`DEFAULT_PAGE`].
/// A run of digits too large for `u32` saturates to `u32::MAX`, which always
/// selects an empty page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(digits) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_PAGE;
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return DEFAULT_PAGE;
    }
    match digits.parse::<u32>() {
        Ok(page) => page.max(DEFAULT_PAGE),
        Err(_) => u32::MAX,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
