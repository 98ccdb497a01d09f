//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trivia_core::pagination::parse_page;

/// Page selection (`?page=`).
///
/// Kept as a raw string so a non-numeric value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested 1-based page number.
    pub fn page(&self) -> u32 {
        parse_page(self.page.as_deref())
    }
}
