//! Page-number pagination utilities.

use serde::Serialize;

/// Smallest page number; anything lower is clamped up to it.
pub const FIRST_PAGE: u32 = 1;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Upper bound for the page size of flat listings.
pub const MAX_PAGE_SIZE: u32 = 200;

/// A clamped page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Builds a page request, clamping `page` to at least 1 and `page_size`
    /// to `[1, max_page_size]`.
    pub fn new(page: Option<u32>, page_size: Option<u32>, max_page_size: u32) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            page: page.unwrap_or(FIRST_PAGE).max(FIRST_PAGE),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, max_page_size),
        }
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }

    /// Returns the slice of `items` that belongs to this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start
            .saturating_add(self.page_size as usize)
            .min(items.len());
        &items[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, MAX_PAGE_SIZE)
    }
}
