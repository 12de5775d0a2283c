use serde::Serialize;

pub const PAGE_SIZE: u64 = 10;

/// Page buttons shown at once in the list footer.
const WINDOW: u64 = 5;

/// Normalizes a 1-based page index coming from a query string.
pub fn clamp_page(page: Option<u64>) -> u64 {
    page.unwrap_or(1).max(1)
}

/// Offset for a 1-based page. Pages past the addressable range pin to the
/// largest offset, which the backend answers with an empty page.
pub fn skip_for(page: u64) -> u64 {
    (page.max(1) - 1).saturating_mul(PAGE_SIZE)
}

pub fn total_pages(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub window: Vec<u64>,
}

impl Pager {
    pub fn new(page: u64, total: u64) -> Self {
        let page = page.max(1);
        let pages = total_pages(total);
        Self {
            page,
            page_size: PAGE_SIZE,
            total,
            total_pages: pages,
            has_prev: page > 1,
            has_next: page < pages,
            window: page_window(page, pages),
        }
    }
}

/// Up to five page numbers around `page`, pinned to the first or last five
/// near either end.
pub fn page_window(page: u64, pages: u64) -> Vec<u64> {
    if pages <= WINDOW {
        return (1..=pages).collect();
    }
    let first = if page <= 3 {
        1
    } else if page >= pages - 2 {
        pages - WINDOW + 1
    } else {
        page - 2
    };
    (first..first + WINDOW).collect()
}
