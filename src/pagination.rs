use serde::Serialize;

use crate::domain::types::PageNumber;
use crate::repository::Page;

/// Page links shown in listings: `None` marks a gap rendered as an ellipsis.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    // Past-end pages are windowed around the last page.
    let current_page = current_page.min(last_page);

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One rendered page of a listing.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    /// One-based number of the current page.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(
        items: Vec<T>,
        current_page: PageNumber,
        total_pages: usize,
        total_items: usize,
    ) -> Self {
        let page = current_page.get();
        let pages = get_pages(total_pages, page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page,
            total_pages,
            total_items,
        }
    }

    /// Wraps a storage page fetched for `current_page`.
    pub fn from_page(page: Page<T>, current_page: PageNumber) -> Self {
        Self::new(page.items, current_page, page.total_pages, page.total_elements)
    }
}
