//! Listing core: filtering, pagination and derived aggregates.
//!
//! Every page of the site is the same machine over a fetched collection:
//! filter with the user's criteria, count aggregates over the unfiltered
//! collection, clamp the requested page, slice. The pieces here are pure
//! functions so each page handler composes them instead of re-implementing
//! its own 30-line variant.

mod aggregates;
mod filters;

pub use aggregates::*;
pub use filters::*;

use serde::Serialize;

/// Hard cap on `perPage`; anything above serves no page the frontend renders.
pub const MAX_PER_PAGE: usize = 100;

/// Number of pages needed for `len` items at `per_page` per page.
///
/// Always at least 1, so an empty collection still renders one (empty) page.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    debug_assert!(per_page > 0);
    if len == 0 {
        1
    } else {
        len.div_ceil(per_page)
    }
}

/// The half-open window of `items` for a 1-indexed `page`.
///
/// Does not clamp: a page outside `[1, total_pages]` yields an empty slice.
/// Callers that want the nearest valid page clamp first (`clamp_page`).
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// One rendered page of a filtered collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matching: usize,
}

/// Filter → clamp → slice.
///
/// `matching` is the already-filtered collection in display order. The
/// requested page is clamped here so admin and public surfaces behave
/// identically when criteria change under a stale page number.
pub fn build_page<T: Clone>(matching: &[T], requested_page: usize, per_page: usize) -> ListingPage<T> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let total_matching = matching.len();
    let pages = total_pages(total_matching, per_page);
    let page = clamp_page(requested_page, pages);

    ListingPage {
        items: page_slice(matching, page, per_page).to_vec(),
        page,
        total_pages: pages,
        total_matching,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_matches_ceil() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(1, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(4, 3), 2);
        assert_eq!(total_pages(10, 8), 2);
        assert_eq!(total_pages(16, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
    }

    #[test]
    fn test_pages_concatenate_to_original() {
        let items: Vec<u32> = (0..23).collect();
        for per_page in 1..=25 {
            let pages = total_pages(items.len(), per_page);
            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                rebuilt.extend_from_slice(page_slice(&items, page, per_page));
            }
            assert_eq!(rebuilt, items, "per_page {per_page}");
        }
    }

    #[test]
    fn test_ten_items_page_size_eight() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(total_pages(items.len(), 8), 2);
        assert_eq!(page_slice(&items, 1, 8), (1..=8).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 2, 8), vec![9, 10]);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_error() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(page_slice(&items, 0, 3).is_empty());
        assert!(page_slice(&items, 3, 3).is_empty());
        assert!(page_slice(&items, 99, 3).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(1, 4), 1);
        assert_eq!(clamp_page(4, 4), 4);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn test_build_page_clamps_and_slices() {
        let items: Vec<u32> = (1..=10).collect();

        let first = build_page(&items, 0, 3);
        assert_eq!(first.page, 1);
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.total_pages, 4);
        assert_eq!(first.total_matching, 10);

        let last = build_page(&items, 99, 3);
        assert_eq!(last.page, 4);
        assert_eq!(last.items, vec![10]);
    }

    #[test]
    fn test_build_page_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let page = build_page(&items, 1, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_matching, 0);
    }

    #[test]
    fn test_build_page_bounds_per_page() {
        let items: Vec<u32> = (1..=10).collect();
        let page = build_page(&items, 1, 0);
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.total_pages, 10);
    }
}
