//! Deterministic page slicing
//!
//! Pages are 1-based. An empty collection still has one (empty) page, so
//! "page 1 of an empty result" is a valid render rather than an error, and
//! a requested page outside `[1, total_pages]` is clamped to the nearest
//! bound. Callers that change a filter are expected to reset to page 1
//! before querying again (see [`QueryState`](super::engine::QueryState),
//! whose transitions enforce exactly that); clamping is the backstop, not
//! the policy.

/// One page of results plus the metadata needed to render page controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    /// The page slice, in the order the input collection had
    pub items: Vec<T>,
    /// The page actually served (after clamping)
    pub page: usize,
    /// Total number of pages, at least 1
    pub total_pages: usize,
    /// Size of the collection before slicing
    pub total_count: usize,
}

/// Number of pages needed for `count` items at `page_size` per page
///
/// Always at least 1, so an empty collection renders as a single empty
/// page.
///
/// # Examples
/// ```
/// # use swapr::catalog::paginate::total_pages;
/// assert_eq!(total_pages(0, 10), 1);
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(30, 10), 3);
/// ```
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slice a collection into the requested page
///
/// `page` is clamped to `[1, total_pages]`; a `page_size` of zero is
/// treated as 1.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Paged<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let items = items.into_iter().skip(start).take(page_size).collect();

    Paged {
        items,
        page,
        total_pages,
        total_count,
    }
}

/// One entry in a compact page-control sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A selectable page number
    Page(usize),
    /// An ellipsis standing in for elided pages
    Gap,
}

/// Compact page-control sequence: first page, a window of `delta` pages
/// around the current one, and the last page, with gaps where pages are
/// elided
///
/// Empty when there is a single page (no controls to render).
///
/// # Examples
/// ```
/// # use swapr::catalog::paginate::{PageToken, page_window};
/// use PageToken::{Gap, Page};
///
/// assert_eq!(
///     page_window(5, 9, 1),
///     vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(9)]
/// );
/// assert_eq!(page_window(1, 2, 2), vec![Page(1), Page(2)]);
/// assert!(page_window(1, 1, 2).is_empty());
/// ```
#[must_use]
pub fn page_window(page: usize, total_pages: usize, delta: usize) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let page = page.clamp(1, total_pages);
    let first = page.saturating_sub(delta).max(2);
    let last = (page + delta).min(total_pages - 1);

    let mut tokens = vec![PageToken::Page(1)];
    if first > 2 {
        tokens.push(PageToken::Gap);
    }
    for middle in first..=last {
        tokens.push(PageToken::Page(middle));
    }
    if last + 1 < total_pages {
        tokens.push(PageToken::Gap);
    }
    tokens.push(PageToken::Page(total_pages));

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Gap, Page};

    #[test]
    fn test_empty_collection_is_one_valid_page() {
        let paged = paginate(Vec::<u32>::new(), 1, 10);
        assert_eq!(paged.total_pages, 1);
        assert_eq!(paged.page, 1);
        assert!(paged.items.is_empty());
        assert_eq!(paged.total_count, 0);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<u32> = (0..25).collect();
        let paged = paginate(items, 3, 10);
        assert_eq!(paged.total_pages, 3);
        assert_eq!(paged.items.len(), 5);
        assert_eq!(paged.items[0], 20);
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        assert_eq!(total_pages(30, 10), 3);
        let paged = paginate((0..30).collect::<Vec<u32>>(), 3, 10);
        assert_eq!(paged.items.len(), 10);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<u32> = (0..25).collect();

        let beyond = paginate(items.clone(), 99, 10);
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items.len(), 5);

        let below = paginate(items, 0, 10);
        assert_eq!(below.page, 1);
        assert_eq!(below.items[0], 0);
    }

    #[test]
    fn test_slice_order_is_input_order() {
        let items = vec!["a", "b", "c", "d", "e"];
        let paged = paginate(items, 2, 2);
        assert_eq!(paged.items, vec!["c", "d"]);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let paged = paginate(vec![1, 2, 3], 1, 0);
        assert_eq!(paged.total_pages, 3);
        assert_eq!(paged.items, vec![1]);
    }

    #[test]
    fn test_total_pages_property() {
        for count in 0usize..50 {
            for page_size in 1usize..8 {
                let expected = if count == 0 {
                    1
                } else {
                    count.div_ceil(page_size)
                };
                assert_eq!(total_pages(count, page_size), expected.max(1));
            }
        }
    }

    #[test]
    fn test_page_window_single_page_is_empty() {
        assert!(page_window(1, 1, 2).is_empty());
        assert!(page_window(1, 0, 2).is_empty());
    }

    #[test]
    fn test_page_window_no_gaps_when_short() {
        assert_eq!(
            page_window(2, 4, 2),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn test_page_window_gaps_on_both_sides() {
        assert_eq!(
            page_window(5, 10, 2),
            vec![
                Page(1),
                Gap,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Gap,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_page_window_edges_keep_first_and_last() {
        assert_eq!(
            page_window(1, 10, 2),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            page_window(10, 10, 2),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }
}
