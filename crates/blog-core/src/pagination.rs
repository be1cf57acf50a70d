//! Page requests and the pages cut from an ordered collection.

use serde::{Deserialize, Serialize};

/// Largest page a client may ask for; bigger requests are clamped.
pub const MAX_PAGE_SIZE: usize = 50;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_NUMBER: usize = 1;

/// A 1-based page request.
///
/// Always holds `page_number >= 1` and `1 <= page_size <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    /// Zero falls back to the defaults, oversized pages are clamped.
    pub fn new(page_number: usize, page_size: usize) -> Self {
        let page_number = if page_number == 0 {
            DEFAULT_PAGE_NUMBER
        } else {
            page_number
        };
        let page_size = match page_size {
            0 => DEFAULT_PAGE_SIZE,
            size => size.min(MAX_PAGE_SIZE),
        };

        Self {
            page_number,
            page_size,
        }
    }

    /// Build a request from signed input, treating non-positive values as "use the default".
    pub fn from_signed(page_number: i64, page_size: i64) -> Self {
        Self::new(
            usize::try_from(page_number).unwrap_or(0),
            usize::try_from(page_size).unwrap_or(0),
        )
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus metadata about the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Cut the requested page out of `source`.
    ///
    /// Pages past the end yield no items rather than an error.
    pub fn paginate<I>(source: I, request: PageRequest) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let all: Vec<T> = source.into_iter().collect();
        let total_count = all.len();
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect();

        Self::new(items, total_count, request)
    }

    fn new(items: Vec<T>, total_count: usize, request: PageRequest) -> Self {
        let total_pages = total_count.div_ceil(request.page_size);

        Self {
            items,
            page_number: request.page_number,
            page_size: request.page_size,
            total_count,
            total_pages,
            has_previous: request.page_number > 1,
            has_next: request.page_number < total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_clamped() {
        let request = PageRequest::new(1, 1000);
        assert_eq!(request.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_non_positive_values_fall_back_to_defaults() {
        let request = PageRequest::from_signed(-3, 0);
        assert_eq!(request.page_number(), DEFAULT_PAGE_NUMBER);
        assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::default(), PageRequest::new(1, 10));
    }

    #[test]
    fn test_middle_page() {
        let page = Page::paginate(1..=25, PageRequest::new(2, 10));

        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous);
        assert!(page.has_next);
    }

    #[test]
    fn test_last_partial_page() {
        let page = Page::paginate(1..=25, PageRequest::new(3, 10));

        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(!page.has_next);
    }

    #[test]
    fn test_item_count_matches_formula() {
        for n in [0usize, 1, 9, 10, 11, 49, 50, 51, 120] {
            for size in [1usize, 3, 10, 50] {
                for number in 1..=6usize {
                    let page = Page::paginate(0..n, PageRequest::new(number, size));
                    let expected = size.min(n.saturating_sub((number - 1) * size));
                    assert_eq!(page.items.len(), expected, "n={n} size={size} page={number}");
                    assert_eq!(page.total_count, n);
                }
            }
        }
    }

    #[test]
    fn test_empty_source() {
        let page = Page::paginate(Vec::<u8>::new(), PageRequest::new(2, 10));

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_page_beyond_end_is_empty_not_error() {
        let page = Page::paginate(1..=5, PageRequest::new(9, 10));

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::paginate(vec!["a"], PageRequest::default());
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["hasPrevious"], false);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["pageSize"], 10);
    }
}
