//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a page request, clamping out-of-range values.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// SQL `OFFSET` value, saturating at `i64::MAX` for absurd pages.
    pub fn offset(&self) -> i64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.page_size);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Build a page from the rows of one page and the overall count.
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: i64) -> Self {
        let total_items = total_items.max(0) as u64;
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(request.page_size)
        };
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
        }
    }

    /// Convert the items while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_page_request() {
        let req = PageRequest::new(0, 1000);
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, MAX_PAGE_SIZE);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset_for_third_page() {
        let req = PageRequest::new(3, 10);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_huge_page_offset_saturates() {
        assert_eq!(PageRequest::new(u64::MAX, 100).offset(), i64::MAX);
        assert_eq!(
            PageRequest::new(184_467_440_737_095_517, 100).offset(),
            i64::MAX
        );
        assert!(PageRequest::new(u64::MAX / 2, 1).offset() >= 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let req = PageRequest::new(1, 10);
        let page = PageResponse::new(vec![1, 2, 3], &req, 21);
        assert_eq!(page.total_pages, 3);
        let empty: PageResponse<i32> = PageResponse::new(vec![], &req, 0);
        assert_eq!(empty.total_pages, 1);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let req = PageRequest::new(2, 2);
        let page = PageResponse::new(vec![1, 2], &req, 4).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_items, 4);
    }
}
