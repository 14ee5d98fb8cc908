//! Pagination parameters and page-count math.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PER_PAGE: i64 = 50;
/// Hard cap on page size.
pub const MAX_PER_PAGE: i64 = 500;

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number.
    pub page: i64,
    /// Records per page, in `1..=MAX_PER_PAGE`.
    pub per_page: i64,
}

impl Page {
    /// Validate raw query parameters into a page window.
    ///
    /// `page` must be >= 1 and `per_page` >= 1; `per_page` is clamped to
    /// [`MAX_PER_PAGE`]. A `page` whose OFFSET would not fit in an i64 is
    /// rejected. Missing values fall back to page 1 with
    /// [`DEFAULT_PER_PAGE`].
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> CoreResult<Self> {
        let page = page.unwrap_or(1);
        if page < 1 {
            return Err(CoreError::validation("page must be >= 1"));
        }
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page < 1 {
            return Err(CoreError::validation("per_page must be >= 1"));
        }
        let per_page = per_page.min(MAX_PER_PAGE);
        // The OFFSET must stay representable; absurd page numbers are a
        // validation error, not an arithmetic one.
        if (page - 1).checked_mul(per_page).is_none() {
            return Err(CoreError::validation("page is out of range"));
        }
        Ok(Self { page, per_page })
    }

    /// SQL OFFSET for this window.
    pub fn offset(self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Total page count for `total` matching records.
    ///
    /// Ceiling division; 0 records means 0 pages.
    pub fn pages_for(self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.per_page - 1) / self.per_page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_to_first_page() {
        let page = Page::new(None, None).unwrap();
        assert_eq!(page, Page { page: 1, per_page: DEFAULT_PER_PAGE });
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert_matches!(Page::new(Some(0), None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_per_page_is_rejected() {
        assert_matches!(Page::new(None, Some(-5)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn overflowing_page_number_is_rejected() {
        // i64::MAX pages of 50 cannot produce a representable OFFSET.
        assert_matches!(
            Page::new(Some(i64::MAX), Some(50)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn huge_but_representable_page_is_accepted() {
        let page = Page::new(Some(1_000_000), Some(10)).unwrap();
        assert_eq!(page.offset(), 9_999_990);
    }

    #[test]
    fn per_page_is_capped() {
        let page = Page::new(Some(1), Some(10_000)).unwrap();
        assert_eq!(page.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let page = Page::new(Some(3), Some(10)).unwrap();
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn twenty_five_tasks_at_ten_per_page_is_three_pages() {
        let page = Page::new(Some(3), Some(10)).unwrap();
        assert_eq!(page.pages_for(25), 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = Page::new(Some(1), Some(10)).unwrap();
        assert_eq!(page.pages_for(30), 3);
    }

    #[test]
    fn zero_total_is_zero_pages() {
        let page = Page::new(Some(1), Some(10)).unwrap();
        assert_eq!(page.pages_for(0), 0);
    }
}
