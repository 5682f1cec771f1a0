use serde::{Deserialize, Serialize};

use crate::shared::constants::ROW_PER_PAGE;

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=` query parameter shared by every paginated listing.
///
/// The raw value is kept as a string so that a malformed page number falls
/// back to the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// 1-indexed page number (missing, unparsable or < 1 becomes 1)
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1)
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page())
    }
}

/// A resolved page of a fixed-size listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
}

/// Highest page whose offset still fits in an `i64`
const MAX_PAGE: i64 = i64::MAX / ROW_PER_PAGE;

impl PageRequest {
    pub fn new(page: i64) -> Self {
        Self {
            page: page.clamp(1, MAX_PAGE),
        }
    }

    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit()
    }

    pub fn limit(&self) -> i64 {
        ROW_PER_PAGE
    }
}

/// One page of rows together with what a view needs to draw page links
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub max_row: i64,
    pub page_count: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        let max_row = request.limit();
        Self {
            items,
            total,
            page: request.page,
            max_row,
            page_count: page_count(total, max_row),
        }
    }
}

// =============================================================================
// FORMS
// =============================================================================

/// Body of a POST that carries nothing but the CSRF token
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenForm {
    #[serde(default, rename = "_token")]
    pub token: String,
}

fn page_count(total: i64, max_row: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + max_row - 1) / max_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(String::from),
        }
    }

    #[test]
    fn test_page_defaults_to_first() {
        assert_eq!(query(None).page(), 1);
        assert_eq!(query(Some("")).page(), 1);
        assert_eq!(query(Some("abc")).page(), 1);
        assert_eq!(query(Some("0")).page(), 1);
        assert_eq!(query(Some("-4")).page(), 1);
        assert_eq!(query(Some(" 3 ")).page(), 3);
    }

    #[test]
    fn test_offset_selects_window() {
        assert_eq!(PageRequest::new(1).offset(), 0);
        assert_eq!(PageRequest::new(2).offset(), ROW_PER_PAGE);
        assert_eq!(PageRequest::new(5).offset(), 4 * ROW_PER_PAGE);
        assert_eq!(PageRequest::new(3).limit(), ROW_PER_PAGE);
    }

    #[test]
    fn test_huge_page_number_is_clamped() {
        let request = query(Some("9223372036854775807")).request();
        assert_eq!(request.page, MAX_PAGE);
        assert_eq!(request.offset(), (MAX_PAGE - 1) * ROW_PER_PAGE);
        assert!(request.offset() >= 0);

        assert_eq!(PageRequest::new(i64::MIN).offset(), 0);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 15), 0);
        assert_eq!(page_count(1, 15), 1);
        assert_eq!(page_count(15, 15), 1);
        assert_eq!(page_count(16, 15), 2);
        assert_eq!(page_count(45, 15), 3);
    }

    #[test]
    fn test_paginated_carries_request() {
        let page = Paginated::new(vec![1, 2, 3], 33, PageRequest::new(3));
        assert_eq!(page.page, 3);
        assert_eq!(page.total, 33);
        assert_eq!(page.max_row, ROW_PER_PAGE);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items.len(), 3);
    }
}
