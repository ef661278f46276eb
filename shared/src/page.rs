//! Pagination envelope

use serde::{Deserialize, Serialize};

/// One page of query results
///
/// `total` is the count of rows matching the filters, not the page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub total: i64,
    pub records: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn new(total: i64, records: Vec<T>) -> Self {
        Self { total, records }
    }

    /// An empty page
    pub fn empty() -> Self {
        Self {
            total: 0,
            records: Vec::new(),
        }
    }
}

/// Normalize raw page parameters into (limit, offset)
///
/// Page numbers are 1-based; out-of-range values are clamped
/// (page >= 1, 1 <= page_size <= 100).
pub fn to_limit_offset(page: Option<i64>, page_size: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(10).clamp(1, 100);
    (page_size, (page - 1) * page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(to_limit_offset(None, None), (10, 0));
    }

    #[test]
    fn test_second_page() {
        assert_eq!(to_limit_offset(Some(2), Some(20)), (20, 20));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(to_limit_offset(Some(0), Some(0)), (1, 0));
        assert_eq!(to_limit_offset(Some(-3), Some(1000)), (100, 0));
    }

    #[test]
    fn test_serialize() {
        let page = PageResult::new(3, vec!["a", "b"]);
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"total":3,"records":["a","b"]}"#);
    }
}
