//! List pagination
//!
//! All list endpoints return the same envelope:
//! `{count, next, previous, results}` where `next`/`previous` are
//! request-relative links preserving the other query parameters.

use serde::Serialize;
use std::collections::HashMap;

use crate::api::error::{ApiError, ApiResult};

/// Paginated list envelope
#[derive(Debug, Serialize)]
pub struct Page<T> {
    /// Total number of matching entities
    pub count: u64,
    /// Link to the next page, if any
    pub next: Option<String>,
    /// Link to the previous page, if any
    pub previous: Option<String>,
    /// The entities on this page
    pub results: Vec<T>,
}

/// Validated page/page_size pair extracted from query parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    /// Read `page` and `page_size` from the query parameters
    ///
    /// Invalid numbers are a 400 keyed on the offending parameter; the page
    /// size is clamped to the configured maximum.
    pub fn from_params(
        params: &HashMap<String, String>,
        default_size: u32,
        max_size: u32,
    ) -> ApiResult<Self> {
        let page = match params.get("page") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| ApiError::validation("page", "Invalid page number."))?,
            None => 1,
        };

        let page_size = match params.get("page_size") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|s| *s >= 1)
                .ok_or_else(|| ApiError::validation("page_size", "Invalid page size."))?
                .min(max_size),
            None => default_size,
        };

        Ok(Self { page, page_size })
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u32 {
        // Saturate so absurd page numbers cannot overflow
        (u64::from(self.page - 1) * u64::from(self.page_size)).min(u64::from(u32::MAX)) as u32
    }

    /// Wrap one page of results into the envelope with navigation links
    pub fn paginate<T>(
        &self,
        path: &str,
        params: &HashMap<String, String>,
        count: u64,
        results: Vec<T>,
    ) -> Page<T> {
        let next = if u64::from(self.offset()) + u64::from(self.page_size) < count {
            Some(page_link(path, params, self.page + 1))
        } else {
            None
        };
        let previous = if self.page > 1 {
            Some(page_link(path, params, self.page - 1))
        } else {
            None
        };

        Page {
            count,
            next,
            previous,
            results,
        }
    }
}

/// Build a request-relative link to another page, preserving the other
/// query parameters
fn page_link(path: &str, params: &HashMap<String, String>, page: u32) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter(|(k, _)| k.as_str() != "page")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    pairs.sort();
    pairs.push(("page".to_string(), page.to_string()));

    let query: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();

    format!("{}?{}", path, query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let p = Pagination::from_params(&params(&[]), 10, 100).unwrap();
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_page_size_clamped() {
        let p = Pagination::from_params(&params(&[("page_size", "5000")]), 10, 100).unwrap();
        assert_eq!(p.page_size, 100);
    }

    #[test]
    fn test_invalid_page_rejected() {
        let err = Pagination::from_params(&params(&[("page", "zero")]), 10, 100).unwrap_err();
        assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "page"));

        let err = Pagination::from_params(&params(&[("page", "0")]), 10, 100).unwrap_err();
        assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "page"));
    }

    #[test]
    fn test_envelope_links() {
        let p = Pagination { page: 2, page_size: 10 };
        let page = p.paginate(
            "/quotes",
            &params(&[("page", "2"), ("search", "life")]),
            25,
            vec![(); 10],
        );

        assert_eq!(page.count, 25);
        assert_eq!(page.next.as_deref(), Some("/quotes?search=life&page=3"));
        assert_eq!(page.previous.as_deref(), Some("/quotes?search=life&page=1"));
    }

    #[test]
    fn test_single_page_has_no_links() {
        let p = Pagination { page: 1, page_size: 10 };
        let page = p.paginate("/tags", &params(&[]), 3, vec![(); 3]);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let p = Pagination { page: 3, page_size: 10 };
        let page = p.paginate("/quotes", &params(&[("page", "3")]), 25, vec![(); 5]);
        assert!(page.next.is_none());
        assert_eq!(page.previous.as_deref(), Some("/quotes?page=2"));
    }
}
