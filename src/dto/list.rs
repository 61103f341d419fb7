//! Wire shapes for list endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pagination::PageResult;
use crate::query::{ListQuery, SortDir};

/// Raw listing parameters as they arrive from a caller. Everything is
/// optional; the planner supplies defaults and ignores what it cannot use.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
    pub search: Option<String>,
    #[serde(default)]
    pub filters: HashMap<String, Value>,
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        ListQuery {
            page: params.page.unwrap_or(1),
            per_page: params.per_page,
            sort_by: params.sort_by,
            sort_dir: params.sort_dir.unwrap_or_default(),
            search: params.search,
            filters: params.filters,
        }
    }
}

/// Serialized page of results.
#[derive(Clone, Debug, Serialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub last_page: usize,
}

impl<T> From<PageResult<T>> for PageEnvelope<T> {
    fn from(page: PageResult<T>) -> Self {
        Self {
            data: page.items,
            current_page: page.page,
            per_page: page.per_page,
            total: page.total,
            last_page: page.last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_to_first_page() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        let query = ListQuery::from(params);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, None);
        assert_eq!(query.sort_dir, SortDir::Asc);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn params_carry_filters_through() {
        let raw = r#"{
            "page": 3,
            "sort_by": "name",
            "sort_dir": "desc",
            "search": "corp",
            "filters": {"client_type": ["company"]}
        }"#;
        let params: ListParams = serde_json::from_str(raw).unwrap();
        let query = ListQuery::from(params);
        assert_eq!(query.page, 3);
        assert_eq!(query.sort_by.as_deref(), Some("name"));
        assert_eq!(query.sort_dir, SortDir::Desc);
        assert_eq!(query.search.as_deref(), Some("corp"));
        assert_eq!(
            query.filters.get("client_type"),
            Some(&serde_json::json!(["company"]))
        );
    }

    #[test]
    fn envelope_mirrors_page_result() {
        let page = PageResult::new(vec![1, 2, 3], 2, 3, 7);
        let envelope = PageEnvelope::from(page);
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert_eq!(envelope.current_page, 2);
        assert_eq!(envelope.last_page, 3);
    }
}
