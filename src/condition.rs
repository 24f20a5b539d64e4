//! The query condition: the full parameter set sent to a list endpoint.
//!
//! One [`QueryCondition`] per screen, owned exclusively by the coordinator.
//! The fetch cycle only ever reads it. `sort`/`direction` always mirror the
//! active [`SortDescriptor`](crate::sort::SortDescriptor); `offset` is a
//! 1-based page number and snaps back to 1 whenever the keyword, a filter,
//! the limit, or the sort changes.

use crate::sort::{SortDescriptor, SortDirection};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Ordered filter map. Insertion order is preserved so serialized conditions
/// are deterministic across fetches.
pub type FilterMap = IndexMap<String, Value>;

/// The full parameter set for one list fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryCondition {
    /// Free-text search keyword. Omitted from the wire when absent; an empty
    /// search box is represented as `None`, never `Some("")`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// 1-based page number.
    pub offset: u32,
    /// Page size, at least 1.
    pub limit: u32,
    /// Active sort field; mirrors the current sort descriptor.
    pub sort: String,
    /// Active sort direction; mirrors the current sort descriptor.
    pub direction: SortDirection,
    /// Screen-specific filters, flattened into the request.
    #[serde(flatten)]
    pub filters: FilterMap,
}

impl QueryCondition {
    /// Build the initial condition for a screen from its defaults.
    #[must_use]
    pub fn initial(default_sort: &SortDescriptor, limit: u32, filters: FilterMap) -> Self {
        Self {
            keyword: None,
            offset: 1,
            limit,
            sort: default_sort.key.clone(),
            direction: default_sort.direction,
            filters,
        }
    }

    /// The condition's sort, viewed as a descriptor.
    #[must_use]
    pub fn descriptor(&self) -> SortDescriptor {
        SortDescriptor::new(self.sort.clone(), self.direction)
    }

    /// Replace the sort wholesale and snap back to the first page.
    #[must_use]
    pub fn with_sort(&self, descriptor: &SortDescriptor) -> Self {
        Self {
            sort: descriptor.key.clone(),
            direction: descriptor.direction,
            offset: 1,
            ..self.clone()
        }
    }

    /// Replace the keyword and snap back to the first page.
    #[must_use]
    pub fn with_keyword(&self, keyword: Option<String>) -> Self {
        Self {
            keyword,
            offset: 1,
            ..self.clone()
        }
    }

    /// Replace the filter map and snap back to the first page.
    #[must_use]
    pub fn with_filters(&self, filters: FilterMap) -> Self {
        Self {
            filters,
            offset: 1,
            ..self.clone()
        }
    }

    /// Move to another page. A limit change invalidates the old page
    /// boundaries, so it forces the offset back to 1 regardless of the
    /// requested offset.
    #[must_use]
    pub fn with_page(&self, offset: u32, limit: u32) -> Self {
        let offset = if limit == self.limit { offset.max(1) } else { 1 };
        Self {
            offset,
            limit: limit.max(1),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> QueryCondition {
        QueryCondition::initial(&SortDescriptor::descending("updated_at"), 10, FilterMap::new())
    }

    #[test]
    fn test_initial_condition() {
        let cond = base();
        assert_eq!(cond.offset, 1);
        assert_eq!(cond.limit, 10);
        assert_eq!(cond.sort, "updated_at");
        assert_eq!(cond.direction, SortDirection::Descending);
        assert!(cond.keyword.is_none());
    }

    #[test]
    fn test_with_sort_resets_offset() {
        let mut cond = base();
        cond.offset = 3;
        let next = cond.with_sort(&SortDescriptor::ascending("name"));
        assert_eq!(next.offset, 1);
        assert_eq!(next.sort, "name");
        assert_eq!(next.direction, SortDirection::Ascending);
        // limit and filters survive
        assert_eq!(next.limit, 10);
    }

    #[test]
    fn test_with_page_keeps_sort() {
        let cond = base();
        let next = cond.with_page(4, 10);
        assert_eq!(next.offset, 4);
        assert_eq!(next.sort, cond.sort);
        assert_eq!(next.keyword, cond.keyword);
    }

    #[test]
    fn test_limit_change_forces_first_page() {
        let mut cond = base();
        cond.offset = 5;
        let next = cond.with_page(5, 20);
        assert_eq!(next.offset, 1);
        assert_eq!(next.limit, 20);
    }

    #[test]
    fn test_wire_form_flattens_filters() {
        let mut cond = base();
        cond.filters.insert("publish_status".into(), json!("published"));
        cond.keyword = Some("sales".into());

        let wire = serde_json::to_value(&cond).unwrap();
        assert_eq!(
            wire,
            json!({
                "keyword": "sales",
                "offset": 1,
                "limit": 10,
                "sort": "updated_at",
                "direction": "desc",
                "publish_status": "published",
            })
        );
    }

    #[test]
    fn test_wire_form_omits_absent_keyword() {
        let wire = serde_json::to_value(base()).unwrap();
        assert!(wire.get("keyword").is_none());
    }
}
