//! Reconciliation events: the discrete inputs the coordinator consumes.
//!
//! Each user or system action that may change sort, filter, keyword, or page
//! arrives as exactly one [`ListEvent`]. The coordinator processes events
//! strictly in arrival order and never inspects two channels' widget state to
//! resolve ambiguity; the most recent event wins outright.

use crate::condition::FilterMap;
use crate::sort::{SortDescriptor, SortDirection};

/// One discrete input to the list state coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// The external sort dropdown picked a descriptor. The menu is
    /// authoritative: the table header arrows are re-derived from it.
    MenuSort(SortDescriptor),
    /// A table column header was clicked. `order` is the widget's requested
    /// direction; `None` means the widget cycled past its last state and
    /// asked to "clear" the column, which triggers the fallback rule
    /// (previous key, inverted direction).
    HeaderClick {
        /// Column key in the table widget's vocabulary.
        column: String,
        /// Requested direction, absent on a clear-click.
        order: Option<SortDirection>,
    },
    /// A partial filter update from the filter form. A `Value::Null` entry
    /// removes that filter key.
    FilterChange(FilterMap),
    /// The search box submitted a keyword. An empty string clears the
    /// keyword.
    SearchInput(String),
    /// The pager moved. The only event permitted to land on a page other
    /// than 1.
    PageChange {
        /// Requested 1-based page number.
        offset: u32,
        /// Requested page size.
        limit: u32,
    },
    /// Manual reload: refetch with the current condition unchanged.
    Refresh,
}

impl ListEvent {
    /// Convenience constructor for a header click carrying a direction.
    pub fn header(column: impl Into<String>, order: SortDirection) -> Self {
        Self::HeaderClick {
            column: column.into(),
            order: Some(order),
        }
    }

    /// Convenience constructor for a clear-click on a header.
    pub fn header_cleared(column: impl Into<String>) -> Self {
        Self::HeaderClick {
            column: column.into(),
            order: None,
        }
    }

    /// Convenience constructor for a single-key filter change.
    pub fn filter(key: impl Into<String>, value: serde_json::Value) -> Self {
        let mut map = FilterMap::new();
        map.insert(key.into(), value);
        Self::FilterChange(map)
    }
}
