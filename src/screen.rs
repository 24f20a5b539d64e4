//! Declarative per-screen configuration.
//!
//! Every list screen supplies one [`ScreenConfig`] describing its default
//! sort, its sortable-field and filter-key whitelists, and the binding
//! between backend sort keys and table column keys. The coordinator consults
//! this config for every event; nothing is inferred from role flags or
//! per-screen switch statements.

use crate::error::ConfigError;
use crate::sort::SortDescriptor;
use serde::Deserialize;
use std::collections::HashSet;

/// How successive result pages combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Each page replaces the previous one.
    #[default]
    Paged,
    /// Pages past the first append; a short page means no more data.
    InfiniteScroll,
}

/// Binding from a backend sort key to a table column key.
///
/// Screens whose table columns are named differently from the backend sort
/// fields declare the mapping here once, instead of switch statements at
/// every render site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnBinding {
    /// Backend sort field.
    pub sort_key: String,
    /// Table widget column key.
    pub column: String,
}

impl ColumnBinding {
    /// Create a binding.
    pub fn new(sort_key: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            sort_key: sort_key.into(),
            column: column.into(),
        }
    }
}

/// Static configuration for one list screen.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenConfig {
    /// Sort applied at screen mount.
    pub default_sort: SortDescriptor,
    /// Page size applied at screen mount.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Whitelist of sortable backend fields.
    pub sortable: Vec<String>,
    /// Whitelist of accepted filter keys. Filter events carrying other keys
    /// have those keys dropped.
    #[serde(default)]
    pub filters: Vec<String>,
    /// Sort-key to column-key bindings for the table header indicator.
    #[serde(default)]
    pub columns: Vec<ColumnBinding>,
    /// Replace or append on page advance.
    #[serde(default)]
    pub pagination: PaginationMode,
    /// Auto-select the first row of a freshly reset list.
    #[serde(default)]
    pub auto_select_first: bool,
}

fn default_limit() -> u32 {
    10
}

impl ScreenConfig {
    /// Minimal config: a default sort plus the sortable whitelist.
    pub fn new(default_sort: SortDescriptor, sortable: Vec<String>) -> Self {
        Self {
            default_sort,
            default_limit: default_limit(),
            sortable,
            filters: Vec::new(),
            columns: Vec::new(),
            pagination: PaginationMode::Paged,
            auto_select_first: false,
        }
    }

    /// Set the initial page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the filter-key whitelist.
    #[must_use]
    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }

    /// Set the sort-key to column bindings.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<ColumnBinding>) -> Self {
        self.columns = columns;
        self
    }

    /// Switch to infinite-scroll accumulation.
    #[must_use]
    pub fn infinite_scroll(mut self) -> Self {
        self.pagination = PaginationMode::InfiniteScroll;
        self
    }

    /// Enable first-row auto-selection on reset.
    #[must_use]
    pub fn with_auto_select(mut self) -> Self {
        self.auto_select_first = true;
        self
    }

    /// Validate the configuration.
    ///
    /// Checked once at coordinator construction so every later event can
    /// trust the whitelists and bindings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_sort.key.is_empty() {
            return Err(ConfigError::EmptyDefaultSort);
        }
        if !self.is_sortable(&self.default_sort.key) {
            return Err(ConfigError::DefaultSortNotSortable(
                self.default_sort.key.clone(),
            ));
        }
        if self.default_limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        let mut seen = HashSet::new();
        for binding in &self.columns {
            if !seen.insert(binding.column.as_str()) {
                return Err(ConfigError::DuplicateColumn(binding.column.clone()));
            }
            if !self.is_sortable(&binding.sort_key) {
                return Err(ConfigError::UnsortableBinding {
                    column: binding.column.clone(),
                    sort_key: binding.sort_key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Whether a backend field may be sorted on.
    #[must_use]
    pub fn is_sortable(&self, key: &str) -> bool {
        self.sortable.iter().any(|k| k == key)
    }

    /// Whether a filter key is accepted by this screen.
    #[must_use]
    pub fn accepts_filter(&self, key: &str) -> bool {
        self.filters.iter().any(|k| k == key)
    }

    /// The column bound to a sort key, if any.
    #[must_use]
    pub fn column_for(&self, sort_key: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|b| b.sort_key == sort_key)
            .map(|b| b.column.as_str())
    }

    /// The sort key bound to a column, if any.
    #[must_use]
    pub fn sort_key_for(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|b| b.column == column)
            .map(|b| b.sort_key.as_str())
    }
}
