//! Unified error types for list-sync.
//!
//! Two taxonomies exist: [`ConfigError`] for invalid screen configuration
//! (caught once, at construction) and [`FetchError`] for failures reported by
//! the backend query collaborator. Malformed events and stale fetch responses
//! are not errors: both are silently dropped.

use thiserror::Error;

/// Failure reported by the external list-query collaborator.
///
/// The coordinator never retries; a failed fetch leaves the screen in its
/// last-good state until the user triggers a refresh.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchError {
    /// The backend answered with an application-level failure.
    #[error("backend rejected list query: {message} (status {status})")]
    Backend {
        /// Status code as reported by the collaborator.
        status: u16,
        /// Human-readable failure message.
        message: String,
    },

    /// The request never produced a usable response.
    #[error("network failure during list query: {0}")]
    Network(String),

    /// The response arrived but could not be decoded into a result page.
    #[error("malformed list response: {0}")]
    Decode(String),
}

/// Invalid per-screen configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The default sort key is not in the sortable whitelist.
    #[error("default sort key '{0}' is not in the sortable whitelist")]
    DefaultSortNotSortable(String),

    /// The default sort key is empty.
    #[error("default sort key must not be empty")]
    EmptyDefaultSort,

    /// Page size of zero can never produce a page.
    #[error("default limit must be at least 1")]
    ZeroLimit,

    /// Two column bindings name the same table column.
    #[error("duplicate column binding for column '{0}'")]
    DuplicateColumn(String),

    /// A column binding references a sort key outside the whitelist.
    #[error("column '{column}' is bound to non-sortable key '{sort_key}'")]
    UnsortableBinding {
        /// Table column key.
        column: String,
        /// Offending sort key.
        sort_key: String,
    },
}
