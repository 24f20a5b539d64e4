//! **Sort, filter, and pagination state coordination for list screens.**
//!
//! `list-sync` is the list-query state coordinator that admin-console screens
//! otherwise reimplement once per list: it keeps three representations of the
//! current sort order (an external dropdown menu, a table's clickable column
//! headers, and the serialized query sent to the backend) mutually
//! consistent, while tracking pagination, search keywords, screen-specific
//! filters, and in-flight fetch staleness.
//!
//! The crate is headless and I/O-free. Screens feed it
//! [`ListEvent`]s; it answers with generation-stamped [`FetchTicket`]s and
//! keeps the two visual sort indicators synchronized atomically within each
//! dispatch. The actual network call lives behind the [`ListQuery`]
//! collaborator trait, and failure toasts behind [`ErrorSink`].
//!
//! ## Core guarantees
//!
//! - **Indicator consistency**: after every dispatch, the menu highlight and
//!   the table header arrow decode to the same sort descriptor, before any
//!   fetch resolves.
//! - **Offset reset law**: changing the keyword, a filter, the page size, or
//!   the sort snaps the list back to page 1; only pager events may land
//!   elsewhere.
//! - **Last-request-wins**: a fetch response whose ticket has been superseded
//!   by a later dispatch is discarded silently, so a slow stale request can
//!   never overwrite newer data.
//! - **No-op suppression**: events whose semantic content matches current
//!   state (same keyword, same sort, unknown column) trigger no state change
//!   and no fetch.
//!
//! ## Getting started
//!
//! ```
//! use list_sync::{
//!     ColumnBinding, FilterMap, ListEvent, ListScreen, ScreenConfig, SortDescriptor,
//! };
//!
//! let config = ScreenConfig::new(
//!     SortDescriptor::descending("updated_at"),
//!     vec!["updated_at".into(), "name".into()],
//! )
//! .with_columns(vec![ColumnBinding::new("name", "displayName")]);
//!
//! let mut screen: ListScreen<serde_json::Value> =
//!     ListScreen::new(config, FilterMap::new()).unwrap();
//!
//! // A sort picked from the dropdown updates the condition, both indicators,
//! // and issues a ticket for the fetch.
//! let ticket = screen
//!     .dispatch(&ListEvent::MenuSort(SortDescriptor::ascending("name")))
//!     .expect("sort change triggers a fetch");
//! assert_eq!(ticket.condition().sort, "name");
//! assert_eq!(ticket.condition().offset, 1);
//! ```

#![allow(
    // Reducer matches over event unions are long but linear
    clippy::too_many_lines,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod adapters;
pub mod client;
pub mod condition;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod fetch;
pub mod screen;
pub mod sort;

// Re-export main types for convenience
pub use adapters::{header_indicator, menu_indicator, HeaderIndicator, MenuIndicator};
pub use client::{ErrorSink, ListQuery, ListScreen, NullSink};
pub use condition::{FilterMap, QueryCondition};
pub use coordinator::{ListCoordinator, Reconciled};
pub use error::{ConfigError, FetchError};
pub use event::ListEvent;
pub use fetch::{Completion, FetchState, FetchTicket, ResultPage};
pub use screen::{ColumnBinding, PaginationMode, ScreenConfig};
pub use sort::{SortDescriptor, SortDirection};
