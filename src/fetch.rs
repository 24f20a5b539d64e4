//! The fetch cycle: tickets, result pages, and displayed-list state.
//!
//! Every fetch-triggering dispatch produces a [`FetchTicket`] stamped with a
//! monotonically increasing generation. The screen performs the actual
//! request however it likes (the crate is I/O-free) and hands the ticket back
//! with the outcome. A ticket whose generation is no longer the latest is
//! discarded without touching the displayed rows: last-request-wins, not
//! last-response-wins. Requests are never aborted; superseded ones simply
//! complete into the void.

use crate::condition::QueryCondition;
use crate::error::FetchError;
use crate::screen::PaginationMode;
use tracing::debug;

/// Authorization for one fetch, stamped with the generation of the dispatch
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    condition: QueryCondition,
}

impl FetchTicket {
    pub(crate) fn new(generation: u64, condition: QueryCondition) -> Self {
        Self {
            generation,
            condition,
        }
    }

    /// Generation of the dispatch that issued this ticket.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The condition this fetch was issued for.
    #[must_use]
    pub fn condition(&self) -> &QueryCondition {
        &self.condition
    }
}

/// One page of backend results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<R> {
    /// Rows in this page.
    pub entries: Vec<R>,
    /// Total matching rows across all pages.
    pub total: u64,
}

impl<R> ResultPage<R> {
    /// Build a page.
    pub fn new(entries: Vec<R>, total: u64) -> Self {
        Self { entries, total }
    }
}

/// Outcome of handing a completed fetch back to the screen.
#[derive(Debug)]
#[must_use]
pub enum Completion {
    /// The page was committed to the displayed list.
    Committed,
    /// The ticket was superseded by a later dispatch; nothing changed.
    Stale,
    /// The backend failed; previous rows were retained. The error should be
    /// surfaced through the screen's notifier.
    Failed(FetchError),
    /// The screen was torn down before the fetch resolved; nothing changed.
    Closed,
}

impl Completion {
    /// Whether the page landed in the displayed list.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

/// The displayed list: rows plus the flags derived from the fetch cycle.
#[derive(Debug, Clone)]
pub struct FetchState<R> {
    rows: Vec<R>,
    total: u64,
    loading: bool,
    no_more: bool,
    selected: Option<usize>,
    mode: PaginationMode,
    auto_select_first: bool,
}

impl<R> FetchState<R> {
    /// Empty state for the given pagination mode.
    #[must_use]
    pub fn new(mode: PaginationMode, auto_select_first: bool) -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            loading: false,
            no_more: false,
            selected: None,
            mode,
            auto_select_first,
        }
    }

    /// Currently displayed rows.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Backend-reported total across all pages.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether the latest fetch is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Infinite scroll: whether the last page came back short.
    #[must_use]
    pub fn no_more(&self) -> bool {
        self.no_more
    }

    /// Index of the selected row, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row itself, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&R> {
        self.selected.and_then(|idx| self.rows.get(idx))
    }

    /// Select a row by index. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|idx| *idx < self.rows.len());
    }

    /// Mark a fetch as outstanding. Called once per issued ticket.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Commit a successful page for a still-current ticket.
    ///
    /// Paged mode replaces the rows; infinite scroll appends for pages past
    /// the first and replaces on a reset to page 1.
    pub fn commit(&mut self, ticket: &FetchTicket, page: ResultPage<R>) {
        self.loading = false;
        self.total = page.total;

        let fresh = ticket.condition().offset == 1;
        let short_page = (page.entries.len() as u64) < u64::from(ticket.condition().limit);
        let replace = match self.mode {
            PaginationMode::Paged => true,
            PaginationMode::InfiniteScroll => fresh,
        };

        if replace {
            self.rows = page.entries;
            if self.selected.is_some_and(|idx| idx >= self.rows.len()) {
                self.selected = None;
            }
        } else {
            self.rows.extend(page.entries);
        }

        if self.mode == PaginationMode::InfiniteScroll {
            self.no_more = short_page;
        }

        // Auto-selection applies only to a freshly reset list; appends and
        // later pages never move an existing selection.
        if self.auto_select_first && fresh && self.selected.is_none() && !self.rows.is_empty() {
            self.selected = Some(0);
        }
    }

    /// Record a failed fetch for a still-current ticket. Previous rows are
    /// retained; an error never blanks a populated list.
    pub fn fail(&mut self, ticket: &FetchTicket, error: &FetchError) {
        debug!(
            generation = ticket.generation(),
            %error,
            "list fetch failed, keeping previous page"
        );
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{FilterMap, QueryCondition};
    use crate::sort::SortDescriptor;

    fn ticket(generation: u64, offset: u32, limit: u32) -> FetchTicket {
        let mut condition = QueryCondition::initial(
            &SortDescriptor::descending("updated_at"),
            limit,
            FilterMap::new(),
        );
        condition.offset = offset;
        FetchTicket::new(generation, condition)
    }

    fn rows(n: usize) -> Vec<u32> {
        (0..n as u32).collect()
    }

    #[test]
    fn test_paged_commit_replaces() {
        let mut state = FetchState::new(PaginationMode::Paged, false);
        state.begin();
        state.commit(&ticket(1, 1, 10), ResultPage::new(rows(10), 42));
        assert_eq!(state.rows().len(), 10);
        assert_eq!(state.total(), 42);
        assert!(!state.is_loading());

        state.begin();
        state.commit(&ticket(2, 2, 10), ResultPage::new(rows(7), 42));
        assert_eq!(state.rows().len(), 7);
    }

    #[test]
    fn test_infinite_scroll_appends_and_flags_no_more() {
        let mut state = FetchState::new(PaginationMode::InfiniteScroll, false);
        state.begin();
        state.commit(&ticket(1, 1, 10), ResultPage::new(rows(10), 14));
        assert_eq!(state.rows().len(), 10);
        assert!(!state.no_more());

        state.begin();
        state.commit(&ticket(2, 2, 10), ResultPage::new(rows(4), 14));
        assert_eq!(state.rows().len(), 14);
        assert!(state.no_more());

        // Reset to page 1 replaces, not appends
        state.begin();
        state.commit(&ticket(3, 1, 10), ResultPage::new(rows(10), 30));
        assert_eq!(state.rows().len(), 10);
        assert!(!state.no_more());
    }

    #[test]
    fn test_failure_retains_previous_rows() {
        let mut state = FetchState::new(PaginationMode::Paged, false);
        state.begin();
        state.commit(&ticket(1, 1, 10), ResultPage::new(rows(5), 5));

        state.begin();
        state.fail(
            &ticket(2, 1, 10),
            &FetchError::Network("connection reset".into()),
        );
        assert_eq!(state.rows().len(), 5);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_auto_select_first_on_fresh_commit_only() {
        let mut state = FetchState::new(PaginationMode::InfiniteScroll, true);
        state.begin();
        state.commit(&ticket(1, 1, 10), ResultPage::new(rows(10), 20));
        assert_eq!(state.selected(), Some(0));

        // Appends keep the user's selection
        state.select(Some(3));
        state.begin();
        state.commit(&ticket(2, 2, 10), ResultPage::new(rows(10), 20));
        assert_eq!(state.selected(), Some(3));
    }

    #[test]
    fn test_auto_select_respects_existing_selection() {
        let mut state = FetchState::new(PaginationMode::Paged, true);
        state.begin();
        state.commit(&ticket(1, 1, 10), ResultPage::new(rows(10), 20));
        state.select(Some(4));

        state.begin();
        state.commit(&ticket(2, 1, 10), ResultPage::new(rows(10), 20));
        assert_eq!(state.selected(), Some(4));
    }

    #[test]
    fn test_replace_drops_out_of_range_selection() {
        let mut state = FetchState::new(PaginationMode::Paged, false);
        state.begin();
        state.commit(&ticket(1, 1, 10), ResultPage::new(rows(10), 10));
        state.select(Some(9));

        state.begin();
        state.commit(&ticket(2, 1, 10), ResultPage::new(rows(3), 3));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_empty_fresh_page_selects_nothing() {
        let mut state = FetchState::new(PaginationMode::Paged, true);
        state.begin();
        state.commit(&ticket(1, 1, 10), ResultPage::new(Vec::<u32>::new(), 0));
        assert_eq!(state.selected(), None);
        assert!(state.selected_row().is_none());
    }
}
