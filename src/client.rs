//! Collaborator traits and the screen driver.
//!
//! The backend endpoint and the error toaster are external collaborators,
//! specified only at the trait boundary: [`ListQuery`] answers a serialized
//! [`QueryCondition`] with a [`ResultPage`], [`ErrorSink`] surfaces a
//! [`FetchError`] to the user. [`ListScreen`] wires a coordinator, its fetch
//! state, and those collaborators into the surface a screen actually uses:
//! `dispatch` in, `complete` back, read accessors for rendering.

use crate::condition::{FilterMap, QueryCondition};
use crate::coordinator::ListCoordinator;
use crate::error::{ConfigError, FetchError};
use crate::event::ListEvent;
use crate::fetch::{Completion, FetchState, FetchTicket, ResultPage};
use crate::screen::ScreenConfig;
use tracing::debug;

/// The backend list endpoint for one resource type.
pub trait ListQuery {
    /// Row type returned by this endpoint.
    type Row;

    /// Fetch one page for the given condition.
    fn query(&mut self, condition: &QueryCondition) -> Result<ResultPage<Self::Row>, FetchError>;
}

/// Formats and surfaces a fetch failure to the user.
pub trait ErrorSink {
    /// Surface one failure.
    fn notify(&mut self, error: &FetchError);
}

/// Sink that swallows every error. Useful for tests and headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn notify(&mut self, _error: &FetchError) {}
}

/// One list screen: a coordinator plus its displayed rows and liveness.
///
/// The screen owns its query condition and indicators exclusively; nothing is
/// shared across screens. After [`close`](Self::close) every pending callback
/// becomes a no-op, so a fetch resolving after teardown can never touch dead
/// state.
#[derive(Debug)]
pub struct ListScreen<R> {
    coordinator: ListCoordinator,
    results: FetchState<R>,
    live: bool,
}

impl<R> ListScreen<R> {
    /// Mount a screen from its config and default filters.
    pub fn new(config: ScreenConfig, default_filters: FilterMap) -> Result<Self, ConfigError> {
        let results = FetchState::new(config.pagination, config.auto_select_first);
        let coordinator = ListCoordinator::new(config, default_filters)?;
        Ok(Self {
            coordinator,
            results,
            live: true,
        })
    }

    /// The coordinator, for indicator and condition reads.
    #[must_use]
    pub fn coordinator(&self) -> &ListCoordinator {
        &self.coordinator
    }

    /// The displayed rows and their derived flags.
    #[must_use]
    pub fn results(&self) -> &FetchState<R> {
        &self.results
    }

    /// Mutable access to the displayed list, for selection moves.
    pub fn results_mut(&mut self) -> &mut FetchState<R> {
        &mut self.results
    }

    /// The current query condition.
    #[must_use]
    pub fn condition(&self) -> &QueryCondition {
        self.coordinator.condition()
    }

    /// Whether the screen is still mounted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Reconcile one event. Returns the ticket for the fetch the event
    /// triggered, or `None` for no-ops (and for anything after teardown).
    pub fn dispatch(&mut self, event: &ListEvent) -> Option<FetchTicket> {
        if !self.live {
            debug!("dropping event dispatched after screen teardown");
            return None;
        }
        let ticket = self.coordinator.dispatch(event)?;
        self.results.begin();
        Some(ticket)
    }

    /// Hand a finished fetch back to the screen.
    ///
    /// Stale tickets (superseded by a later dispatch) are discarded silently;
    /// only the latest ticket may commit rows or clear the loading flag.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ResultPage<R>, FetchError>,
    ) -> Completion {
        if !self.live {
            return Completion::Closed;
        }
        if !self.coordinator.settle(ticket.generation()) {
            debug!(
                generation = ticket.generation(),
                current = self.coordinator.generation(),
                "discarding stale fetch response"
            );
            return Completion::Stale;
        }
        match outcome {
            Ok(page) => {
                self.results.commit(ticket, page);
                Completion::Committed
            }
            Err(error) => {
                self.results.fail(ticket, &error);
                Completion::Failed(error)
            }
        }
    }

    /// Dispatch an event and resolve its fetch immediately against a blocking
    /// collaborator, routing failures to the sink.
    ///
    /// Returns whether a fetch ran at all. Screens juggling overlapping
    /// in-flight requests should use [`dispatch`](Self::dispatch) and
    /// [`complete`](Self::complete) directly instead.
    pub fn run<Q, S>(&mut self, event: &ListEvent, client: &mut Q, sink: &mut S) -> bool
    where
        Q: ListQuery<Row = R>,
        S: ErrorSink,
    {
        let Some(ticket) = self.dispatch(event) else {
            return false;
        };
        let outcome = client.query(ticket.condition());
        if let Completion::Failed(error) = self.complete(&ticket, outcome) {
            sink.notify(&error);
        }
        true
    }

    /// Tear the screen down. Every later dispatch and completion is a no-op.
    pub fn close(&mut self) {
        self.live = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDescriptor;

    struct StaticRows(Vec<&'static str>);

    impl ListQuery for StaticRows {
        type Row = &'static str;

        fn query(
            &mut self,
            condition: &QueryCondition,
        ) -> Result<ResultPage<&'static str>, FetchError> {
            let total = self.0.len() as u64;
            let start = ((condition.offset - 1) * condition.limit) as usize;
            let page = self
                .0
                .iter()
                .skip(start)
                .take(condition.limit as usize)
                .copied()
                .collect();
            Ok(ResultPage::new(page, total))
        }
    }

    struct CountingSink(usize);

    impl ErrorSink for CountingSink {
        fn notify(&mut self, _error: &FetchError) {
            self.0 += 1;
        }
    }

    fn screen() -> ListScreen<&'static str> {
        let config = ScreenConfig::new(
            SortDescriptor::descending("updated_at"),
            vec!["updated_at".into()],
        )
        .with_limit(2);
        ListScreen::new(config, FilterMap::new()).unwrap()
    }

    #[test]
    fn test_run_fetches_through_collaborator() {
        let mut screen = screen();
        let mut client = StaticRows(vec!["a", "b", "c"]);
        let mut sink = CountingSink(0);

        assert!(screen.run(&ListEvent::Refresh, &mut client, &mut sink));
        assert_eq!(screen.results().rows(), &["a", "b"]);
        assert_eq!(screen.results().total(), 3);
        assert_eq!(sink.0, 0);

        assert!(screen.run(
            &ListEvent::PageChange { offset: 2, limit: 2 },
            &mut client,
            &mut sink
        ));
        assert_eq!(screen.results().rows(), &["c"]);
    }

    #[test]
    fn test_run_routes_failures_to_sink() {
        struct Failing;
        impl ListQuery for Failing {
            type Row = &'static str;
            fn query(
                &mut self,
                _condition: &QueryCondition,
            ) -> Result<ResultPage<&'static str>, FetchError> {
                Err(FetchError::Backend {
                    status: 500,
                    message: "boom".into(),
                })
            }
        }

        let mut screen = screen();
        let mut sink = CountingSink(0);
        let mut client = StaticRows(vec!["a", "b"]);
        screen.run(&ListEvent::Refresh, &mut client, &mut sink);

        assert!(screen.run(&ListEvent::Refresh, &mut Failing, &mut sink));
        assert_eq!(sink.0, 1);
        // Previous rows survive the failure
        assert_eq!(screen.results().rows(), &["a", "b"]);
    }

    #[test]
    fn test_noop_event_runs_no_fetch() {
        let mut screen = screen();
        let mut client = StaticRows(vec!["a"]);
        let mut sink = NullSink;

        assert!(screen.run(&ListEvent::SearchInput("x".into()), &mut client, &mut sink));
        assert!(!screen.run(&ListEvent::SearchInput("x".into()), &mut client, &mut sink));
    }

    #[test]
    fn test_completion_after_close_is_noop() {
        let mut screen = screen();
        let ticket = screen.dispatch(&ListEvent::Refresh).unwrap();
        screen.close();

        let completion = screen.complete(&ticket, Ok(ResultPage::new(vec!["late"], 1)));
        assert!(matches!(completion, Completion::Closed));
        assert!(screen.results().rows().is_empty());
        assert!(screen.dispatch(&ListEvent::Refresh).is_none());
    }
}
