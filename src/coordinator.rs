//! The list state coordinator.
//!
//! [`ListCoordinator`] is the single authority that turns a
//! [`ListEvent`] into a new [`QueryCondition`] and a synchronized pair of
//! visual sort indicators. Reconciliation is synchronous and atomic: both
//! indicators are recomputed from the one new descriptor inside the same
//! `dispatch` call, before any fetch begins, so the dropdown and the table
//! header can never disagree about the active sort, not even transiently
//! while a request is in flight.
//!
//! The reducer itself ([`ListCoordinator::apply`]) is pure: it reads the
//! current state and one event and either produces the complete next state or
//! decides the event is a no-op. `dispatch` commits the result and stamps a
//! [`FetchTicket`] with a fresh generation for the last-request-wins check in
//! the fetch cycle.

use crate::adapters::{header_indicator, menu_indicator, HeaderIndicator, MenuIndicator};
use crate::condition::{FilterMap, QueryCondition};
use crate::error::ConfigError;
use crate::event::ListEvent;
use crate::fetch::FetchTicket;
use crate::screen::ScreenConfig;
use crate::sort::SortDescriptor;
use tracing::{debug, trace};

/// The complete output of one reconciliation step.
///
/// All four projections are computed together from one event so they can be
/// committed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    /// The next query condition.
    pub condition: QueryCondition,
    /// The next active sort descriptor.
    pub descriptor: SortDescriptor,
    /// Table header arrows derived from the descriptor.
    pub header: HeaderIndicator,
    /// Menu highlight derived from the descriptor.
    pub menu: MenuIndicator,
    /// Whether this step replaced the sort descriptor.
    pub sort_changed: bool,
}

/// Reconciles events from the sort menu, the table header, the filter form,
/// the search box, and the pager into one query condition.
#[derive(Debug)]
pub struct ListCoordinator {
    config: ScreenConfig,
    condition: QueryCondition,
    descriptor: SortDescriptor,
    header: HeaderIndicator,
    menu: MenuIndicator,
    /// Stale-indicator flag: the just-applied sort while its fetch is in
    /// flight. UI-only; never read when building a request.
    pending_sort: Option<SortDescriptor>,
    generation: u64,
}

impl ListCoordinator {
    /// Initialize a coordinator from a validated screen config and the
    /// screen's default filters.
    pub fn new(config: ScreenConfig, default_filters: FilterMap) -> Result<Self, ConfigError> {
        config.validate()?;
        let descriptor = config.default_sort.clone();
        let condition = QueryCondition::initial(&descriptor, config.default_limit, default_filters);
        let header = header_indicator(&config, Some(&descriptor));
        let menu = menu_indicator(Some(&descriptor));
        Ok(Self {
            config,
            condition,
            descriptor,
            header,
            menu,
            pending_sort: None,
            generation: 0,
        })
    }

    /// The current query condition.
    #[must_use]
    pub fn condition(&self) -> &QueryCondition {
        &self.condition
    }

    /// The active sort descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &SortDescriptor {
        &self.descriptor
    }

    /// Both visual sort indicators, for rendering.
    #[must_use]
    pub fn indicators(&self) -> (&MenuIndicator, &HeaderIndicator) {
        (&self.menu, &self.header)
    }

    /// The sort applied by the most recent dispatch whose fetch has not yet
    /// settled, if any. Used to suppress menu hover styling mid-flight.
    #[must_use]
    pub fn pending_sort(&self) -> Option<&SortDescriptor> {
        self.pending_sort.as_ref()
    }

    /// The screen configuration this coordinator was built from.
    #[must_use]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Generation stamped on the most recently issued ticket.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a ticket generation is still the latest one.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Pure reconciliation: one event against the current state.
    ///
    /// Returns `None` for no-ops: unknown column or sort keys, and events
    /// whose semantic content equals current state. A no-op must not trigger
    /// a refetch.
    #[must_use]
    pub fn apply(&self, event: &ListEvent) -> Option<Reconciled> {
        match event {
            ListEvent::MenuSort(descriptor) => {
                if !self.config.is_sortable(&descriptor.key) {
                    debug!(key = %descriptor.key, "dropping menu sort for non-sortable key");
                    return None;
                }
                self.reconcile_sort(descriptor.clone())
            }
            ListEvent::HeaderClick { column, order } => {
                let Some(key) = self.config.sort_key_for(column) else {
                    debug!(%column, "dropping header click on unbound column");
                    return None;
                };
                let descriptor = match order {
                    Some(order) => SortDescriptor::new(key, *order),
                    // Clear-click fallback: keep the previous key, invert the
                    // previous direction.
                    None => self.descriptor.inverted(),
                };
                self.reconcile_sort(descriptor)
            }
            ListEvent::FilterChange(partial) => {
                let merged = self.merge_filters(partial);
                if merged == self.condition.filters {
                    debug!("dropping filter change with no semantic effect");
                    return None;
                }
                Some(self.passthrough(self.condition.with_filters(merged)))
            }
            ListEvent::SearchInput(raw) => {
                let keyword = if raw.is_empty() {
                    None
                } else {
                    Some(raw.clone())
                };
                if keyword == self.condition.keyword {
                    debug!("dropping unchanged search keyword");
                    return None;
                }
                Some(self.passthrough(self.condition.with_keyword(keyword)))
            }
            ListEvent::PageChange { offset, limit } => {
                let next = self.condition.with_page(*offset, *limit);
                if next == self.condition {
                    debug!("dropping page change with no semantic effect");
                    return None;
                }
                Some(self.passthrough(next))
            }
            ListEvent::Refresh => Some(self.passthrough(self.condition.clone())),
        }
    }

    /// Reconcile and commit. Every applied event issues a fresh
    /// [`FetchTicket`]; no-ops return `None` and leave all state untouched.
    pub fn dispatch(&mut self, event: &ListEvent) -> Option<FetchTicket> {
        let reconciled = self.apply(event)?;
        trace!(
            sort = %reconciled.descriptor.key,
            offset = reconciled.condition.offset,
            sort_changed = reconciled.sort_changed,
            "applying reconciled event"
        );

        // Commit all projections in one step. Both indicators land before the
        // ticket (and thus any fetch) exists.
        self.condition = reconciled.condition;
        self.header = reconciled.header;
        self.menu = reconciled.menu;
        if reconciled.sort_changed {
            self.pending_sort = Some(reconciled.descriptor.clone());
        }
        self.descriptor = reconciled.descriptor;

        self.generation += 1;
        Some(FetchTicket::new(self.generation, self.condition.clone()))
    }

    /// Record that the fetch for `generation` settled (committed or failed).
    ///
    /// Returns whether that generation is still the current one. Settling the
    /// current generation clears the pending-sort flag; stale settlements
    /// leave it alone because a newer fetch is still outstanding.
    pub fn settle(&mut self, generation: u64) -> bool {
        let current = self.is_current(generation);
        if current {
            self.pending_sort = None;
        }
        current
    }

    fn reconcile_sort(&self, descriptor: SortDescriptor) -> Option<Reconciled> {
        if descriptor == self.descriptor {
            debug!(key = %descriptor.key, "dropping sort event matching active sort");
            return None;
        }
        let header = header_indicator(&self.config, Some(&descriptor));
        let menu = menu_indicator(Some(&descriptor));
        Some(Reconciled {
            condition: self.condition.with_sort(&descriptor),
            descriptor,
            header,
            menu,
            sort_changed: true,
        })
    }

    /// A reconciliation that leaves sort and indicators untouched.
    fn passthrough(&self, condition: QueryCondition) -> Reconciled {
        Reconciled {
            condition,
            descriptor: self.descriptor.clone(),
            header: self.header.clone(),
            menu: self.menu.clone(),
            sort_changed: false,
        }
    }

    fn merge_filters(&self, partial: &FilterMap) -> FilterMap {
        let mut merged = self.condition.filters.clone();
        for (key, value) in partial {
            if !self.config.accepts_filter(key) {
                debug!(%key, "dropping filter key outside screen whitelist");
                continue;
            }
            if value.is_null() {
                merged.shift_remove(key);
            } else {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}
