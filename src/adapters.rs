//! Table and menu adapters.
//!
//! Pure, total translation between the coordinator's abstract
//! [`SortDescriptor`] and each widget's native vocabulary: the table renders
//! one arrow per column, the dropdown highlights one menu entry. Adapters
//! carry no state and perform no I/O, so an adapter bug can only ever distort
//! the visual reflection of a sort, never the query condition itself.

use crate::screen::ScreenConfig;
use crate::sort::{SortDescriptor, SortDirection};

/// Visual sort state of the table header row.
///
/// At most one column carries an arrow. Columns not bound to the active sort
/// key (and every column when the active key is unbound or absent) report
/// `None` from [`arrow_for`](Self::arrow_for).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderIndicator {
    active: Option<(String, SortDirection)>,
}

impl HeaderIndicator {
    /// Indicator with no arrow on any column.
    #[must_use]
    pub const fn cleared() -> Self {
        Self { active: None }
    }

    /// The arrow for one column. Total over every column key.
    #[must_use]
    pub fn arrow_for(&self, column: &str) -> Option<SortDirection> {
        match &self.active {
            Some((active, direction)) if active == column => Some(*direction),
            _ => None,
        }
    }

    /// The column currently carrying an arrow, if any.
    #[must_use]
    pub fn active_column(&self) -> Option<(&str, SortDirection)> {
        self.active.as_ref().map(|(c, d)| (c.as_str(), *d))
    }

    /// Decode the indicator back into a sort descriptor via the screen's
    /// column bindings.
    #[must_use]
    pub fn decode(&self, config: &ScreenConfig) -> Option<SortDescriptor> {
        let (column, direction) = self.active.as_ref()?;
        let key = config.sort_key_for(column)?;
        Some(SortDescriptor::new(key, *direction))
    }
}

/// Visual sort state of the external dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuIndicator {
    active: Option<SortDescriptor>,
}

impl MenuIndicator {
    /// Indicator with no highlighted entry.
    #[must_use]
    pub const fn cleared() -> Self {
        Self { active: None }
    }

    /// Whether a given menu entry is the active one.
    #[must_use]
    pub fn is_active(&self, entry: &SortDescriptor) -> bool {
        self.active.as_ref() == Some(entry)
    }

    /// Decode the indicator back into a sort descriptor.
    #[must_use]
    pub fn decode(&self) -> Option<SortDescriptor> {
        self.active.clone()
    }
}

/// Derive the table header indicator from the active sort.
///
/// Total: a descriptor whose key is bound to no column yields a fully
/// cleared header, and `None` (no active sort) clears everything.
#[must_use]
pub fn header_indicator(
    config: &ScreenConfig,
    descriptor: Option<&SortDescriptor>,
) -> HeaderIndicator {
    let Some(descriptor) = descriptor else {
        return HeaderIndicator::cleared();
    };
    match config.column_for(&descriptor.key) {
        Some(column) => HeaderIndicator {
            active: Some((column.to_string(), descriptor.direction)),
        },
        None => HeaderIndicator::cleared(),
    }
}

/// Derive the menu indicator from the active sort.
#[must_use]
pub fn menu_indicator(descriptor: Option<&SortDescriptor>) -> MenuIndicator {
    MenuIndicator {
        active: descriptor.cloned(),
    }
}
