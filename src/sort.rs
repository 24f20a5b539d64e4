//! Sort descriptor value types.
//!
//! A list has exactly one active sort at a time, described by a
//! [`SortDescriptor`]. Descriptors are replaced wholesale whenever any input
//! channel requests a new sort; they are never mutated field-by-field.

use serde::{Deserialize, Serialize};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first (wire token `asc`).
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first (wire token `desc`).
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Wire token used in serialized query conditions.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// The single active `{key, direction}` pair governing list order.
///
/// `key` must belong to the owning screen's sortable-field whitelist; the
/// coordinator rejects events naming any other key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor {
    /// Backend field name to sort by.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// Create a descriptor for the given key and direction.
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Shorthand for an ascending descriptor.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Shorthand for a descending descriptor.
    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Same key, opposite direction.
    ///
    /// This is the header-click fallback: clearing a column's sort cycles to
    /// the inverse of whatever was last active rather than a fixed default.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            key: self.key.clone(),
            direction: self.direction.invert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_invert() {
        assert_eq!(SortDirection::Ascending.invert(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.invert(), SortDirection::Ascending);
    }

    #[test]
    fn test_direction_wire_tokens() {
        assert_eq!(SortDirection::Ascending.as_param(), "asc");
        assert_eq!(SortDirection::Descending.as_param(), "desc");

        let json = serde_json::to_string(&SortDirection::Descending).unwrap();
        assert_eq!(json, "\"desc\"");
    }

    #[test]
    fn test_descriptor_inverted_keeps_key() {
        let desc = SortDescriptor::ascending("name");
        let inv = desc.inverted();
        assert_eq!(inv.key, "name");
        assert_eq!(inv.direction, SortDirection::Descending);
    }
}
