//! Entity kinds and their storage mapping.
//!
//! Serialized as `snake_case` via serde, matching the values stored in the
//! `favorites.item_kind` column.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four catalog kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Event,
    Podcast,
    Timeline,
    Grant,
}

/// Direction of a default ordering column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl EntityKind {
    pub const ALL: [Self; 4] = [Self::Event, Self::Podcast, Self::Timeline, Self::Grant];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Podcast => "podcast",
            Self::Timeline => "timeline",
            Self::Grant => "grant",
        }
    }

    /// Backing table name.
    ///
    /// Exhaustive on purpose: adding a kind forces a table mapping.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Event => "cultural_events",
            Self::Podcast => "podcasts",
            Self::Timeline => "timeline_events",
            Self::Grant => "grants",
        }
    }

    /// Column and direction the store orders this kind by when fetching.
    #[must_use]
    pub const fn default_order(self) -> (&'static str, SortDirection) {
        match self {
            Self::Event => ("date", SortDirection::Ascending),
            Self::Podcast => ("created_at", SortDirection::Descending),
            Self::Timeline => ("year", SortDirection::Ascending),
            Self::Grant => ("deadline", SortDirection::Ascending),
        }
    }

    /// `ORDER BY` clause body for the default ordering.
    #[must_use]
    pub fn order_clause(self) -> String {
        let (column, direction) = self.default_order();
        format!("{column} {}", direction.as_sql())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_distinct() {
        let mut tables: Vec<_> = EntityKind::ALL.iter().map(|k| k.table()).collect();
        tables.sort_unstable();
        tables.dedup();
        assert_eq!(tables.len(), 4);
    }

    #[test]
    fn default_orders() {
        assert_eq!(EntityKind::Event.order_clause(), "date ASC");
        assert_eq!(EntityKind::Grant.order_clause(), "deadline ASC");
        assert_eq!(EntityKind::Timeline.order_clause(), "year ASC");
        assert_eq!(EntityKind::Podcast.order_clause(), "created_at DESC");
    }

    #[test]
    fn serde_matches_as_str() {
        for kind in EntityKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }
}
