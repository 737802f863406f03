//! Per-header sort direction state.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::row::HeaderList;

/// Three-state sort toggle kept independently for every header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction stored after a click sorted with `self`.
    ///
    /// `Unsorted` and `Ascending` both lead to `Descending`; `Descending` leads
    /// back to `Ascending`. There is no way back to `Unsorted`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Unsorted | Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether sorting with this direction orders rows in ascending order.
    pub fn sorts_ascending(self) -> bool {
        matches!(self, Self::Unsorted | Self::Ascending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsorted => "UNSORTED",
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of header name to its current [`SortDirection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    directions: BTreeMap<String, SortDirection>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every header starts out `Unsorted`.
    pub fn for_headers(headers: &HeaderList) -> Self {
        Self {
            directions: headers
                .iter()
                .map(|header| (header.to_string(), SortDirection::Unsorted))
                .collect(),
        }
    }

    /// Current direction for a header; headers never seen are `Unsorted`.
    pub fn direction(&self, header: &str) -> SortDirection {
        self.directions.get(header).copied().unwrap_or_default()
    }

    pub fn set(&mut self, header: impl Into<String>, direction: SortDirection) {
        self.directions.insert(header.into(), direction);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SortDirection)> {
        self.directions
            .iter()
            .map(|(header, direction)| (header.as_str(), *direction))
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_never_returns_to_unsorted() {
        let mut direction = SortDirection::Unsorted;
        for _ in 0..6 {
            direction = direction.next();
            assert_ne!(direction, SortDirection::Unsorted);
        }
    }

    #[test]
    fn unknown_header_is_unsorted() {
        let state = SortState::new();
        assert_eq!(state.direction("city"), SortDirection::Unsorted);
    }
}
