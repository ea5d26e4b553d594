//! Review status shared by ad variations and UGC scripts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a generated record.
///
/// Every record is always in exactly one of these four states. The board
/// groups records into one lane per status, and the galleries filter on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Freshly generated, not yet looked at
    Draft,
    /// Under human review
    Review,
    /// Approved and ready to publish
    Ready,
    /// Already pushed to an ad platform
    Exported,
}

impl Status {
    /// All statuses in lane order (left to right on the board).
    pub const ALL: [Self; 4] = [Self::Draft, Self::Review, Self::Ready, Self::Exported];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Review => "Review",
            Self::Ready => "Ready",
            Self::Exported => "Exported",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Types that carry a review status.
///
/// Implemented by both record kinds so the gallery filter can operate on
/// either list with the same predicate.
pub trait HasStatus {
    /// The record's current status.
    fn status(&self) -> Status;
}

/// Gallery filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show everything, original order
    #[default]
    All,
    /// Show only records with the given status
    Only(Status),
}

impl StatusFilter {
    /// Filter cycle order, matching the dashboard's filter row.
    const CYCLE: [Self; 5] = [
        Self::All,
        Self::Only(Status::Ready),
        Self::Only(Status::Review),
        Self::Only(Status::Draft),
        Self::Only(Status::Exported),
    ];

    /// Whether a record with status `status` passes this filter.
    #[must_use]
    pub fn matches(&self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(s) => *s == status,
        }
    }

    /// The next filter in cycle order (wraps around).
    #[must_use]
    pub fn next(&self) -> Self {
        let pos = Self::CYCLE.iter().position(|f| f == self).unwrap_or(0);
        Self::CYCLE[(pos + 1) % Self::CYCLE.len()]
    }

    /// Label for the filter row.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(s) => s.label(),
        }
    }
}

/// Apply a status filter to a record slice.
///
/// Pure predicate over the in-memory list: `All` returns every record in
/// original order, `Only(s)` returns exactly the records whose status is `s`.
#[must_use]
pub fn filter_records<T: HasStatus>(records: &[T], filter: StatusFilter) -> Vec<&T> {
    records
        .iter()
        .filter(|r| filter.matches(r.status()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec(Status);

    impl HasStatus for Rec {
        fn status(&self) -> Status {
            self.0
        }
    }

    fn sample() -> Vec<Rec> {
        vec![
            Rec(Status::Draft),
            Rec(Status::Ready),
            Rec(Status::Review),
            Rec(Status::Ready),
            Rec(Status::Exported),
        ]
    }

    #[test]
    fn test_filter_all_returns_full_list_in_order() {
        let records = sample();
        let filtered = filter_records(&records, StatusFilter::All);
        assert_eq!(filtered.len(), records.len());
        let statuses: Vec<Status> = filtered.iter().map(|r| r.status()).collect();
        assert_eq!(
            statuses,
            vec![
                Status::Draft,
                Status::Ready,
                Status::Review,
                Status::Ready,
                Status::Exported
            ]
        );
    }

    #[test]
    fn test_filter_only_matches_exactly() {
        let records = sample();
        for status in Status::ALL {
            let filtered = filter_records(&records, StatusFilter::Only(status));
            assert!(filtered.iter().all(|r| r.status() == status));
            let expected = records.iter().filter(|r| r.status() == status).count();
            assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = StatusFilter::All;
        for _ in 0..StatusFilter::CYCLE.len() {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&Status::Exported).unwrap();
        assert_eq!(json, "\"exported\"");
        let back: Status = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(back, Status::Draft);
    }
}
