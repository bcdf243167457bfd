//! Departure event types.
//!
//! A `RawDeparture` is what the upstream feeds hand us: a scheduled
//! instant, possibly a live estimate, possibly a direction. A
//! `NormalizedEvent` is the canonical form the planner works with,
//! carrying a single resolved instant.
//!
//! All instants are absolute UTC. Feeds from different providers are
//! only ever compared in epoch terms, never as naive local times.

use chrono::{DateTime, Utc};

use super::RouteId;

/// A departure record as supplied by an upstream feed.
///
/// Immutable input data, one per departure per query. Either instant
/// may be missing; a record with neither is malformed and is dropped
/// during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeparture {
    /// Route the departure belongs to.
    pub route: RouteId,

    /// Timetabled departure instant, if the feed supplied one.
    pub scheduled: Option<DateTime<Utc>>,

    /// Live estimated departure instant, if the feed supplied one.
    pub estimated: Option<DateTime<Utc>>,

    /// Direction identifier (terminus name for trains). Buses carry
    /// no direction in this feed.
    pub direction: Option<String>,
}

impl RawDeparture {
    /// The best-known departure instant: the live estimate when
    /// present, otherwise the schedule. `None` means the record is
    /// malformed.
    pub fn resolved(&self) -> Option<DateTime<Utc>> {
        self.estimated.or(self.scheduled)
    }
}

/// A departure with its instant resolved.
///
/// Derived once per raw record, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent {
    /// Route the departure belongs to.
    pub route: RouteId,

    /// Resolved departure instant (estimate preferred over schedule).
    pub departs: DateTime<Utc>,

    /// Direction identifier carried through from the raw record.
    pub direction: Option<String>,
}
