//! Transfer matching.
//!
//! The heart of the recommender: given when the rider reaches a
//! station and the buses known to depart from its stop, pick the
//! earliest bus the rider can physically make.

use chrono::{DateTime, Duration, Utc};

use crate::domain::NormalizedEvent;

/// Select the earliest feasible bus for a transfer.
///
/// A bus is feasible when its resolved departure is at or after
/// `arrival + buffer`. A single linear scan finds the minimum among
/// the feasible events; no sort is needed. On an exact departure-time
/// tie the earliest-seen event wins (input order; the feed does not
/// produce meaningful duplicates, so the choice carries no meaning).
///
/// Returns `None` when no event qualifies, e.g. after the last bus of
/// the day. Direction is never inspected here; train direction
/// filtering happens upstream.
pub fn match_transfer<'a>(
    arrival: DateTime<Utc>,
    buffer: Duration,
    events: &'a [NormalizedEvent],
) -> Option<&'a NormalizedEvent> {
    let earliest_feasible = arrival + buffer;

    let mut best: Option<&NormalizedEvent> = None;
    for event in events {
        if event.departs < earliest_feasible {
            continue;
        }
        match best {
            Some(current) if current.departs <= event.departs => {}
            _ => best = Some(event),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteId;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, h, m, 0).unwrap()
    }

    fn bus(h: u32, m: u32) -> NormalizedEvent {
        NormalizedEvent {
            route: RouteId::parse("143").unwrap(),
            departs: utc(h, m),
            direction: None,
        }
    }

    #[test]
    fn picks_earliest_feasible() {
        // Arrival 10:00, buffer 3: the 10:01 bus is unreachable,
        // the 10:04 bus is the answer.
        let buses = [bus(10, 1), bus(10, 4), bus(10, 10)];

        let matched = match_transfer(utc(10, 0), Duration::minutes(3), &buses).unwrap();
        assert_eq!(matched.departs, utc(10, 4));
    }

    #[test]
    fn boundary_departure_is_feasible() {
        // departs == arrival + buffer qualifies.
        let buses = [bus(10, 3)];

        let matched = match_transfer(utc(10, 0), Duration::minutes(3), &buses);
        assert!(matched.is_some());
    }

    #[test]
    fn unsorted_input_still_finds_minimum() {
        let buses = [bus(10, 30), bus(10, 5), bus(10, 12)];

        let matched = match_transfer(utc(10, 0), Duration::minutes(3), &buses).unwrap();
        assert_eq!(matched.departs, utc(10, 5));
    }

    #[test]
    fn none_when_no_bus_qualifies() {
        let buses = [bus(10, 1), bus(10, 2)];

        assert!(match_transfer(utc(10, 0), Duration::minutes(3), &buses).is_none());
        assert!(match_transfer(utc(10, 0), Duration::minutes(3), &[]).is_none());
    }

    #[test]
    fn tie_keeps_first_seen() {
        let mut first = bus(10, 10);
        first.route = RouteId::parse("A1").unwrap();
        let mut second = bus(10, 10);
        second.route = RouteId::parse("B2").unwrap();

        let buses = [first.clone(), second];
        let matched = match_transfer(utc(10, 0), Duration::minutes(3), &buses).unwrap();
        assert_eq!(matched.route, first.route);
    }

    #[test]
    fn zero_buffer() {
        let buses = [bus(10, 0)];

        let matched = match_transfer(utc(10, 0), Duration::minutes(0), &buses);
        assert!(matched.is_some());
    }
}
