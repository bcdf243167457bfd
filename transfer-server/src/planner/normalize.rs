//! Departure normalization.
//!
//! Converts raw feed records into canonical timed events. The live
//! estimate is preferred over the schedule because it reflects
//! real-time running; a record with neither instant is unusable and
//! is dropped without failing the batch, matching the fail-soft
//! behavior expected of a real-time feed.

use tracing::debug;

use crate::domain::{NormalizedEvent, RawDeparture};

/// Normalize a batch of raw departures.
///
/// Output preserves input order. No direction or route filtering
/// happens here; later stages decide what is relevant. Malformed
/// records (no usable instant) are silently omitted.
pub fn normalize(raw: &[RawDeparture]) -> Vec<NormalizedEvent> {
    raw.iter()
        .filter_map(|record| match record.resolved() {
            Some(departs) => Some(NormalizedEvent {
                route: record.route.clone(),
                departs,
                direction: record.direction.clone(),
            }),
            None => {
                debug!(route = %record.route, "dropping departure with no usable instant");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteId;
    use chrono::{DateTime, TimeZone, Utc};

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, h, m, 0).unwrap()
    }

    fn raw(
        route: &str,
        scheduled: Option<DateTime<Utc>>,
        estimated: Option<DateTime<Utc>>,
    ) -> RawDeparture {
        RawDeparture {
            route: RouteId::parse(route).unwrap(),
            scheduled,
            estimated,
            direction: None,
        }
    }

    #[test]
    fn estimate_wins_over_schedule() {
        let events = normalize(&[raw("143", Some(utc(10, 0)), Some(utc(10, 4)))]);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].departs, utc(10, 4));
    }

    #[test]
    fn schedule_used_when_no_estimate() {
        let events = normalize(&[raw("143", Some(utc(10, 0)), None)]);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].departs, utc(10, 0));
    }

    #[test]
    fn malformed_record_dropped_others_kept() {
        let events = normalize(&[
            raw("143", Some(utc(10, 0)), None),
            raw("143", None, None),
            raw("143", None, Some(utc(10, 9))),
        ]);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].departs, utc(10, 0));
        assert_eq!(events[1].departs, utc(10, 9));
    }

    #[test]
    fn order_preserved() {
        let events = normalize(&[
            raw("72", Some(utc(10, 30)), None),
            raw("72", Some(utc(10, 10)), None),
        ]);

        // Normalization does not reorder, even when out of time order.
        assert_eq!(events[0].departs, utc(10, 30));
        assert_eq!(events[1].departs, utc(10, 10));
    }

    #[test]
    fn direction_carried_through() {
        let mut record = raw("72", Some(utc(10, 0)), None);
        record.direction = Some("Harborfront".to_string());

        let events = normalize(&[record]);
        assert_eq!(events[0].direction.as_deref(), Some("Harborfront"));
    }

    #[test]
    fn empty_input() {
        assert!(normalize(&[]).is_empty());
    }
}
