//! Conversion from API DTOs to domain departures.
//!
//! Conversion is deliberately forgiving: an unparseable instant
//! becomes `None` (the normalizer later drops records with no usable
//! instant at all), and a record with a missing or invalid route
//! identifier is skipped. A bad record never fails the whole board.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{RawDeparture, RouteId};

use super::types::{BusBoard, TrainBoard};

/// Convert a train board into raw departures.
pub fn convert_train_board(board: &TrainBoard) -> Vec<RawDeparture> {
    board
        .departures
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|dep| {
            let route = parse_route(dep.line.as_deref())?;
            Some(RawDeparture {
                route,
                scheduled: parse_instant(dep.scheduled_departure.as_deref()),
                estimated: parse_instant(dep.estimated_departure.as_deref()),
                direction: dep.direction.clone(),
            })
        })
        .collect()
}

/// Convert a bus board into raw departures.
pub fn convert_bus_board(board: &BusBoard) -> Vec<RawDeparture> {
    board
        .arrivals
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|arr| {
            let route = parse_route(arr.route.as_deref())?;
            Some(RawDeparture {
                route,
                scheduled: parse_instant(arr.scheduled_departure.as_deref()),
                estimated: parse_instant(arr.estimated_departure.as_deref()),
                direction: None,
            })
        })
        .collect()
}

fn parse_route(raw: Option<&str>) -> Option<RouteId> {
    let raw = raw?;
    match RouteId::parse(raw) {
        Ok(route) => Some(route),
        Err(e) => {
            debug!(route = raw, error = %e, "skipping departure with invalid route");
            None
        }
    }
}

/// Parse an ISO 8601 instant to UTC. Returns `None` on any failure;
/// whether the record is still usable is the normalizer's call.
fn parse_instant(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            debug!(instant = raw, error = %e, "unparseable departure instant");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::{BusArrival, TrainDeparture};
    use chrono::TimeZone;

    fn train_dep(line: &str, scheduled: Option<&str>, estimated: Option<&str>) -> TrainDeparture {
        TrainDeparture {
            line: Some(line.to_string()),
            scheduled_departure: scheduled.map(str::to_string),
            estimated_departure: estimated.map(str::to_string),
            direction: Some("Harborfront".to_string()),
            platform: None,
        }
    }

    #[test]
    fn converts_instants_to_utc() {
        let board = TrainBoard {
            generated_at: None,
            station_id: None,
            departures: Some(vec![train_dep(
                "HL1",
                Some("2025-06-10T19:00:00+09:00"),
                None,
            )]),
        };

        let raw = convert_train_board(&board);
        assert_eq!(raw.len(), 1);
        assert_eq!(
            raw[0].scheduled,
            Some(Utc.with_ymd_and_hms(2025, 6, 10, 10, 0, 0).unwrap())
        );
        assert_eq!(raw[0].direction.as_deref(), Some("Harborfront"));
    }

    #[test]
    fn unparseable_instant_becomes_none() {
        let board = TrainBoard {
            generated_at: None,
            station_id: None,
            departures: Some(vec![train_dep("HL1", Some("not a time"), Some("2025-06-10T10:02:00Z"))]),
        };

        let raw = convert_train_board(&board);
        assert_eq!(raw[0].scheduled, None);
        assert!(raw[0].estimated.is_some());
    }

    #[test]
    fn missing_route_skips_record() {
        let board = BusBoard {
            generated_at: None,
            stop_id: None,
            arrivals: Some(vec![
                BusArrival {
                    route: None,
                    scheduled_departure: Some("2025-06-10T10:07:00Z".to_string()),
                    estimated_departure: None,
                    vehicle_id: None,
                },
                BusArrival {
                    route: Some("143".to_string()),
                    scheduled_departure: Some("2025-06-10T10:09:00Z".to_string()),
                    estimated_departure: None,
                    vehicle_id: None,
                },
            ]),
        };

        let raw = convert_bus_board(&board);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].route.as_str(), "143");
    }

    #[test]
    fn invalid_route_skips_record() {
        let board = BusBoard {
            generated_at: None,
            stop_id: None,
            arrivals: Some(vec![BusArrival {
                route: Some("not a route!".to_string()),
                scheduled_departure: Some("2025-06-10T10:07:00Z".to_string()),
                estimated_departure: None,
                vehicle_id: None,
            }]),
        };

        assert!(convert_bus_board(&board).is_empty());
    }

    #[test]
    fn empty_board_converts_to_empty() {
        let board = BusBoard {
            generated_at: None,
            stop_id: None,
            arrivals: None,
        };
        assert!(convert_bus_board(&board).is_empty());
    }
}
